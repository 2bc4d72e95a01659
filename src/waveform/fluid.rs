use std::f64::consts::TAU;

use crate::foundation::core::Point;
use crate::waveform::frame::{PathFrame, RegionBuilder};
use crate::waveform::synth::WaveCtx;

pub(crate) const NODES: usize = 8;

/// Slow, heavy swell of each node.
const VISCOSITY_WEIGHT: f64 = 0.65;
/// Faster ripple layered on top.
const TURBULENCE_WEIGHT: f64 = 0.35;

/// Liquid surface: a few independently perturbed nodes joined by smooth cubic spans.
pub(crate) fn frame(ctx: &WaveCtx, phase: f64) -> PathFrame {
    let cy = ctx.extent.center_y();
    let last = (NODES - 1) as f64;
    let points: Vec<Point> = (0..NODES)
        .map(|k| {
            let u = k as f64 / last;
            let viscosity = (phase + TAU * ctx.frequency * u).sin();
            let turbulence = (2.0 * phase + TAU * ctx.frequency * 1.7 * u + 0.9).sin();
            let y = cy
                + ctx.amplitude * (VISCOSITY_WEIGHT * viscosity + TURBULENCE_WEIGHT * turbulence);
            Point::new(ctx.extent.width * u, y)
        })
        .collect();

    let mut b = RegionBuilder::start(ctx.extent, points[0]);
    b.catmull_rom(&points);
    PathFrame {
        phase,
        points,
        path: b.finish(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/fluid.rs"]
mod tests;
