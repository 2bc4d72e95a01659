use std::f64::consts::TAU;

use crate::foundation::core::Point;
use crate::foundation::rng::noise01;
use crate::waveform::frame::{PathFrame, RegionBuilder};
use crate::waveform::synth::WaveCtx;

pub(crate) const SEGMENTS: usize = 32;

/// Chance that a node gets a large tear instead of a small wobble.
const TEAR_THRESHOLD: f64 = 0.75;

fn node_key(index: usize, phase: f64, channel: u64) -> u64 {
    (index as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(phase.to_bits().rotate_left(17))
        ^ channel.wrapping_mul(0xA24B_AED4_963E_E407)
}

/// Jittered staircase around a flattened sine.
///
/// Offsets come from `(spec seed, node index, phase)`, so the same spec always yields the
/// same frames. End nodes keep their x so the region still spans the full width.
pub(crate) fn frame(ctx: &WaveCtx, phase: f64) -> PathFrame {
    let cy = ctx.extent.center_y();
    let step = ctx.extent.width / SEGMENTS as f64;
    let amp = ctx.amplitude;

    let points: Vec<Point> = (0..=SEGMENTS)
        .map(|i| {
            let nominal = step * i as f64;
            let jx = if i == 0 || i == SEGMENTS {
                0.0
            } else {
                (noise01(ctx.seed, node_key(i, phase, 0)) - 0.5) * step * 0.6
            };
            let x = nominal + jx;
            let base = cy + amp * 0.55 * (TAU * ctx.frequency * x / ctx.extent.width + phase).sin();
            let r = noise01(ctx.seed, node_key(i, phase, 1));
            let spread = if r > TEAR_THRESHOLD { 0.9 } else { 0.15 };
            let jy = (noise01(ctx.seed, node_key(i, phase, 2)) - 0.5) * amp * spread;
            Point::new(x, base + jy)
        })
        .collect();

    let mut b = RegionBuilder::start(ctx.extent, points[0]);
    for w in points.windows(2) {
        b.line_to(Point::new(w[1].x, w[0].y));
        b.line_to(w[1]);
    }
    PathFrame {
        phase,
        points,
        path: b.finish(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/glitch.rs"]
mod tests;
