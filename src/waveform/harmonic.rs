use std::f64::consts::TAU;

use smallvec::{SmallVec, smallvec};

use crate::foundation::core::Point;
use crate::waveform::frame::{PathFrame, RegionBuilder};
use crate::waveform::spec::WaveformFamily;
use crate::waveform::synth::WaveCtx;

/// One weighted sine term of a multi-harmonic wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Harmonic {
    pub weight: f64,
    /// Spatial frequency relative to the spec frequency.
    pub freq_mul: f64,
    /// Integer multiple of the global phase, so a `2π` shift repeats the frame.
    pub phase_mul: f64,
    pub offset: f64,
}

impl Harmonic {
    const fn new(weight: f64, freq_mul: f64, phase_mul: f64, offset: f64) -> Self {
        Self {
            weight,
            freq_mul,
            phase_mul,
            offset,
        }
    }
}

pub(crate) type Harmonics = SmallVec<[Harmonic; 3]>;

pub(crate) fn harmonics(family: WaveformFamily) -> Harmonics {
    match family {
        WaveformFamily::Neon => smallvec![
            Harmonic::new(0.85, 1.0, 1.0, 0.0),
            Harmonic::new(0.15, 3.0, 2.0, 0.7),
        ],
        WaveformFamily::Plasma => smallvec![
            Harmonic::new(0.6, 1.0, 1.0, 0.0),
            Harmonic::new(0.3, 2.3, -2.0, 1.3),
            Harmonic::new(0.1, 4.1, 3.0, 2.1),
        ],
        _ => smallvec![Harmonic::new(1.0, 1.0, 1.0, 0.0)],
    }
}

pub(crate) fn sample_count(family: WaveformFamily) -> usize {
    match family {
        WaveformFamily::Plasma => 120,
        WaveformFamily::Neon => 80,
        WaveformFamily::Curved => 50,
        _ => 60,
    }
}

/// Midline displacement at `x` for the given global phase.
pub(crate) fn displacement(ctx: &WaveCtx, terms: &[Harmonic], x: f64, phase: f64) -> f64 {
    let u = x / ctx.extent.width;
    terms
        .iter()
        .map(|h| {
            let arg = TAU * ctx.frequency * h.freq_mul * u + phase * h.phase_mul + h.offset;
            h.weight * arg.sin()
        })
        .sum::<f64>()
        * ctx.amplitude
}

pub(crate) fn sample_points(ctx: &WaveCtx, family: WaveformFamily, phase: f64) -> Vec<Point> {
    let terms = harmonics(family);
    let n = sample_count(family);
    let cy = ctx.extent.center_y();
    (0..n)
        .map(|i| {
            let x = ctx.extent.width * i as f64 / (n - 1) as f64;
            Point::new(x, cy + displacement(ctx, &terms, x, phase))
        })
        .collect()
}

/// Sine, neon, plasma and curved frames.
pub(crate) fn frame(ctx: &WaveCtx, family: WaveformFamily, phase: f64) -> PathFrame {
    let points = sample_points(ctx, family, phase);
    let mut b = RegionBuilder::start(ctx.extent, points[0]);
    if family == WaveformFamily::Curved {
        b.midpoint_quads(&points);
    } else {
        b.polyline(&points);
    }
    PathFrame {
        phase,
        points,
        path: b.finish(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/harmonic.rs"]
mod tests;
