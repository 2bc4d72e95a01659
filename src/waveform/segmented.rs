use crate::foundation::core::{Point, lerp, lerp_point};
use crate::waveform::frame::{PathFrame, RegionBuilder};
use crate::waveform::synth::WaveCtx;

/// Upper bound on segments; the caller is expected to clamp frequency well below this.
const MAX_SEGMENTS: usize = 256;

/// Number of equal-width segments across the extent.
pub(crate) fn segment_count(frequency: f64) -> usize {
    (frequency.round() as usize).clamp(1, MAX_SEGMENTS)
}

struct Segments {
    count: usize,
    width: f64,
}

impl Segments {
    fn new(ctx: &WaveCtx) -> Self {
        let count = segment_count(ctx.frequency);
        Self {
            count,
            width: ctx.extent.width / count as f64,
        }
    }

    fn x0(&self, i: usize) -> f64 {
        self.width * i as f64
    }

    fn x1(&self, i: usize) -> f64 {
        self.width * (i + 1) as f64
    }
}

/// Alternating plateaus whose levels and corner radii drift with phase.
pub(crate) fn square(ctx: &WaveCtx, phase: f64) -> PathFrame {
    let seg = Segments::new(ctx);
    let cy = ctx.extent.center_y();
    let amp = ctx.amplitude;

    let mut points = Vec::with_capacity(seg.count * 2);
    for i in 0..seg.count {
        let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
        let jitter = 0.12 * (0.5 + 0.5 * (phase + i as f64 * 1.3).sin());
        let y = cy + sign * amp * (1.0 - jitter);
        points.push(Point::new(seg.x0(i), y));
        points.push(Point::new(seg.x1(i), y));
    }

    let radius = (seg.width * 0.12).min(amp * 0.5) * (0.6 + 0.4 * phase.cos());
    let mut b = RegionBuilder::start(ctx.extent, points[0]);
    b.rounded_polyline(&points, radius);
    PathFrame {
        phase,
        points,
        path: b.finish(),
    }
}

/// Fixed duty-cycle pulses over a flat baseline; only pulse heights move.
pub(crate) fn pulse(ctx: &WaveCtx, phase: f64) -> PathFrame {
    let seg = Segments::new(ctx);
    let cy = ctx.extent.center_y();
    let amp = ctx.amplitude;
    let low = cy + amp;

    let mut points = Vec::with_capacity(seg.count * 4 + 1);
    points.push(Point::new(0.0, low));
    for i in 0..seg.count {
        let x0 = seg.x0(i);
        let xd = x0 + seg.width * ctx.duty_cycle;
        let high = cy - amp * (0.85 + 0.15 * (phase + i as f64 * 0.9).sin());
        points.push(Point::new(x0, high));
        points.push(Point::new(xd, high));
        points.push(Point::new(xd, low));
        points.push(Point::new(seg.x1(i), low));
    }

    let mut b = RegionBuilder::start(ctx.extent, points[0]);
    b.polyline(&points);
    PathFrame {
        phase,
        points,
        path: b.finish(),
    }
}

/// Curved ramps from the low extremum up to a peak, then a vertical drop.
pub(crate) fn sawtooth(ctx: &WaveCtx, phase: f64) -> PathFrame {
    let seg = Segments::new(ctx);
    let cy = ctx.extent.center_y();
    let amp = ctx.amplitude;
    let low = cy + amp;
    let roundness = 0.5 + 0.5 * phase.sin();

    let origin = Point::new(0.0, low);
    let mut points = Vec::with_capacity(seg.count * 2 + 1);
    points.push(origin);
    let mut b = RegionBuilder::start(ctx.extent, origin);
    for i in 0..seg.count {
        let x0 = seg.x0(i);
        let x1 = seg.x1(i);
        let high = cy - amp * (0.88 + 0.12 * (phase + i as f64 * 1.1).sin());
        let start = Point::new(x0, low);
        let peak = Point::new(x1, high);
        let chord_mid = lerp_point(start, peak, 0.5);
        let ctrl = lerp_point(chord_mid, Point::new(x1, low), 0.8 * roundness);
        b.quad_to(ctrl, peak);
        let foot = Point::new(x1, low);
        b.line_to(foot);
        points.push(peak);
        points.push(foot);
    }
    PathFrame {
        phase,
        points,
        path: b.finish(),
    }
}

/// Linear up/down ramps whose corners soften and sharpen over the loop.
pub(crate) fn triangle(ctx: &WaveCtx, phase: f64) -> PathFrame {
    let seg = Segments::new(ctx);
    let cy = ctx.extent.center_y();
    let amp = ctx.amplitude;
    let low = cy + amp;

    let mut points = Vec::with_capacity(seg.count * 2 + 1);
    points.push(Point::new(0.0, low));
    for i in 0..seg.count {
        let xm = lerp(seg.x0(i), seg.x1(i), 0.5);
        let high = cy - amp * (0.9 + 0.1 * (phase + i as f64 * 0.7).cos());
        points.push(Point::new(xm, high));
        points.push(Point::new(seg.x1(i), low));
    }

    let sharpness = 0.5 + 0.5 * phase.cos();
    let radius = seg.width * 0.25 * (1.0 - sharpness);
    let mut b = RegionBuilder::start(ctx.extent, points[0]);
    b.rounded_polyline(&points, radius);
    PathFrame {
        phase,
        points,
        path: b.finish(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/segmented.rs"]
mod tests;
