use crate::foundation::error::{AnimarkError, AnimarkResult};

pub use kurbo::{BezPath, Point, Rect};

/// Drawing area of a waveform, in user units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Extent {
    /// Horizontal size.
    pub width: f64,
    /// Vertical size.
    pub height: f64,
}

impl Extent {
    /// Create a validated extent with finite, strictly positive sides.
    pub fn new(width: f64, height: f64) -> AnimarkResult<Self> {
        require_positive("width", width)?;
        require_positive("height", height)?;
        Ok(Self { width, height })
    }

    /// Vertical midline that waveforms oscillate around.
    pub fn center_y(self) -> f64 {
        self.height / 2.0
    }

    /// Largest amplitude that keeps a centered waveform inside the extent.
    pub fn max_amplitude(self) -> f64 {
        self.height / 2.0
    }
}

pub(crate) fn require_positive(name: &str, v: f64) -> AnimarkResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(AnimarkError::invalid_parameter(format!(
            "{name} must be a finite value > 0 (got {v})"
        )));
    }
    Ok(())
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
