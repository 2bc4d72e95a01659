/// Easing applied between consecutive waveform keyframes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Sinusoidal ease-in/out, the default for looping waves.
    #[default]
    InOutSine,
}

impl Ease {
    /// Cubic Bézier control points `[x1, y1, x2, y2]` approximating this curve.
    ///
    /// Renderers that animate with spline timing take one quadruple per keyframe interval.
    pub fn control_points(self) -> [f64; 4] {
        match self {
            Self::Linear => [0.0, 0.0, 1.0, 1.0],
            Self::InQuad => [0.11, 0.0, 0.5, 0.0],
            Self::OutQuad => [0.5, 1.0, 0.89, 1.0],
            Self::InOutQuad => [0.45, 0.0, 0.55, 1.0],
            Self::InCubic => [0.32, 0.0, 0.67, 0.0],
            Self::OutCubic => [0.33, 1.0, 0.68, 1.0],
            Self::InOutCubic => [0.65, 0.0, 0.35, 1.0],
            Self::InOutSine => [0.37, 0.0, 0.63, 1.0],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/ease.rs"]
mod tests;
