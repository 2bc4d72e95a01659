use crate::waveform::ease::Ease;

/// Timing for a keyframed path animation: when each frame is reached and how to ease between.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct KeyframePlan {
    /// Length of one loop.
    pub duration_secs: f64,
    /// Normalized time of each keyframe, from `0.0` to `1.0`.
    pub key_times: Vec<f64>,
    /// Bézier control points for each interval between keyframes.
    pub key_splines: Vec<[f64; 4]>,
}

impl KeyframePlan {
    /// Evenly spaced plan for `frames` keyframes.
    pub fn for_frames(frames: usize, duration_secs: f64, ease: Ease) -> Self {
        let key_times = match frames {
            0 => Vec::new(),
            1 => vec![0.0],
            n => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
        };
        let key_splines = vec![ease.control_points(); frames.saturating_sub(1)];
        Self {
            duration_secs,
            key_times,
            key_splines,
        }
    }

    /// Absolute time of keyframe `i` within one loop.
    pub fn time_of(&self, i: usize) -> Option<f64> {
        self.key_times.get(i).map(|t| t * self.duration_secs)
    }

    /// Key times joined with `;`, as animation attributes expect.
    pub fn key_times_attr(&self) -> String {
        self.key_times
            .iter()
            .map(|t| format_number(*t))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Spline quadruples joined with `;`, numbers separated by spaces.
    pub fn key_splines_attr(&self) -> String {
        self.key_splines
            .iter()
            .map(|s| {
                s.iter()
                    .map(|v| format_number(*v))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// Shortest decimal form with at most four fractional digits.
fn format_number(v: f64) -> String {
    let s = format!("{v:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_owned()
    } else {
        s.to_owned()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/keyframes.rs"]
mod tests;
