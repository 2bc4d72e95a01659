use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Extent, require_positive};
use crate::foundation::error::{AnimarkError, AnimarkResult};
use crate::waveform::ease::Ease;

/// Named family of parametric wave silhouettes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum WaveformFamily {
    /// Single sine harmonic.
    Sine,
    /// Alternating high/low plateaus with rounded, morphing corners.
    Square,
    /// Curved ramps with a vertical drop at each segment end.
    Sawtooth,
    /// Linear ramps up and down with blended corner sharpness.
    Triangle,
    /// Narrow pulses at a fixed duty cycle.
    Pulse,
    /// Few control nodes joined by smooth curves.
    Fluid,
    /// Jittered staircase with deterministic offsets.
    Glitch,
    /// Three-harmonic sum.
    Plasma,
    /// Sine with a high-frequency flutter harmonic.
    Neon,
    /// Gentle wave smoothed with quadratic segments. Used when no family is named.
    #[default]
    #[serde(alias = "curved-default", alias = "default")]
    Curved,
}

impl WaveformFamily {
    /// Every family, in declaration order.
    pub const ALL: [WaveformFamily; 10] = [
        Self::Sine,
        Self::Square,
        Self::Sawtooth,
        Self::Triangle,
        Self::Pulse,
        Self::Fluid,
        Self::Glitch,
        Self::Plasma,
        Self::Neon,
        Self::Curved,
    ];

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sine => "sine",
            Self::Square => "square",
            Self::Sawtooth => "sawtooth",
            Self::Triangle => "triangle",
            Self::Pulse => "pulse",
            Self::Fluid => "fluid",
            Self::Glitch => "glitch",
            Self::Plasma => "plasma",
            Self::Neon => "neon",
            Self::Curved => "curved",
        }
    }
}

impl fmt::Display for WaveformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaveformFamily {
    type Err = AnimarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if matches!(name.as_str(), "curved-default" | "default") {
            return Ok(Self::Curved);
        }
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == name)
            .ok_or_else(|| AnimarkError::invalid_parameter(format!("unknown waveform family '{s}'")))
    }
}

/// Shape parameters for one waveform request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveformSpec {
    /// Silhouette family.
    pub family: WaveformFamily,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent; the wave oscillates around `height / 2`.
    pub height: f64,
    /// Peak displacement from the midline.
    pub amplitude: f64,
    /// Cycles (or segments, for segmented families) across the width.
    pub frequency: f64,
    /// Global phase offsets, one keyframe per entry.
    pub phase_samples: Vec<f64>,
    /// Fraction of each pulse segment spent high. Only read by [`WaveformFamily::Pulse`].
    #[serde(default = "default_duty_cycle")]
    pub duty_cycle: f64,
    /// Total layer count including the foreground.
    #[serde(default = "default_layers")]
    pub layers: usize,
    /// Duration of one full animation loop of the foreground layer.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,
    /// Easing between keyframes.
    #[serde(default)]
    pub ease: Ease,
}

fn default_duty_cycle() -> f64 {
    0.3
}

fn default_layers() -> usize {
    3
}

fn default_duration_secs() -> f64 {
    8.0
}

/// `n` phase offsets evenly covering one cycle, first and last both on the cycle boundary.
///
/// Ending on `2π` makes the final keyframe identical to the first for continuous families,
/// so a looping animation has no visible seam.
pub fn default_phases(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..n).map(|i| TAU * i as f64 / (n - 1) as f64).collect(),
    }
}

impl WaveformSpec {
    /// Create a spec with defaults for everything except family and extent.
    pub fn new(family: WaveformFamily, width: f64, height: f64) -> Self {
        Self {
            family,
            width,
            height,
            amplitude: height * 0.25,
            frequency: 2.0,
            phase_samples: default_phases(5),
            duty_cycle: default_duty_cycle(),
            layers: default_layers(),
            duration_secs: default_duration_secs(),
            ease: Ease::default(),
        }
    }

    /// Set the amplitude.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Replace the phase samples.
    pub fn with_phases(mut self, phases: Vec<f64>) -> Self {
        self.phase_samples = phases;
        self
    }

    /// Set the pulse duty cycle.
    pub fn with_duty_cycle(mut self, duty_cycle: f64) -> Self {
        self.duty_cycle = duty_cycle;
        self
    }

    /// Set the total layer count.
    pub fn with_layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    /// Set the loop duration.
    pub fn with_duration(mut self, duration_secs: f64) -> Self {
        self.duration_secs = duration_secs;
        self
    }

    /// Set the keyframe easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Check every field and return the validated drawing extent.
    pub fn validate(&self) -> AnimarkResult<Extent> {
        let extent = Extent::new(self.width, self.height)?;
        require_positive("frequency", self.frequency)?;
        require_positive("duration_secs", self.duration_secs)?;
        if !self.amplitude.is_finite() {
            return Err(AnimarkError::invalid_parameter("amplitude must be finite"));
        }
        if self.phase_samples.is_empty() {
            return Err(AnimarkError::invalid_parameter(
                "phase_samples must contain at least one phase",
            ));
        }
        if let Some(p) = self.phase_samples.iter().find(|p| !p.is_finite()) {
            return Err(AnimarkError::invalid_parameter(format!(
                "phase samples must be finite (got {p})"
            )));
        }
        if self.family == WaveformFamily::Pulse
            && !(self.duty_cycle > 0.0 && self.duty_cycle < 1.0)
        {
            return Err(AnimarkError::invalid_parameter(format!(
                "duty_cycle must be in (0, 1) (got {})",
                self.duty_cycle
            )));
        }
        if self.layers == 0 {
            return Err(AnimarkError::invalid_parameter("layers must be >= 1"));
        }
        Ok(extent)
    }

    /// Amplitude actually drawn: magnitude clamped to `height / 2`.
    pub fn effective_amplitude(&self) -> f64 {
        self.amplitude.abs().min(self.max_amplitude())
    }

    /// `true` when the requested magnitude exceeds `height / 2`. The sign alone never clamps.
    pub fn amplitude_is_clamped(&self) -> bool {
        self.amplitude.abs() > self.max_amplitude()
    }

    fn max_amplitude(&self) -> f64 {
        Extent {
            width: self.width,
            height: self.height,
        }
        .max_amplitude()
    }

    /// Seed for the deterministic jitter families, derived from the shape parameters.
    pub(crate) fn seed(&self) -> u64 {
        let mut bytes = Vec::with_capacity(48);
        bytes.extend_from_slice(self.family.as_str().as_bytes());
        for v in [
            self.width,
            self.height,
            self.amplitude,
            self.frequency,
            self.duty_cycle,
        ] {
            bytes.extend_from_slice(&v.to_bits().to_le_bytes());
        }
        xxhash_rust::xxh3::xxh3_64(&bytes)
    }

    /// Companion layer `depth` levels behind this one: flatter, phase-shifted, slower.
    ///
    /// Depth 0 returns an unchanged copy.
    pub fn background_layer(&self, depth: usize) -> WaveformSpec {
        let d = depth as f64;
        let scale = (1.0 - 0.25 * d).max(0.25);
        let shift = d * std::f64::consts::FRAC_PI_3;
        WaveformSpec {
            amplitude: self.amplitude * scale,
            phase_samples: self.phase_samples.iter().map(|p| p + shift).collect(),
            duration_secs: self.duration_secs * (1.0 + 0.35 * d),
            layers: 1,
            ..self.clone()
        }
    }

    /// Opacity the renderer should apply to layer `depth`.
    pub fn layer_opacity(depth: usize) -> f64 {
        0.6f64.powi(depth as i32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/spec.rs"]
mod tests;
