//! Request parameter records.
//!
//! [`WaveParams`] and [`TerminalParams`] accept loosely validated input (JSON documents and
//! `key=value` pairs), fill in defaults, and clamp numeric ranges before handing a
//! [`WaveformSpec`] or [`TimelineOptions`] to the core.

use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::foundation::error::{AnimarkError, AnimarkResult};
use crate::terminal::timeline::TimelineOptions;
use crate::waveform::ease::Ease;
use crate::waveform::spec::{WaveformFamily, WaveformSpec, default_phases};
use crate::waveform::synth::{WaveLayers, synthesize_layers};

const WIDTH: RangeInclusive<f64> = 100.0..=4000.0;
const HEIGHT: RangeInclusive<f64> = 50.0..=2000.0;
const FREQUENCY: RangeInclusive<f64> = 0.1..=20.0;
const PHASES: RangeInclusive<usize> = 2..=12;
const LAYERS: RangeInclusive<usize> = 1..=6;
const DURATION: RangeInclusive<f64> = 1.0..=60.0;
const TYPING_SPEED_MS: RangeInclusive<f64> = 10.0..=500.0;
const MAX_COMMANDS: usize = 30;

/// Loosely validated waveform request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaveParams {
    /// Silhouette family.
    pub family: WaveformFamily,
    /// Drawing width, clamped to `100..=4000`.
    pub width: f64,
    /// Drawing height, clamped to `50..=2000`.
    pub height: f64,
    /// Peak displacement; defaults to a quarter of the height.
    pub amplitude: Option<f64>,
    /// Cycles across the width, clamped to `0.1..=20`.
    pub frequency: f64,
    /// Keyframe count, clamped to `2..=12`.
    pub phases: usize,
    /// Pulse duty cycle.
    pub duty_cycle: f64,
    /// Total layers, clamped to `1..=6`.
    pub layers: usize,
    /// Loop duration in seconds, clamped to `1..=60`.
    pub duration_secs: f64,
    /// Keyframe easing.
    pub ease: Ease,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            family: WaveformFamily::default(),
            width: 1200.0,
            height: 200.0,
            amplitude: None,
            frequency: 2.0,
            phases: 5,
            duty_cycle: 0.3,
            layers: 3,
            duration_secs: 8.0,
            ease: Ease::default(),
        }
    }
}

impl WaveParams {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(text: &str) -> AnimarkResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply one override. Keys match field names; `type` and `duty` are accepted aliases.
    pub fn set(&mut self, key: &str, value: &str) -> AnimarkResult<()> {
        match key.trim() {
            "family" | "type" => self.family = value.parse()?,
            "width" => self.width = parse_value(key, value)?,
            "height" => self.height = parse_value(key, value)?,
            "amplitude" => self.amplitude = Some(parse_value(key, value)?),
            "frequency" => self.frequency = parse_value(key, value)?,
            "phases" => self.phases = parse_value(key, value)?,
            "duty_cycle" | "duty" => self.duty_cycle = parse_value(key, value)?,
            "layers" => self.layers = parse_value(key, value)?,
            "duration_secs" | "duration" => self.duration_secs = parse_value(key, value)?,
            "ease" => self.ease = parse_ease(value)?,
            other => {
                return Err(AnimarkError::invalid_parameter(format!(
                    "unknown wave parameter '{other}'"
                )));
            }
        }
        Ok(())
    }

    /// Apply `key=value` pairs in order.
    pub fn apply_pairs<I, S>(&mut self, pairs: I) -> AnimarkResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let (key, value) = split_pair(pair.as_ref())?;
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Clamp every range and build the spec. Non-finite numbers fall back to defaults.
    pub fn into_spec(self) -> WaveformSpec {
        let defaults = Self::default();
        let width = clamp_f64(self.width, WIDTH, defaults.width);
        let height = clamp_f64(self.height, HEIGHT, defaults.height);
        let mut spec = WaveformSpec::new(self.family, width, height)
            .with_frequency(clamp_f64(self.frequency, FREQUENCY, defaults.frequency))
            .with_phases(default_phases(
                self.phases.clamp(*PHASES.start(), *PHASES.end()),
            ))
            .with_layers(self.layers.clamp(*LAYERS.start(), *LAYERS.end()))
            .with_duration(clamp_f64(self.duration_secs, DURATION, defaults.duration_secs))
            .with_ease(self.ease);
        if let Some(amplitude) = self.amplitude.filter(|a| a.is_finite()) {
            spec = spec.with_amplitude(amplitude.abs().min(height / 2.0));
        }
        if self.duty_cycle.is_finite() {
            spec = spec.with_duty_cycle(self.duty_cycle.clamp(0.05, 0.95));
        }
        spec
    }
}

/// Loosely validated terminal replay request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalParams {
    /// Commands typed in order; at most 30 are kept.
    pub commands: Vec<String>,
    /// Milliseconds per typed character, clamped to `10..=500`.
    pub typing_speed_ms: f64,
    /// Baseline of the first prompt line.
    pub start_y: f64,
    /// Prompt prefix.
    pub prompt: String,
}

impl Default for TerminalParams {
    fn default() -> Self {
        let options = TimelineOptions::default();
        Self {
            commands: vec!["npm install".to_owned(), "npm run dev".to_owned()],
            typing_speed_ms: options.typing_speed_ms,
            start_y: options.start_y,
            prompt: options.prompt,
        }
    }
}

impl TerminalParams {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(text: &str) -> AnimarkResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply one override. `commands` replaces the list with `;`-separated entries; `cmd`
    /// appends a single command.
    pub fn set(&mut self, key: &str, value: &str) -> AnimarkResult<()> {
        match key.trim() {
            "commands" => {
                self.commands = value
                    .split(';')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_owned)
                    .collect();
            }
            "cmd" | "command" => self.commands.push(value.to_owned()),
            "typing_speed_ms" | "speed" => self.typing_speed_ms = parse_value(key, value)?,
            "start_y" => self.start_y = parse_value(key, value)?,
            "prompt" => self.prompt = value.to_owned(),
            other => {
                return Err(AnimarkError::invalid_parameter(format!(
                    "unknown terminal parameter '{other}'"
                )));
            }
        }
        Ok(())
    }

    /// Apply `key=value` pairs in order.
    pub fn apply_pairs<I, S>(&mut self, pairs: I) -> AnimarkResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pair in pairs {
            let (key, value) = split_pair(pair.as_ref())?;
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Clamp ranges and split into the command list and compositor options.
    pub fn into_parts(mut self) -> (Vec<String>, TimelineOptions) {
        let defaults = TimelineOptions::default();
        if self.commands.len() > MAX_COMMANDS {
            tracing::warn!(
                requested = self.commands.len(),
                kept = MAX_COMMANDS,
                "truncating command list"
            );
            self.commands.truncate(MAX_COMMANDS);
        }
        let start_y = if self.start_y.is_finite() {
            self.start_y
        } else {
            defaults.start_y
        };
        let options = TimelineOptions {
            typing_speed_ms: clamp_f64(self.typing_speed_ms, TYPING_SPEED_MS, defaults.typing_speed_ms),
            start_y,
            prompt: self.prompt,
            ..defaults
        };
        (self.commands, options)
    }
}

/// Synthesize `spec`, substituting the default request when `spec` is invalid.
///
/// Only the default spec's own failure is returned, which does not happen in practice.
pub fn synthesize_or_default(spec: &WaveformSpec) -> AnimarkResult<WaveLayers> {
    synthesize_layers(spec).or_else(|err| {
        tracing::warn!(error = %err, "invalid waveform spec; using defaults");
        synthesize_layers(&WaveParams::default().into_spec())
    })
}

/// Split `key=value` on the first `=`.
pub fn split_pair(pair: &str) -> AnimarkResult<(&str, &str)> {
    let (key, value) = pair.split_once('=').ok_or_else(|| {
        AnimarkError::invalid_parameter(format!("expected key=value, got '{pair}'"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AnimarkError::invalid_parameter(format!(
            "missing key in '{pair}'"
        )));
    }
    Ok((key, value.trim()))
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> AnimarkResult<T> {
    value.trim().parse().map_err(|_| {
        AnimarkError::invalid_parameter(format!("{key}: cannot parse '{value}'"))
    })
}

fn parse_ease(value: &str) -> AnimarkResult<Ease> {
    let name = value.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(name))
        .map_err(|_| AnimarkError::invalid_parameter(format!("unknown ease '{value}'")))
}

fn clamp_f64(v: f64, range: RangeInclusive<f64>, fallback: f64) -> f64 {
    if v.is_finite() {
        v.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
