use rayon::prelude::*;

use crate::foundation::core::Extent;
use crate::foundation::error::AnimarkResult;
use crate::waveform::frame::PathFrame;
use crate::waveform::keyframes::KeyframePlan;
use crate::waveform::spec::{WaveformFamily, WaveformSpec};
use crate::waveform::{fluid, glitch, harmonic, segmented};

/// Validated, clamped parameters shared by every family generator.
#[derive(Clone, Copy, Debug)]
pub(crate) struct WaveCtx {
    pub extent: Extent,
    pub amplitude: f64,
    pub frequency: f64,
    pub duty_cycle: f64,
    pub seed: u64,
}

impl WaveCtx {
    pub(crate) fn from_spec(spec: &WaveformSpec) -> AnimarkResult<Self> {
        let extent = spec.validate()?;
        let amplitude = spec.effective_amplitude();
        if spec.amplitude_is_clamped() {
            tracing::warn!(
                requested = spec.amplitude,
                clamped = amplitude,
                "amplitude clamped to half the height"
            );
        }
        Ok(Self {
            extent,
            amplitude,
            frequency: spec.frequency,
            duty_cycle: spec.duty_cycle,
            seed: spec.seed(),
        })
    }
}

fn render_frame(ctx: &WaveCtx, family: WaveformFamily, phase: f64) -> PathFrame {
    match family {
        WaveformFamily::Sine
        | WaveformFamily::Neon
        | WaveformFamily::Plasma
        | WaveformFamily::Curved => harmonic::frame(ctx, family, phase),
        WaveformFamily::Square => segmented::square(ctx, phase),
        WaveformFamily::Pulse => segmented::pulse(ctx, phase),
        WaveformFamily::Sawtooth => segmented::sawtooth(ctx, phase),
        WaveformFamily::Triangle => segmented::triangle(ctx, phase),
        WaveformFamily::Fluid => fluid::frame(ctx, phase),
        WaveformFamily::Glitch => glitch::frame(ctx, phase),
    }
}

/// Evaluate `spec` once per phase sample.
///
/// All returned frames share sample count and path command structure. Invalid specs fail
/// with [`crate::AnimarkError::InvalidParameter`] before any frame is produced.
#[tracing::instrument(skip(spec), fields(family = %spec.family, phases = spec.phase_samples.len()))]
pub fn synthesize(spec: &WaveformSpec) -> AnimarkResult<Vec<PathFrame>> {
    let ctx = WaveCtx::from_spec(spec)?;
    let frames: Vec<PathFrame> = spec
        .phase_samples
        .iter()
        .map(|&phase| render_frame(&ctx, spec.family, phase))
        .collect();
    tracing::debug!(
        frames = frames.len(),
        samples = frames.first().map(PathFrame::sample_count).unwrap_or(0),
        "synthesized waveform"
    );
    Ok(frames)
}

/// One depth layer of a layered wave.
#[derive(Clone, Debug, serde::Serialize)]
pub struct WaveLayer {
    /// 0 for the foreground, increasing toward the back.
    pub depth: usize,
    /// Suggested fill opacity.
    pub opacity: f64,
    /// Amplitude the layer was drawn with, after clamping.
    pub amplitude: f64,
    /// Keyframe timing for this layer.
    pub timing: KeyframePlan,
    /// Keyframes, one per phase sample.
    pub frames: Vec<PathFrame>,
}

/// Foreground plus companion background layers for one spec.
#[derive(Clone, Debug, serde::Serialize)]
pub struct WaveLayers {
    /// Family shared by all layers.
    pub family: WaveformFamily,
    /// Drawing width.
    pub width: f64,
    /// Drawing height.
    pub height: f64,
    /// Layers ordered by depth, foreground first.
    pub layers: Vec<WaveLayer>,
}

impl WaveLayers {
    /// The depth-0 layer.
    pub fn foreground(&self) -> &WaveLayer {
        &self.layers[0]
    }

    /// Layers behind the foreground, nearest first.
    pub fn backgrounds(&self) -> &[WaveLayer] {
        &self.layers[1..]
    }

    /// Layers in painter's order (farthest first).
    pub fn paint_order(&self) -> impl Iterator<Item = &WaveLayer> {
        self.layers.iter().rev()
    }
}

fn synthesize_layer(spec: &WaveformSpec, depth: usize) -> AnimarkResult<WaveLayer> {
    let layer_spec = spec.background_layer(depth);
    let frames = synthesize(&layer_spec)?;
    Ok(WaveLayer {
        depth,
        opacity: WaveformSpec::layer_opacity(depth),
        amplitude: layer_spec.effective_amplitude(),
        timing: KeyframePlan::for_frames(frames.len(), layer_spec.duration_secs, spec.ease),
        frames,
    })
}

/// Synthesize `spec.layers` layers: the foreground and derived background companions.
#[tracing::instrument(skip(spec), fields(family = %spec.family, layers = spec.layers))]
pub fn synthesize_layers(spec: &WaveformSpec) -> AnimarkResult<WaveLayers> {
    spec.validate()?;
    let layers = (0..spec.layers)
        .map(|depth| synthesize_layer(spec, depth))
        .collect::<AnimarkResult<Vec<_>>>()?;
    Ok(WaveLayers {
        family: spec.family,
        width: spec.width,
        height: spec.height,
        layers,
    })
}

/// Synthesize independent specs on the rayon pool. Results keep input order.
pub fn synthesize_batch(specs: &[WaveformSpec]) -> Vec<AnimarkResult<WaveLayers>> {
    specs.par_iter().map(synthesize_layers).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/waveform/synth.rs"]
mod tests;
