//! Procedural animation synthesis for static, self-animating vector markup.
//!
//! Two independent engines:
//!
//! - the waveform synthesizer turns a [`WaveformSpec`] into a list of closed [`PathFrame`]s, one
//!   per phase sample, plus layered companions and keyframe timing ([`synthesize_layers`]);
//! - the terminal engine classifies typed commands, fabricates plausible output
//!   ([`simulate`]) and lays everything out on a single clock ([`compose`]).
//!
//! Everything is pure and deterministic. Rendering the results into markup is left to the caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub(crate) mod foundation;
pub(crate) mod terminal;
pub(crate) mod waveform;

pub use config::{TerminalParams, WaveParams, synthesize_or_default};
pub use foundation::core::{BezPath, Extent, Point, Rect};
pub use foundation::error::{AnimarkError, AnimarkResult};
pub use terminal::category::{CommandCategory, classify};
pub use terminal::output::{OutputLine, Severity, simulate, simulate_command};
pub use terminal::timeline::{
    CommandBlock, Compositor, Cursor, EventKind, Timeline, TimelineEvent, TimelineOptions,
    TypingRun, compose,
};
pub use waveform::ease::Ease;
pub use waveform::frame::PathFrame;
pub use waveform::keyframes::KeyframePlan;
pub use waveform::spec::{WaveformFamily, WaveformSpec, default_phases};
pub use waveform::synth::{WaveLayer, WaveLayers, synthesize, synthesize_batch, synthesize_layers};
