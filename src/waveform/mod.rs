pub(crate) mod ease;
pub(crate) mod fluid;
pub(crate) mod frame;
pub(crate) mod glitch;
pub(crate) mod harmonic;
pub(crate) mod keyframes;
pub(crate) mod segmented;
pub(crate) mod spec;
pub(crate) mod synth;
