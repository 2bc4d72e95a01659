/// Convenience result type used across animark.
pub type AnimarkResult<T> = Result<T, AnimarkError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum AnimarkError {
    /// A geometric dimension, frequency, waveform family or other input is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Errors when serializing or deserializing parameter records or plans.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimarkError {
    /// Build an [`AnimarkError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build an [`AnimarkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors the caller can recover from by substituting defaults.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

impl From<serde_json::Error> for AnimarkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
