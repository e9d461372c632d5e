/// Convenience result type used throughout pigment.
pub type CompositeResult<T> = Result<T, CompositeError>;

/// Top-level error type for pigment.
///
/// Compositing itself never fails. Errors only surface at the edges: looking up a mode,
/// validating caller-supplied buffers, and loading configuration.
#[derive(thiserror::Error, Debug)]
pub enum CompositeError {
    /// The mode identifier is not known to the registry.
    #[error("unknown composite mode: {0}")]
    UnknownMode(String),

    /// The mode exists but cannot run on the requested pixel format.
    #[error("unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    /// Invalid pixel format, channel flags or buffer geometry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid engine configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CompositeError {
    /// Build a [`CompositeError::UnknownMode`] value.
    pub fn unknown_mode(id: impl Into<String>) -> Self {
        Self::UnknownMode(id.into())
    }

    /// Build a [`CompositeError::UnsupportedFormat`] value.
    pub fn unsupported_format(msg: impl Into<String>) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    /// Build a [`CompositeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CompositeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
