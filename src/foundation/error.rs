/// Convenience result type used across bihua.
pub type BihuaResult<T> = Result<T, BihuaError>;

/// Top-level error taxonomy.
///
/// Only I/O, invalid caller input and output encoding surface here. Bad glyph data degrades to
/// empty geometry instead and never reaches this type.
#[derive(thiserror::Error, Debug)]
pub enum BihuaError {
    /// Invalid caller-provided input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors opening or reading a stroke dataset source.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Errors while rasterizing a draw plan.
    #[error("render error: {0}")]
    Render(String),

    /// Errors writing rendered frames.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BihuaError {
    /// Build a [`BihuaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BihuaError::Dataset`] value.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Build a [`BihuaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BihuaError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BihuaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
