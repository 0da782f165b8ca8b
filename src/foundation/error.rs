/// Convenience result type used across pathreveal.
pub type RevealResult<T> = Result<T, RevealError>;

/// Top-level error taxonomy used by the public APIs.
///
/// Ordinary geometric inputs never produce an error: empty paths, zero-length contours,
/// degenerate target rectangles and out-of-range progress values all have defined results.
#[derive(thiserror::Error, Debug)]
pub enum RevealError {
    /// Invalid user-provided data (path syntax, descriptor values, rectangles).
    #[error("validation error: {0}")]
    Validation(String),

    /// A measurement engine was queried against geometry it was not seeded with.
    #[error("stale measurement: {0}")]
    StaleMeasurement(String),

    /// Errors when serializing or deserializing descriptor data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RevealError {
    /// Build a [`RevealError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`RevealError::StaleMeasurement`] value.
    pub fn stale(msg: impl Into<String>) -> Self {
        Self::StaleMeasurement(msg.into())
    }

    /// Build a [`RevealError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for RevealError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
