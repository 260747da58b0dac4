//! Error taxonomy for point construction, comparison and parsing.

use thiserror::Error;

/// Errors produced by [`crate::Point`] operations.
#[derive(Debug, Error)]
pub enum PointError {
    /// A coordinate was not an integer (fractional, NaN, infinite, or out of range).
    #[error("Point coordinates must be integers, got ({x}, {y})")]
    Type { x: f64, y: f64 },

    /// Equality was requested against a value that is not a `Point`.
    #[error("Equality between Point and {found} is not supported")]
    NotSupported { found: &'static str },

    /// JSON input was malformed or lacked integer `x`/`y` fields.
    #[error("Failed to parse Point JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl PointError {
    /// Short stable name of the error kind, suitable for logs and assertions.
    pub fn kind(&self) -> &'static str {
        match self {
            PointError::Type { .. } => "type",
            PointError::NotSupported { .. } => "not_supported",
            PointError::Parse(_) => "parse",
        }
    }
}
