//! Error types for the UA engine crate.
//!
//! Classification itself is total and never fails. Errors only appear at the
//! boundary where caller-supplied extension rules are compiled or decoded.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, UaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UaError {
    #[error("Invalid regex pattern `{pattern}`: {reason}")]
    InvalidRegex { pattern: String, reason: String },

    #[error("Invalid extension: {0}")]
    InvalidExtension(String),

    #[error("Extension decoding error: {0}")]
    Deserialize(String),
}

impl UaError {
    pub(crate) fn invalid_regex(pattern: &str, err: &regex::Error) -> Self {
        UaError::InvalidRegex {
            pattern: pattern.to_string(),
            reason: err.to_string(),
        }
    }
}
