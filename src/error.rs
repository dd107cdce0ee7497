//! Error types for Pagekit
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! There is exactly one failure mode: the caller supplied an invalid page
//! request. Failures raised by an underlying source (iterator, query
//! engine, stream) are never caught or reinterpreted by this crate.

use thiserror::Error;

/// The main error type for Pagekit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A pagination parameter failed validation
    #[error("invalid argument `{param}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter
        param: String,
        /// Human-readable reason
        message: String,
    },
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            message: message.into(),
        }
    }

    /// Name of the parameter that failed validation
    pub fn param(&self) -> &str {
        match self {
            Self::InvalidArgument { param, .. } => param,
        }
    }
}

/// Result type alias for Pagekit
pub type Result<T> = std::result::Result<T, Error>;
