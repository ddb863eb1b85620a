//! Error types and result aliases.
//!
//! Defines the core `TokenError` enumeration and common `Result` type.

use thiserror::Error;

/// Token rendering errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Configuration error, usually an alphabet emptied by the options.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid render surface handed to the generator.
    #[error("invalid render surface: {0}")]
    Reference(String),

    /// Image encoding failed.
    #[error("image encode failed: {0}")]
    Encode(String),
}

/// Result type alias for `TokenError`.
pub type Result<T> = std::result::Result<T, TokenError>;
