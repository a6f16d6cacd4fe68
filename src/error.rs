//! # Error Types
//!
//! This module defines error types used throughout the almanac library.
//!
//! The layout engine itself never fails. Everything except [`AlmanacError::Encode`]
//! originates in the outer shell (argument validation, timezone lookup, server I/O).

use thiserror::Error;

/// Main error type for almanac operations
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// Canvas width or height outside the accepted range
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Unknown IANA timezone identifier
    #[error("{0}")]
    Timezone(String),

    /// Unknown render mode
    #[error("{0}")]
    InvalidMode(String),

    /// Rasterization or PNG encoding failure
    #[error("Encoding error: {0}")]
    Encode(String),

    /// Server-level errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlmanacError {
    /// The bare message, without the variant prefix `Display` adds.
    ///
    /// Validation failures are shown to API clients as-is.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidDimensions(msg)
            | Self::Timezone(msg)
            | Self::InvalidMode(msg)
            | Self::Encode(msg)
            | Self::Transport(msg) => msg.clone(),
            Self::Io(e) => e.to_string(),
        }
    }
}
