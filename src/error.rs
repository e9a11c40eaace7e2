//! Error types and result alias for the groq-vision library.
//!
//! This module defines the core error type [`GroqVisionError`] and the [`Result`]
//! type alias used throughout the library. The error kinds form a closed set so
//! callers can tell an unreadable file apart from a corrupt image or a failed
//! network call, even where the user-facing message text is shared.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GroqVisionError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, GroqVisionError>;
