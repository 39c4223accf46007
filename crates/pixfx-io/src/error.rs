//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported format or color layout.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed YAML configuration.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Buffer construction or parameter check failed.
    #[error(transparent)]
    Buffer(#[from] pixfx_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
