//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Kernel is not square, has an even size, or has ragged rows.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffers have incompatible shapes.
    #[error("shape mismatch: {a:?} vs {b:?}")]
    ShapeMismatch {
        /// `(width, height, channels)` of the first buffer
        a: (usize, usize, usize),
        /// `(width, height, channels)` of the second buffer
        b: (usize, usize, usize),
    },

    /// Buffer construction or access failed.
    #[error(transparent)]
    Buffer(#[from] pixfx_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
