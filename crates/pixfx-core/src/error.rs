//! Error types for pixfx-core operations.
//!
//! # Usage
//!
//! ```rust
//! use pixfx_core::{Error, PixelBuffer};
//!
//! let buf = PixelBuffer::create_empty(4, 4, 3).unwrap();
//! let err = buf.get(10, 0, 0).unwrap_err();
//! assert!(err.is_bounds_error());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by buffer construction, access and parameter checks.
///
/// All variants are detected eagerly, before any output is produced.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Zero width, height or channel count, or a size that overflows.
    #[error("invalid dimensions: {width}x{height}x{channels} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Requested channel count
        channels: usize,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Element count or buffer shape disagrees with what was expected.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Expected shape or element count
        expected: Extent,
        /// Actual shape or element count
        got: Extent,
    },

    /// Coordinate outside `[0, dimension)`.
    #[error("index ({row}, {col}, {channel}) out of bounds for buffer {width}x{height}x{channels}")]
    IndexOutOfBounds {
        /// Row that was accessed
        row: usize,
        /// Column that was accessed
        col: usize,
        /// Channel that was accessed
        channel: usize,
        /// Buffer width
        width: usize,
        /// Buffer height
        height: usize,
        /// Buffer channel count
        channels: usize,
    },

    /// A parameter violated its precondition.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// What was wrong with it
        reason: String,
    },
}

/// What a [`Error::ShapeMismatch`] compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// `(width, height, channels)`
    Shape(usize, usize, usize),
    /// Flat number of values
    Len(usize),
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape(w, h, c) => write!(f, "{w}x{h}x{c}"),
            Self::Len(n) => write!(f, "{n} values"),
        }
    }
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(
        width: usize,
        height: usize,
        channels: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            channels,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::ShapeMismatch`] error.
    #[inline]
    pub fn shape_mismatch(expected: (usize, usize, usize), got: (usize, usize, usize)) -> Self {
        let (w, h, c) = expected;
        let (gw, gh, gc) = got;
        Self::ShapeMismatch {
            expected: Extent::Shape(w, h, c),
            got: Extent::Shape(gw, gh, gc),
        }
    }

    /// Creates an [`Error::ShapeMismatch`] for a flat element count.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::ShapeMismatch {
            expected: Extent::Len(expected),
            got: Extent::Len(got),
        }
    }

    /// Creates an [`Error::IndexOutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(
        (row, col, channel): (usize, usize, usize),
        (width, height, channels): (usize, usize, usize),
    ) -> Self {
        Self::IndexOutOfBounds {
            row,
            col,
            channel,
            width,
            height,
            channels,
        }
    }

    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }

    /// Returns `true` if this is a shape-related error.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. } | Self::InvalidDimensions { .. })
    }
}
