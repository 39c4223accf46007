//! # pixfx-core
//!
//! Core types for pixel-level image processing.
//!
//! This crate provides the foundational types used throughout pixfx:
//!
//! - [`PixelBuffer`] - Owned `(row, col, channel)` float buffer
//! - [`Error`] - Construction and access failures
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. All other pixfx crates
//! depend on `pixfx-core`:
//!
//! ```text
//! pixfx-core (this crate)
//!    ^
//!    |
//!    +-- pixfx-transfer (gamma codec)
//!    +-- pixfx-ops (point transforms, convolution, combine)
//!    +-- pixfx-io (PNG I/O, config)
//!    +-- pixfx-cli
//! ```
//!
//! ## Ownership
//!
//! Every transform in pixfx takes `&PixelBuffer` and returns a freshly
//! allocated buffer. Inputs are never mutated, so callers can keep using
//! them after a transform call.
//!
//! ## Feature Flags
//!
//! - `rayon` - Enable [`PixelBuffer::par_map_rows`] (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;

pub use buffer::PixelBuffer;
pub use error::{Error, Extent, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use pixfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
}
