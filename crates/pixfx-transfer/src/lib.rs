//! # pixfx-transfer
//!
//! Transfer functions between gamma-encoded stored values and
//! linear-light values.
//!
//! # Terminology
//!
//! - **EOTF** (decode): Encoded -> Linear, `v^gamma`
//! - **OETF** (encode): Linear -> Encoded, `clamp(l, 0, 1)^(1/gamma)`
//!
//! # Usage
//!
//! ```rust
//! use pixfx_transfer::GammaCodec;
//!
//! let codec = GammaCodec::default();
//! let linear = codec.decode(0.5);
//! let stored = codec.encode(linear);
//! assert!((stored - 0.5).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - `pixfx-core` - [`PixelBuffer`](pixfx_core::PixelBuffer) for buffer-wide conversion
//!
//! # Used By
//!
//! - `pixfx-io` - decode after PNG read, encode before PNG write

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamma;

pub use gamma::{GammaCodec, DEFAULT_GAMMA};
