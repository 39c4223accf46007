//! # pixfx-io
//!
//! The I/O boundary of pixfx: PNG decode/encode, gamma conversion on the
//! way in and out, and the explicit pipeline configuration.
//!
//! - [`png`] - PNG to normalized `[0, 1]` floats and back (8-bit output)
//! - [`ImageStore`] - Directory-rooted `load`/`save` of linear
//!   [`PixelBuffer`](pixfx_core::PixelBuffer)s
//! - [`PipelineConfig`] - Gamma and directories, loadable from YAML
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pixfx_io::{ImageStore, PipelineConfig};
//! use pixfx_ops::point::adjust_brightness;
//!
//! let store = ImageStore::new(PipelineConfig::default())?;
//! let lake = store.load("lake.png")?;             // input/lake.png, linear light
//! let brighter = adjust_brightness(&lake, 1.7)?;
//! store.save("lake_bright.png", &brighter)?;      // output/lake_bright.png
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
pub mod png;
mod store;

pub use config::PipelineConfig;
pub use error::{IoError, IoResult};
pub use png::DecodedImage;
pub use store::{load_linear, save_linear, ImageStore};
