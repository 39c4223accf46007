//! # pixfx-ops
//!
//! Pixel transforms over [`PixelBuffer`](pixfx_core::PixelBuffer).
//!
//! Every operation takes its inputs by shared reference and returns a new
//! buffer of the same shape. Preconditions are checked before anything is
//! allocated.
//!
//! # Modules
//!
//! - [`point`] - Brightness and contrast (per-value maps)
//! - [`filter`] - Kernels, box blur, arbitrary convolution
//! - [`combine`] - Root-sum-of-squares merge of two buffers
//! - [`parallel`] - Row-parallel versions of all of the above
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::PixelBuffer;
//! use pixfx_ops::{combine, filter::{self, Kernel}, point};
//!
//! let img = PixelBuffer::from_decoded(vec![0.5; 8 * 8 * 3], 8, 8, 3).unwrap();
//! let bright = point::adjust_brightness(&img, 1.5).unwrap();
//! let blurred = filter::box_blur(&bright, 3).unwrap();
//! let gx = filter::apply_kernel(&img, &Kernel::sobel_x()).unwrap();
//! let gy = filter::apply_kernel(&img, &Kernel::sobel_y()).unwrap();
//! let edges = combine::combine(&gx, &gy).unwrap();
//! assert_eq!(edges.shape(), blurred.shape());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod combine;
pub mod filter;
pub mod point;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use filter::{EdgeDivisor, Kernel};

use pixfx_core::PixelBuffer;

/// How the per-row workers are driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Exec {
    Serial,
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Exec {
    /// Fills a new buffer shaped like `template`, one row at a time.
    pub(crate) fn rows<F>(self, template: &PixelBuffer, f: F) -> PixelBuffer
    where
        F: Fn(usize, &mut [f32]) + Sync + Send,
    {
        match self {
            Exec::Serial => template.map_rows(f),
            #[cfg(feature = "parallel")]
            Exec::Parallel => template.par_map_rows(f),
        }
    }
}
