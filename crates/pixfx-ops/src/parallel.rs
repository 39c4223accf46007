//! Row-parallel image operations using Rayon.
//!
//! Same signatures and preconditions as the serial functions; each output
//! row is filled on the rayon pool by the same per-row worker, so results
//! are bit-identical to [`point`](crate::point), [`filter`](crate::filter)
//! and [`combine`](crate::combine).
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::PixelBuffer;
//! use pixfx_ops::parallel;
//!
//! let src = PixelBuffer::from_decoded(vec![0.5; 256 * 256 * 3], 256, 256, 3).unwrap();
//! let blurred = parallel::box_blur(&src, 5).unwrap();
//! assert_eq!(blurred.shape(), src.shape());
//! ```

use crate::filter::{self, EdgeDivisor, Kernel};
use crate::{combine as comb, point, Exec, OpsResult};
use pixfx_core::PixelBuffer;

/// Parallel [`point::adjust_brightness`].
pub fn adjust_brightness(buffer: &PixelBuffer, factor: f32) -> OpsResult<PixelBuffer> {
    point::brightness_with(Exec::Parallel, buffer, factor)
}

/// Parallel [`point::adjust_contrast`].
pub fn adjust_contrast(buffer: &PixelBuffer, factor: f32, mid: f32) -> PixelBuffer {
    point::contrast_with(Exec::Parallel, buffer, factor, mid)
}

/// Parallel [`filter::box_blur`].
pub fn box_blur(buffer: &PixelBuffer, kernel_size: usize) -> OpsResult<PixelBuffer> {
    filter::box_blur_impl(Exec::Parallel, buffer, kernel_size, EdgeDivisor::Fixed)
}

/// Parallel [`filter::box_blur_with`].
pub fn box_blur_with(
    buffer: &PixelBuffer,
    kernel_size: usize,
    divisor: EdgeDivisor,
) -> OpsResult<PixelBuffer> {
    filter::box_blur_impl(Exec::Parallel, buffer, kernel_size, divisor)
}

/// Parallel [`filter::apply_kernel`].
pub fn apply_kernel(buffer: &PixelBuffer, kernel: &Kernel) -> OpsResult<PixelBuffer> {
    filter::apply_kernel_impl(Exec::Parallel, buffer, kernel)
}

/// Parallel [`filter::sobel_edges`].
pub fn sobel_edges(buffer: &PixelBuffer) -> OpsResult<PixelBuffer> {
    filter::sobel_edges_impl(Exec::Parallel, buffer)
}

/// Parallel [`crate::combine::combine`].
pub fn combine(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    comb::combine_impl(Exec::Parallel, a, b)
}
