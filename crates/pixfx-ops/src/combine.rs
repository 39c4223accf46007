//! Root-sum-of-squares merge.
//!
//! Used to fold two gradient responses (e.g. Sobel x and y) into one
//! magnitude image.

use crate::{Exec, OpsError, OpsResult};
use pixfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::trace;

/// `sqrt(a² + b²)` for one pair of values.
#[inline]
pub fn magnitude(a: f32, b: f32) -> f32 {
    (a * a + b * b).sqrt()
}

/// Combines two equally-shaped buffers value by value with [`magnitude`].
///
/// # Errors
///
/// [`OpsError::ShapeMismatch`] if `(width, height, channels)` differ.
///
/// # Example
///
/// ```rust
/// use pixfx_core::PixelBuffer;
/// use pixfx_ops::combine::combine;
///
/// let a = PixelBuffer::from_decoded(vec![3.0], 1, 1, 1).unwrap();
/// let b = PixelBuffer::from_decoded(vec![4.0], 1, 1, 1).unwrap();
/// assert_eq!(combine(&a, &b).unwrap().get(0, 0, 0).unwrap(), 5.0);
/// ```
pub fn combine(a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    combine_impl(Exec::Serial, a, b)
}

pub(crate) fn combine_impl(exec: Exec, a: &PixelBuffer, b: &PixelBuffer) -> OpsResult<PixelBuffer> {
    trace!(a = ?a.shape(), b = ?b.shape(), "combine");
    if !a.same_shape(b) {
        return Err(OpsError::ShapeMismatch {
            a: a.shape(),
            b: b.shape(),
        });
    }
    Ok(exec.rows(a, |row, out| {
        for (o, (&x, &y)) in out.iter_mut().zip(a.row(row).iter().zip(b.row(row))) {
            *o = magnitude(x, y);
        }
    }))
}
