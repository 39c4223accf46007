//! Per-value brightness and contrast.
//!
//! Each output value depends only on the input value at the same
//! `(row, col, channel)`; there is no cross-pixel dependency.
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::PixelBuffer;
//! use pixfx_ops::point::{adjust_brightness, adjust_contrast, DEFAULT_MID};
//!
//! let img = PixelBuffer::from_decoded(vec![0.2, 0.4, 0.6], 1, 1, 3).unwrap();
//! let darker = adjust_brightness(&img, 0.5).unwrap();
//! assert!((darker.get(0, 0, 1).unwrap() - 0.2).abs() < 1e-6);
//!
//! let punchy = adjust_contrast(&img, 2.0, DEFAULT_MID);
//! assert!((punchy.get(0, 0, 0).unwrap() - (-0.1)).abs() < 1e-6);
//! ```

use crate::{Exec, OpsError, OpsResult};
use pixfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Contrast pivot used when the caller has no preference.
pub const DEFAULT_MID: f32 = 0.5;

/// Scales one value by `factor`.
#[inline]
pub fn brightness_value(v: f32, factor: f32) -> f32 {
    v * factor
}

/// Pushes one value away from (or towards) `mid` by `factor`.
#[inline]
pub fn contrast_value(v: f32, factor: f32, mid: f32) -> f32 {
    (v - mid) * factor + mid
}

/// Multiplies every value by `factor`.
///
/// `factor < 1` darkens, `factor > 1` brightens.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `factor` is not a finite value `> 0`.
pub fn adjust_brightness(buffer: &PixelBuffer, factor: f32) -> OpsResult<PixelBuffer> {
    brightness_with(Exec::Serial, buffer, factor)
}

/// Applies `(v - mid) * factor + mid` to every value.
///
/// `factor` is unconstrained; results may leave `[0, 1]` and are only
/// clamped at encode time.
pub fn adjust_contrast(buffer: &PixelBuffer, factor: f32, mid: f32) -> PixelBuffer {
    contrast_with(Exec::Serial, buffer, factor, mid)
}

pub(crate) fn check_brightness(factor: f32) -> OpsResult<()> {
    if !factor.is_finite() || factor <= 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "brightness factor must be finite and > 0, got {factor}"
        )));
    }
    Ok(())
}

pub(crate) fn brightness_with(
    exec: Exec,
    buffer: &PixelBuffer,
    factor: f32,
) -> OpsResult<PixelBuffer> {
    trace!(shape = ?buffer.shape(), factor, "adjust_brightness");
    check_brightness(factor)?;
    Ok(map_values(exec, buffer, |v| brightness_value(v, factor)))
}

pub(crate) fn contrast_with(exec: Exec, buffer: &PixelBuffer, factor: f32, mid: f32) -> PixelBuffer {
    trace!(shape = ?buffer.shape(), factor, mid, "adjust_contrast");
    map_values(exec, buffer, |v| contrast_value(v, factor, mid))
}

fn map_values<F>(exec: Exec, buffer: &PixelBuffer, f: F) -> PixelBuffer
where
    F: Fn(f32) -> f32 + Sync + Send,
{
    exec.rows(buffer, |row, out| {
        for (o, &v) in out.iter_mut().zip(buffer.row(row)) {
            *o = f(v);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn gradient(width: usize, height: usize, channels: usize) -> PixelBuffer {
        let n = width * height * channels;
        let data = (0..n).map(|i| i as f32 / n as f32).collect();
        PixelBuffer::from_decoded(data, width, height, channels).unwrap()
    }

    #[test]
    fn test_brightness_scales_every_value() {
        let img = gradient(5, 4, 3);
        let out = adjust_brightness(&img, 1.7).unwrap();
        assert_eq!(out.shape(), img.shape());
        for r in 0..4 {
            for c in 0..5 {
                for ch in 0..3 {
                    let expected = img.get(r, c, ch).unwrap() * 1.7;
                    assert_abs_diff_eq!(out.get(r, c, ch).unwrap(), expected, epsilon = 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_brightness_identity() {
        let img = gradient(3, 3, 3);
        let out = adjust_brightness(&img, 1.0).unwrap();
        assert!(out.approx_eq(&img, 1e-7));
    }

    #[test]
    fn test_brightness_rejects_non_positive() {
        let img = gradient(2, 2, 3);
        for f in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                adjust_brightness(&img, f).unwrap_err(),
                OpsError::InvalidParameter(_)
            ));
        }
    }

    #[test]
    fn test_contrast_formula() {
        let img = gradient(4, 2, 3);
        let out = adjust_contrast(&img, 3.0, 0.3);
        for (o, v) in out.data().iter().zip(img.data()) {
            assert_abs_diff_eq!(*o, (v - 0.3) * 3.0 + 0.3, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_contrast_keeps_mid_fixed() {
        let img = PixelBuffer::from_decoded(vec![DEFAULT_MID; 3], 1, 1, 3).unwrap();
        let out = adjust_contrast(&img, -4.0, DEFAULT_MID);
        assert!(out.approx_eq(&img, 1e-7));
    }

    #[test]
    fn test_input_not_mutated() {
        let img = gradient(3, 3, 3);
        let before = img.clone();
        let _ = adjust_brightness(&img, 2.0).unwrap();
        let _ = adjust_contrast(&img, 2.0, DEFAULT_MID);
        assert_eq!(img, before);
    }
}
