//! Convolution and box blur.
//!
//! Both entry points share one neighbor walk: for output pixel
//! `(row, col)` the neighbor window is
//!
//! ```text
//! rows: max(0, row - r) ..= min(height - 1, row + r)
//! cols: max(0, col - r) ..= min(width - 1, col + r)
//! ```
//!
//! with `r = size / 2`. Windows are truncated at the image border, never
//! padded or mirrored, and the result is **not** renormalized by the
//! truncated window size:
//!
//! - [`box_blur`] divides the window sum by `size²` even at the edges, so
//!   border pixels come out darker than a true sliding average.
//!   [`box_blur_with`] + [`EdgeDivisor::Window`] opts into renormalizing.
//! - [`apply_kernel`] returns the raw weighted sum; kernels that do not sum
//!   to 1 change overall brightness.
//!
//! # Kernels
//!
//! - [`Kernel::identity`] - 1x1 pass-through
//! - [`Kernel::box_blur`] - Uniform `1/size²` weights
//! - [`Kernel::sobel_x`], [`Kernel::sobel_y`] - Gradient operators
//! - [`Kernel::sharpen`] - Laplacian sharpening
//!
//! # Example
//!
//! ```rust
//! use pixfx_core::PixelBuffer;
//! use pixfx_ops::filter::{apply_kernel, box_blur, Kernel};
//!
//! let ones = PixelBuffer::from_decoded(vec![1.0; 9], 3, 3, 1).unwrap();
//! let blurred = box_blur(&ones, 3).unwrap();
//! // corner sees 4 in-bounds neighbors, divided by 9
//! assert!((blurred.get(0, 0, 0).unwrap() - 4.0 / 9.0).abs() < 1e-6);
//! assert!((blurred.get(1, 1, 0).unwrap() - 1.0).abs() < 1e-6);
//!
//! let same = apply_kernel(&ones, &Kernel::identity()).unwrap();
//! assert_eq!(same, ones);
//! ```

use crate::{combine, Exec, OpsError, OpsResult};
use pixfx_core::PixelBuffer;
use std::ops::RangeInclusive;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Square-or-not weight grid, row-major.
///
/// Any shape can be built; [`apply_kernel`] only accepts square kernels with
/// an odd size, so a unique center cell exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Kernel weights, `height` rows of `width` values.
    pub data: Vec<f32>,
    /// Kernel width.
    pub width: usize,
    /// Kernel height.
    pub height: usize,
}

impl Kernel {
    /// Creates a kernel from row-major weights.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidKernel`] if a dimension is zero or
    /// `data.len() != width * height`.
    pub fn new(data: Vec<f32>, width: usize, height: usize) -> OpsResult<Self> {
        if width == 0 || height == 0 {
            return Err(OpsError::InvalidKernel(format!(
                "kernel dimensions must be > 0, got {width}x{height}"
            )));
        }
        if data.len() != width * height {
            return Err(OpsError::InvalidKernel(format!(
                "kernel data size {} doesn't match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self { data, width, height })
    }

    /// Creates a `size x size` kernel from row-major weights.
    pub fn square(data: Vec<f32>, size: usize) -> OpsResult<Self> {
        Self::new(data, size, size)
    }

    /// Creates a kernel from a list of rows.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixfx_ops::filter::Kernel;
    ///
    /// let k = Kernel::from_rows(&[[0.0f32, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]]).unwrap();
    /// assert_eq!(k.size(), Some(3));
    /// assert!(Kernel::from_rows(&[vec![1.0f32, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> OpsResult<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(width * height);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(OpsError::InvalidKernel(format!(
                    "ragged kernel: row {i} has {} weights, expected {width}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::new(data, width, height)
    }

    /// 1x1 kernel holding `1.0`; [`apply_kernel`] with it is a copy.
    pub fn identity() -> Self {
        Self {
            data: vec![1.0],
            width: 1,
            height: 1,
        }
    }

    /// Uniform `1/size²` kernel.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] unless `size` is a positive odd number.
    pub fn box_blur(size: usize) -> OpsResult<Self> {
        check_kernel_size(size)?;
        let count = size * size;
        Ok(Self {
            data: vec![1.0 / count as f32; count],
            width: size,
            height: size,
        })
    }

    /// Vertical-gradient Sobel operator (responds to horizontal edges).
    pub fn sobel_x() -> Self {
        Self {
            data: vec![
                1.0, 2.0, 1.0,
                0.0, 0.0, 0.0,
                -1.0, -2.0, -1.0,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Horizontal-gradient Sobel operator (responds to vertical edges).
    pub fn sobel_y() -> Self {
        Self {
            data: vec![
                1.0, 0.0, -1.0,
                2.0, 0.0, -2.0,
                1.0, 0.0, -1.0,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Creates a sharpening kernel.
    ///
    /// Weights sum to 1, so flat regions keep their brightness away from
    /// the border.
    pub fn sharpen(amount: f32) -> Self {
        let center = 1.0 + 4.0 * amount;
        Self {
            data: vec![
                0.0, -amount, 0.0,
                -amount, center, -amount,
                0.0, -amount, 0.0,
            ],
            width: 3,
            height: 3,
        }
    }

    /// Side length if the kernel is square.
    #[inline]
    pub fn size(&self) -> Option<usize> {
        (self.width == self.height).then_some(self.width)
    }

    /// Weight at `(row_offset, col_offset)` measured from the top-left cell.
    ///
    /// # Panics
    ///
    /// Panics if `row * width + col` is past the end of `data`.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Checks the kernel is square with an odd side; returns the side.
    pub fn validate(&self) -> OpsResult<usize> {
        if self.data.len() != self.width * self.height {
            return Err(OpsError::InvalidKernel(format!(
                "kernel data size {} doesn't match {}x{}",
                self.data.len(),
                self.width,
                self.height
            )));
        }
        let size = self.size().ok_or_else(|| {
            OpsError::InvalidKernel(format!(
                "kernel must be square, got {}x{}",
                self.width, self.height
            ))
        })?;
        if size % 2 == 0 {
            return Err(OpsError::InvalidKernel(format!(
                "kernel size must be odd, got {size}"
            )));
        }
        Ok(size)
    }
}

/// Divisor used by the box blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeDivisor {
    /// Always `kernel_size²`, including truncated border windows.
    #[default]
    Fixed,
    /// Number of in-bounds neighbors actually summed.
    Window,
}

/// Box blur with the fixed `kernel_size²` divisor.
///
/// Border pixels sum a truncated window but still divide by
/// `kernel_size²`, so they are pulled towards zero. See [`box_blur_with`]
/// for the renormalizing variant.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] unless `kernel_size` is a positive odd
/// number.
pub fn box_blur(buffer: &PixelBuffer, kernel_size: usize) -> OpsResult<PixelBuffer> {
    box_blur_impl(Exec::Serial, buffer, kernel_size, EdgeDivisor::Fixed)
}

/// Box blur with an explicit edge divisor policy.
pub fn box_blur_with(
    buffer: &PixelBuffer,
    kernel_size: usize,
    divisor: EdgeDivisor,
) -> OpsResult<PixelBuffer> {
    box_blur_impl(Exec::Serial, buffer, kernel_size, divisor)
}

/// Raw weighted neighbor sum with `kernel`.
///
/// Output at `(row, col, c)` is
/// `Σ input[ri, ci, c] * kernel[ri - row + r, ci - col + r]` over the
/// truncated window. Not divided, not renormalized.
///
/// # Errors
///
/// [`OpsError::InvalidKernel`] if the kernel is not square or its size is
/// even.
pub fn apply_kernel(buffer: &PixelBuffer, kernel: &Kernel) -> OpsResult<PixelBuffer> {
    apply_kernel_impl(Exec::Serial, buffer, kernel)
}

/// Gradient magnitude: Sobel x and y responses merged with
/// [`combine::combine`].
pub fn sobel_edges(buffer: &PixelBuffer) -> OpsResult<PixelBuffer> {
    sobel_edges_impl(Exec::Serial, buffer)
}

pub(crate) fn check_kernel_size(kernel_size: usize) -> OpsResult<()> {
    if kernel_size == 0 || kernel_size % 2 == 0 {
        return Err(OpsError::InvalidParameter(format!(
            "kernel size must be a positive odd number, got {kernel_size}"
        )));
    }
    Ok(())
}

pub(crate) fn box_blur_impl(
    exec: Exec,
    buffer: &PixelBuffer,
    kernel_size: usize,
    divisor: EdgeDivisor,
) -> OpsResult<PixelBuffer> {
    trace!(shape = ?buffer.shape(), kernel_size, ?divisor, "box_blur");
    check_kernel_size(kernel_size)?;
    let radius = kernel_size / 2;

    // Truncated windows are rectangles, so the sum separates into a row
    // pass followed by a column pass, each O(kernel_size) per value.
    let row_sums = exec.rows(buffer, |row, out| {
        horizontal_sums(buffer.row(row), buffer.width(), buffer.channels(), radius, out)
    });
    let fixed = kernel_size as f32 * kernel_size as f32;
    Ok(exec.rows(&row_sums, |row, out| {
        vertical_average(&row_sums, row, radius, fixed, divisor, out)
    }))
}

pub(crate) fn apply_kernel_impl(
    exec: Exec,
    buffer: &PixelBuffer,
    kernel: &Kernel,
) -> OpsResult<PixelBuffer> {
    trace!(shape = ?buffer.shape(), kernel_w = kernel.width, kernel_h = kernel.height, "apply_kernel");
    let size = kernel.validate()?;
    let radius = size / 2;
    Ok(exec.rows(buffer, |row, out| convolve_row(buffer, kernel, radius, row, out)))
}

pub(crate) fn sobel_edges_impl(exec: Exec, buffer: &PixelBuffer) -> OpsResult<PixelBuffer> {
    debug!(shape = ?buffer.shape(), "Computing Sobel edge magnitude");
    let gx = apply_kernel_impl(exec, buffer, &Kernel::sobel_x())?;
    let gy = apply_kernel_impl(exec, buffer, &Kernel::sobel_y())?;
    combine::combine_impl(exec, &gx, &gy)
}

/// Inclusive neighbor range around `center`, truncated to `[0, len)`.
#[inline]
fn window(center: usize, radius: usize, len: usize) -> RangeInclusive<usize> {
    center.saturating_sub(radius)..=center.saturating_add(radius).min(len - 1)
}

/// Per-channel sums over the truncated column window of one row.
///
/// Each window is summed from scratch so no rounding error carries from
/// one pixel to the next.
fn horizontal_sums(src: &[f32], width: usize, channels: usize, radius: usize, out: &mut [f32]) {
    for x in 0..width {
        let cols = window(x, radius, width);
        for c in 0..channels {
            let mut sum = 0.0f32;
            for rx in cols.clone() {
                sum += src[rx * channels + c];
            }
            out[x * channels + c] = sum;
        }
    }
}

/// Sums row-pass results over the truncated row window and divides.
fn vertical_average(
    row_sums: &PixelBuffer,
    row: usize,
    radius: usize,
    fixed: f32,
    divisor: EdgeDivisor,
    out: &mut [f32],
) {
    let (width, height, channels) = row_sums.shape();
    let rows = window(row, radius, height);
    let row_count = rows.end() - rows.start() + 1;

    for x in 0..width {
        let div = match divisor {
            EdgeDivisor::Fixed => fixed,
            EdgeDivisor::Window => {
                let cols = window(x, radius, width);
                (row_count * (cols.end() - cols.start() + 1)) as f32
            }
        };
        for c in 0..channels {
            let mut sum = 0.0f32;
            for ry in rows.clone() {
                sum += row_sums.row(ry)[x * channels + c];
            }
            out[x * channels + c] = sum / div;
        }
    }
}

/// Weighted sums for one output row.
fn convolve_row(src: &PixelBuffer, kernel: &Kernel, radius: usize, row: usize, out: &mut [f32]) {
    let (width, height, channels) = src.shape();
    let rows = window(row, radius, height);

    for x in 0..width {
        let cols = window(x, radius, width);
        for c in 0..channels {
            let mut total = 0.0f32;
            for ry in rows.clone() {
                let ky = ry + radius - row;
                let src_row = src.row(ry);
                for rx in cols.clone() {
                    let kx = rx + radius - x;
                    total += src_row[rx * channels + c] * kernel.weight(ky, kx);
                }
            }
            out[x * channels + c] = total;
        }
    }
}
