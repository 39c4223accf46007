//! Owned float pixel buffer.
//!
//! [`PixelBuffer`] is a dense 3-dimensional array indexed as
//! `(row, col, channel)`. Values are stored row-major, top-to-bottom,
//! with channels interleaved:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! There are exactly two ways to build one from scratch:
//! [`PixelBuffer::create_empty`] (zero-filled) and
//! [`PixelBuffer::from_decoded`] (wraps codec output). Transforms build
//! their outputs through [`PixelBuffer::map`], [`PixelBuffer::zip_map`] or
//! [`PixelBuffer::from_decoded`].
//!
//! # Usage
//!
//! ```rust
//! use pixfx_core::PixelBuffer;
//!
//! let mut buf = PixelBuffer::create_empty(2, 2, 3).unwrap();
//! buf.set(1, 0, 2, 0.75).unwrap();
//! assert_eq!(buf.get(1, 0, 2).unwrap(), 0.75);
//! assert_eq!(buf.get(0, 0, 0).unwrap(), 0.0);
//! ```

use crate::{Error, Result};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Owned `(row, col, channel)` buffer of `f32` values.
///
/// Values may leave `[0, 1]` after transforms; clamping only happens at
/// encode time.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    data: Vec<f32>,
    width: usize,
    height: usize,
    channels: usize,
}

impl PixelBuffer {
    /// Creates a buffer with every value set to `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if any dimension is zero or
    /// the element count overflows `usize`.
    pub fn create_empty(width: usize, height: usize, channels: usize) -> Result<Self> {
        let len = element_count(width, height, channels)?;
        Ok(Self {
            data: vec![0.0; len],
            width,
            height,
            channels,
        })
    }

    /// Wraps codec-decoded data laid out row-major with interleaved channels.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if any dimension is zero.
    /// - [`Error::ShapeMismatch`] if `data.len() != width * height * channels`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixfx_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_decoded(vec![0.5; 12], 2, 2, 3).unwrap();
    /// assert_eq!(buf.shape(), (2, 2, 3));
    /// assert!(PixelBuffer::from_decoded(vec![0.5; 11], 2, 2, 3).is_err());
    /// ```
    pub fn from_decoded(
        data: Vec<f32>,
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self> {
        let expected = element_count(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::length_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Builds a buffer from one flat slice per row, each holding
    /// `width * channels` interleaved values.
    ///
    /// This is the shape PNG codecs hand back.
    pub fn from_rows<R: AsRef<[f32]>>(
        rows: &[R],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Self> {
        let len = element_count(width, height, channels)?;
        if rows.len() != height {
            return Err(Error::shape_mismatch(
                (width, height, channels),
                (width, rows.len(), channels),
            ));
        }
        let stride = width * channels;
        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != stride {
                return Err(Error::length_mismatch(stride, row.len()));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Pixel columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Values per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns `(width, height, channels)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    /// Returns `true` if `other` has identical `(width, height, channels)`.
    #[inline]
    pub fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.shape() == other.shape()
    }

    /// Number of values in one row (`width * channels`).
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width * self.channels
    }

    /// Flat index of `(row, col, channel)`.
    ///
    /// Does not check bounds; out-of-range coordinates give an index that
    /// makes a later slice access panic. Use [`get`](Self::get) for
    /// checked access.
    #[inline]
    pub fn index(&self, row: usize, col: usize, channel: usize) -> usize {
        (row * self.width + col) * self.channels + channel
    }

    /// Reads the value at `(row, col, channel)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for any coordinate outside the
    /// buffer extents.
    pub fn get(&self, row: usize, col: usize, channel: usize) -> Result<f32> {
        self.check_bounds(row, col, channel)?;
        Ok(self.data[self.index(row, col, channel)])
    }

    /// Writes the value at `(row, col, channel)`.
    ///
    /// The value is stored as given; no clamping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for any coordinate outside the
    /// buffer extents.
    pub fn set(&mut self, row: usize, col: usize, channel: usize, value: f32) -> Result<()> {
        self.check_bounds(row, col, channel)?;
        let idx = self.index(row, col, channel);
        self.data[idx] = value;
        Ok(())
    }

    /// All values, row-major with interleaved channels.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to all values.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the buffer and returns its storage.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Values of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        let stride = self.row_stride();
        &self.data[row * stride..(row + 1) * stride]
    }

    /// Iterates over rows as slices of `width * channels` values.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.row_stride())
    }

    /// Applies `f` to every value and returns the result as a new buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pixfx_core::PixelBuffer;
    ///
    /// let buf = PixelBuffer::from_decoded(vec![0.25; 3], 1, 1, 3).unwrap();
    /// let doubled = buf.map(|v| v * 2.0);
    /// assert_eq!(doubled.get(0, 0, 1).unwrap(), 0.5);
    /// assert_eq!(buf.get(0, 0, 1).unwrap(), 0.25);
    /// ```
    pub fn map<F>(&self, f: F) -> PixelBuffer
    where
        F: Fn(f32) -> f32,
    {
        Self {
            data: self.data.iter().map(|&v| f(v)).collect(),
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Combines two equally-shaped buffers element by element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the shapes differ.
    pub fn zip_map<F>(&self, other: &PixelBuffer, f: F) -> Result<PixelBuffer>
    where
        F: Fn(f32, f32) -> f32,
    {
        if !self.same_shape(other) {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            width: self.width,
            height: self.height,
            channels: self.channels,
        })
    }

    /// Builds a new buffer of this buffer's shape, filling output row `r`
    /// with `f(r, out_row)`.
    ///
    /// `out_row` starts zeroed and holds `width * channels` values. This is
    /// the row-at-a-time entry point the transforms are written against.
    pub fn map_rows<F>(&self, f: F) -> PixelBuffer
    where
        F: Fn(usize, &mut [f32]),
    {
        let mut data = vec![0.0f32; self.data.len()];
        data.chunks_mut(self.row_stride())
            .enumerate()
            .for_each(|(row, out)| f(row, out));
        Self {
            data,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Parallel [`map_rows`](Self::map_rows): rows are filled on the rayon
    /// pool. Output is identical to the serial version for the same `f`.
    #[cfg(feature = "rayon")]
    pub fn par_map_rows<F>(&self, f: F) -> PixelBuffer
    where
        F: Fn(usize, &mut [f32]) + Sync + Send,
    {
        let mut data = vec![0.0f32; self.data.len()];
        data.par_chunks_mut(self.row_stride())
            .enumerate()
            .for_each(|(row, out)| f(row, out));
        Self {
            data,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }

    /// Returns `true` if both buffers have the same shape and every pair of
    /// values differs by at most `epsilon`.
    pub fn approx_eq(&self, other: &PixelBuffer, epsilon: f32) -> bool {
        self.same_shape(other)
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    fn check_bounds(&self, row: usize, col: usize, channel: usize) -> Result<()> {
        if row >= self.height || col >= self.width || channel >= self.channels {
            return Err(Error::out_of_bounds((row, col, channel), self.shape()));
        }
        Ok(())
    }
}

fn element_count(width: usize, height: usize, channels: usize) -> Result<usize> {
    if width == 0 || height == 0 || channels == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            channels,
            "width, height, and channels must be > 0",
        ));
    }
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(channels))
        .ok_or_else(|| Error::invalid_dimensions(width, height, channels, "size overflows usize"))
}
