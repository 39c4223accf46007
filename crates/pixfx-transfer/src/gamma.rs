//! Pure power-law gamma.
//!
//! Stored PNG values are gamma-encoded; processing happens on linear light.
//! [`GammaCodec`] carries the exponent explicitly so no module-level
//! default leaks into callers.
//!
//! # Range
//!
//! - Decode input: `[0, 1]`; non-positive inputs map to `0`.
//! - Encode input: any value, clamped to `[0, 1]` first.

use pixfx_core::{Error, PixelBuffer, Result};

/// Gamma used when none is configured (legacy CRT approximation).
pub const DEFAULT_GAMMA: f32 = 2.2;

/// EOTF for arbitrary gamma: `v^gamma`.
///
/// # Example
///
/// ```rust
/// use pixfx_transfer::gamma::gamma_eotf;
///
/// assert!((gamma_eotf(0.5, 2.0) - 0.25).abs() < 1e-6);
/// ```
#[inline]
pub fn gamma_eotf(v: f32, gamma: f32) -> f32 {
    if v <= 0.0 { 0.0 } else { v.powf(gamma) }
}

/// OETF for arbitrary gamma: `clamp(l, 0, 1)^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use pixfx_transfer::gamma::gamma_oetf;
///
/// let encoded = gamma_oetf(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// assert_eq!(gamma_oetf(3.0, 2.2), 1.0);
/// ```
#[inline]
pub fn gamma_oetf(l: f32, gamma: f32) -> f32 {
    let l = l.clamp(0.0, 1.0);
    if l == 0.0 { 0.0 } else { l.powf(1.0 / gamma) }
}

/// Gamma codec with an explicit exponent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaCodec {
    gamma: f32,
}

impl Default for GammaCodec {
    fn default() -> Self {
        Self {
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl GammaCodec {
    /// Creates a codec for the given exponent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] if `gamma` is not a finite value `> 0`.
    pub fn new(gamma: f32) -> Result<Self> {
        if !gamma.is_finite() || gamma <= 0.0 {
            return Err(Error::invalid_parameter(
                "gamma",
                format!("must be finite and > 0, got {gamma}"),
            ));
        }
        Ok(Self { gamma })
    }

    /// The exponent.
    #[inline]
    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Stored value to linear light.
    #[inline]
    pub fn decode(&self, stored: f32) -> f32 {
        gamma_eotf(stored, self.gamma)
    }

    /// Linear light to stored value, clamped to `[0, 1]`.
    ///
    /// Scaling to 8 bits is left to the I/O layer.
    #[inline]
    pub fn encode(&self, linear: f32) -> f32 {
        gamma_oetf(linear, self.gamma)
    }

    /// Decodes every value of `buffer` into a new buffer.
    pub fn decode_buffer(&self, buffer: &PixelBuffer) -> PixelBuffer {
        buffer.map(|v| self.decode(v))
    }

    /// Encodes every value of `buffer` into a new buffer.
    pub fn encode_buffer(&self, buffer: &PixelBuffer) -> PixelBuffer {
        buffer.map(|v| self.encode(v))
    }
}
