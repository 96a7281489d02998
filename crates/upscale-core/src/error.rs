//! Error types for upscale-rs operations.
//!
//! Every precondition of the resampler is checked at the API boundary and
//! reported through [`Error`] before a single output sample is written.
//! A call either fills the whole requested region or fails without touching
//! the destination.
//!
//! # Usage
//!
//! ```rust
//! use upscale_core::{Error, Result};
//!
//! fn check_output(width: u32, height: u32) -> Result<()> {
//!     if width == 1 || height == 1 {
//!         return Err(Error::DegenerateOutputSize { width, height });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_output(1, 10).is_err());
//! assert!(check_output(10, 10).is_ok());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while binding images or resampling.
///
/// # Categories
///
/// - **Dimension errors**: [`InvalidDimension`](Error::InvalidDimension),
///   [`DegenerateOutputSize`](Error::DegenerateOutputSize)
/// - **Buffer errors**: [`BufferTooSmall`](Error::BufferTooSmall)
/// - **Bounds errors**: [`InvalidRegion`](Error::InvalidRegion)
/// - **Binding errors**: [`InputNotBound`](Error::InputNotBound),
///   [`OutputNotBound`](Error::OutputNotBound)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero, or the pixel count overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A buffer holds fewer samples than its declared dimensions need.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upscale_core::Error;
    ///
    /// let err = Error::BufferTooSmall { required: 100, actual: 64 };
    /// assert!(err.to_string().contains("100"));
    /// ```
    #[error("buffer too small: need {required} samples, got {actual}")]
    BufferTooSmall {
        /// Samples required
        required: usize,
        /// Samples available
        actual: usize,
    },

    /// Output width or height of 1 leaves no interval to normalize over.
    ///
    /// Output coordinates are normalized by `width - 1` and `height - 1`,
    /// so a single column or row would divide by zero.
    #[error("degenerate output size {width}x{height}: width and height must be at least 2")]
    DegenerateOutputSize {
        /// Requested output width
        width: u32,
        /// Requested output height
        height: u32,
    },

    /// A region request does not fit inside the bound output image.
    #[error("region ({rx}, {ry}, {rw}x{rh}) exceeds output bounds {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Output width
        width: u32,
        /// Output height
        height: u32,
    },

    /// No input image has been bound.
    #[error("no input image bound")]
    InputNotBound,

    /// No output buffer (or, for region requests, no output size) has been bound.
    #[error("no output image bound")]
    OutputNotBound,
}

impl Error {
    /// Creates an [`Error::InvalidDimension`] error.
    #[inline]
    pub fn invalid_dimension(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::BufferTooSmall`] error.
    #[inline]
    pub fn buffer_too_small(required: usize, actual: usize) -> Self {
        Self::BufferTooSmall { required, actual }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(rx: u32, ry: u32, rw: u32, rh: u32, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx,
            ry,
            rw,
            rh,
            width,
            height,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::InvalidRegion { .. } | Self::BufferTooSmall { .. })
    }

    /// Returns `true` if the call failed because an image was not bound.
    #[inline]
    pub fn is_binding_error(&self) -> bool {
        matches!(self, Self::InputNotBound | Self::OutputNotBound)
    }
}

/// Checks that `width x height` is a usable image size and returns its pixel count.
///
/// # Example
///
/// ```rust
/// use upscale_core::pixel_count;
///
/// assert_eq!(pixel_count(8, 8).unwrap(), 64);
/// assert!(pixel_count(0, 8).is_err());
/// ```
pub fn pixel_count(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimension(width, height, "width and height must be > 0"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimension(width, height, "pixel count overflows"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_region(4, 4, 8, 8, 10, 10);
        let msg = err.to_string();
        assert!(msg.contains("(4, 4, 8x8)"));
        assert!(msg.contains("10x10"));

        let err = Error::DegenerateOutputSize { width: 1, height: 32 };
        assert!(err.to_string().contains("1x32"));
    }

    #[test]
    fn test_error_categories() {
        assert!(Error::buffer_too_small(4, 3).is_bounds_error());
        assert!(Error::invalid_region(0, 0, 1, 1, 0, 0).is_bounds_error());
        assert!(!Error::InputNotBound.is_bounds_error());

        assert!(Error::InputNotBound.is_binding_error());
        assert!(Error::OutputNotBound.is_binding_error());
        assert!(!Error::invalid_dimension(0, 0, "zero").is_binding_error());
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(pixel_count(1, 1).unwrap(), 1);
        assert_eq!(pixel_count(320, 240).unwrap(), 76_800);
        assert!(matches!(
            pixel_count(5, 0),
            Err(Error::InvalidDimension { width: 5, height: 0, .. })
        ));
    }
}
