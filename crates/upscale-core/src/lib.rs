//! # upscale-core
//!
//! Core types for single-channel float image resampling.
//!
//! This crate provides the foundational types shared by the upscale-rs crates:
//!
//! - [`ImageView`], [`ImageViewMut`] - Borrowed row-major `f32` images
//! - [`Rect`] - Region types for partial (tiled) output requests
//! - [`Error`], [`Result`] - Validation errors reported at API boundaries
//!
//! ## Design Philosophy
//!
//! Buffers are always **caller owned**. A view never allocates and never
//! copies; it only pairs a slice with its declared dimensions after checking
//! that the slice is large enough:
//!
//! ```
//! use upscale_core::{Error, ImageView};
//!
//! let frame = [0.0f32; 64];
//! let view = ImageView::new(&frame, 8, 8).unwrap();
//! assert_eq!(view.last_col(), 7);
//!
//! let err = ImageView::new(&frame, 16, 16).unwrap_err();
//! assert!(matches!(err, Error::BufferTooSmall { required: 256, actual: 64 }));
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! upscale-core (this crate)
//!    ^
//!    |
//!    +-- upscale-ops (sampling filters, resampler, tiling)
//!    +-- upscale-cli (command line front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod rect;

// Re-exports for convenience
pub use error::*;
pub use image::*;
pub use rect::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use upscale_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::{ImageView, ImageViewMut};
    pub use crate::rect::Rect;
}
