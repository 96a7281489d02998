//! # upscale-ops
//!
//! Upscaling of single-channel `f32` images for small displays.
//!
//! A typical consumer is a microcontroller that reads an 8x8 or 32x24
//! thermal-sensor frame and shows it on a 320x240 TFT. The full upscaled
//! frame may not fit in RAM, so the output can be produced region by region
//! with results identical to a single full resize.
//!
//! # Modules
//!
//! - [`accessor`] - Edge-replicating pixel lookup
//! - [`filter`] - Nearest, bilinear and bicubic sampling
//! - [`resampler`] - The resize driver over caller-owned buffers
//! - [`tile`] - Tile planning for partial output
//! - `parallel` - Rayon row-parallel driver (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use upscale_ops::{Filter, Resampler};
//!
//! let frame = vec![21.5f32; 8 * 8];
//! let mut pixels = vec![0.0f32; 64 * 64];
//!
//! let mut rs = Resampler::new();
//! rs.bind_input(&frame, 8, 8)?;
//! rs.bind_output(&mut pixels, 64, 64)?;
//! rs.resize_full(Filter::Bicubic)?;
//! drop(rs);
//!
//! assert!(pixels.iter().all(|&t| t == 21.5));
//! # Ok::<(), upscale_core::Error>(())
//! ```
//!
//! ## Streaming to a display
//!
//! ```rust,ignore
//! let mut rs = Resampler::new();
//! rs.bind_input(&frame, 8, 8)?;
//! rs.bind_output_size(320, 240)?;
//!
//! let mut strip = [0.0f32; 320 * 8];
//! rs.resize_streamed(&mut strip, Filter::Bilinear, |rect, samples| {
//!     tft.push_window(rect, samples)
//! })?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod accessor;
pub mod filter;
pub mod resampler;
pub mod tile;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use accessor::PixelAccessor;
pub use filter::{cubic_hermite, lerp, Filter, ParseError, SampleGrid, Sampler};
pub use resampler::{fit_dimensions, scale_dimensions, Resampler};
pub use tile::{TileGrid, Tiles};
pub use upscale_core::{Error, ImageView, ImageViewMut, Rect, Result};
