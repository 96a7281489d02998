//! Resize driver.
//!
//! [`Resampler`] binds one input image and one output image (or only the
//! output's dimensions) and fills output pixels through a [`Filter`]:
//!
//! - [`Resampler::resize_full`] - every pixel of the bound output buffer
//! - [`Resampler::resize_region`] - one output-space rectangle into a
//!   caller-supplied buffer
//! - [`Resampler::resize_tiled`] / [`Resampler::resize_streamed`] - the whole
//!   output, tile by tile, through a small scratch buffer
//!
//! Output pixel `(x, y)` is sampled at normalized coordinates
//! `(x / (out_width - 1), y / (out_height - 1))`. Region requests normalize
//! by the *full* output size, so any partition of the output into regions
//! yields exactly the samples of one full resize.
//!
//! # Example
//!
//! ```rust
//! use upscale_core::Rect;
//! use upscale_ops::{Filter, Resampler};
//!
//! let frame = [0.0, 1.0, 2.0, 3.0];
//! let mut full = vec![0.0f32; 8 * 8];
//!
//! let mut rs = Resampler::new();
//! rs.bind_input(&frame, 2, 2).unwrap();
//! rs.bind_output(&mut full, 8, 8).unwrap();
//! rs.resize_full(Filter::Bilinear).unwrap();
//!
//! let mut tile = vec![0.0f32; 4 * 4];
//! rs.resize_region(&mut tile, Rect::new(4, 4, 4, 4), Filter::Bilinear).unwrap();
//! drop(rs);
//!
//! assert_eq!(tile[0], full[4 * 8 + 4]);
//! ```

use tracing::{debug, trace};
use upscale_core::{Error, ImageView, ImageViewMut, Rect, Result, pixel_count};

use crate::filter::{Filter, SampleGrid, Sampler};
use crate::tile::TileGrid;

/// Transient resampling object over caller-owned buffers.
///
/// Bindings can be replaced at any time and in any order; nothing is cached
/// between calls. Every call validates its preconditions first and writes
/// nothing when it fails.
#[derive(Debug, Default)]
pub struct Resampler<'a> {
    input: Option<ImageView<'a>>,
    output: Option<ImageViewMut<'a>>,
    output_dims: Option<(u32, u32)>,
    grid: SampleGrid,
}

impl<'a> Resampler<'a> {
    /// Creates an unbound resampler using [`SampleGrid::Extent`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unbound resampler using `grid`.
    pub fn with_grid(grid: SampleGrid) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// The sample grid in use.
    #[inline]
    pub fn grid(&self) -> SampleGrid {
        self.grid
    }

    /// Changes the sample grid for subsequent calls.
    pub fn set_grid(&mut self, grid: SampleGrid) {
        self.grid = grid;
    }

    /// Binds the input image.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is zero
    /// - [`Error::BufferTooSmall`] if `buffer` is shorter than `width * height`
    pub fn bind_input(&mut self, buffer: &'a [f32], width: u32, height: u32) -> Result<()> {
        let view = ImageView::new(buffer, width, height)?;
        debug!(width, height, "Bound input");
        self.input = Some(view);
        Ok(())
    }

    /// Binds the output image and its buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is zero
    /// - [`Error::DegenerateOutputSize`] if width or height is one
    /// - [`Error::BufferTooSmall`] if `buffer` is shorter than `width * height`
    pub fn bind_output(&mut self, buffer: &'a mut [f32], width: u32, height: u32) -> Result<()> {
        check_output_size(width, height)?;
        let view = ImageViewMut::new(buffer, width, height)?;
        debug!(width, height, "Bound output buffer");
        self.output = Some(view);
        self.output_dims = Some((width, height));
        Ok(())
    }

    /// Binds only the output dimensions, for consumers that request the
    /// output region by region and never hold all of it.
    ///
    /// Releases any previously bound output buffer.
    ///
    /// # Errors
    ///
    /// Same as [`bind_output`](Self::bind_output), minus the buffer check.
    pub fn bind_output_size(&mut self, width: u32, height: u32) -> Result<()> {
        check_output_size(width, height)?;
        debug!(width, height, "Bound output size");
        self.output = None;
        self.output_dims = Some((width, height));
        Ok(())
    }

    /// Drops the output binding, returning nothing to the caller; the
    /// borrowed buffer becomes available again once the resampler is gone.
    pub fn unbind_output(&mut self) {
        self.output = None;
        self.output_dims = None;
    }

    /// The bound input image.
    #[inline]
    pub fn input(&self) -> Option<ImageView<'a>> {
        self.input
    }

    /// The bound output buffer, read-only.
    pub fn output(&self) -> Option<ImageView<'_>> {
        self.output.as_ref().map(ImageViewMut::as_view)
    }

    /// The bound output dimensions.
    #[inline]
    pub fn output_dims(&self) -> Option<(u32, u32)> {
        self.output_dims
    }

    /// Fills the whole bound output buffer.
    ///
    /// # Errors
    ///
    /// - [`Error::InputNotBound`] without an input
    /// - [`Error::OutputNotBound`] without an output buffer (a size-only
    ///   binding is not enough)
    pub fn resize_full(&mut self, filter: Filter) -> Result<()> {
        let job = self.prepare_full(filter)?;
        trace!(width = job.region.width, height = job.region.height, %filter, "resize_full");
        job.fill(self.output_data_mut()?);
        Ok(())
    }

    /// Fills `region` of the output space into `dest`, row-major with row
    /// length `region.width`.
    ///
    /// # Errors
    ///
    /// - [`Error::InputNotBound`] / [`Error::OutputNotBound`] when a binding is missing
    /// - [`Error::InvalidDimension`] for an empty region
    /// - [`Error::InvalidRegion`] if the region leaves the output bounds
    /// - [`Error::BufferTooSmall`] if `dest` holds fewer than `width * height` samples
    pub fn resize_region(&self, dest: &mut [f32], region: Rect, filter: Filter) -> Result<()> {
        let job = self.prepare_region(region, dest.len(), filter)?;
        trace!(%region, %filter, "resize_region");
        job.fill(dest);
        Ok(())
    }

    /// Produces the output tile by tile through `scratch`, handing every
    /// finished tile to `sink`.
    ///
    /// `scratch` must hold one full tile (tiles are clipped to the output).
    /// Stops at the first error, from validation or from `sink`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upscale_ops::{Filter, Resampler};
    ///
    /// let frame = [1.0f32; 4];
    /// let mut rs = Resampler::new();
    /// rs.bind_input(&frame, 2, 2).unwrap();
    /// rs.bind_output_size(32, 24).unwrap();
    ///
    /// let mut scratch = [0.0f32; 8 * 8];
    /// let mut written = 0;
    /// rs.resize_tiled(&mut scratch, 8, 8, Filter::Bicubic, |rect, samples| {
    ///     written += samples.len();
    ///     assert_eq!(samples.len() as u64, rect.area());
    ///     Ok::<(), upscale_core::Error>(())
    /// })
    /// .unwrap();
    /// assert_eq!(written, 32 * 24);
    /// ```
    pub fn resize_tiled<F, E>(
        &self,
        scratch: &mut [f32],
        tile_width: u32,
        tile_height: u32,
        filter: Filter,
        sink: F,
    ) -> std::result::Result<(), E>
    where
        F: FnMut(Rect, &[f32]) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let (width, height) = self.output_dims.ok_or(Error::OutputNotBound)?;
        let grid = TileGrid::new(width, height, tile_width, tile_height)?;
        self.run_tiles(&grid, scratch, filter, sink)
    }

    /// Like [`resize_tiled`](Self::resize_tiled), with tiles sized to fit
    /// all of `scratch` (see [`TileGrid::for_budget`]).
    pub fn resize_streamed<F, E>(&self, scratch: &mut [f32], filter: Filter, sink: F) -> std::result::Result<(), E>
    where
        F: FnMut(Rect, &[f32]) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let (width, height) = self.output_dims.ok_or(Error::OutputNotBound)?;
        let grid = TileGrid::for_budget(width, height, scratch.len())?;
        self.run_tiles(&grid, scratch, filter, sink)
    }

    fn run_tiles<F, E>(
        &self,
        grid: &TileGrid,
        scratch: &mut [f32],
        filter: Filter,
        mut sink: F,
    ) -> std::result::Result<(), E>
    where
        F: FnMut(Rect, &[f32]) -> std::result::Result<(), E>,
        E: From<Error>,
    {
        let needed = grid.max_tile_pixels();
        if scratch.len() < needed {
            return Err(Error::buffer_too_small(needed, scratch.len()).into());
        }
        debug!(tiles = grid.len(), tile_size = ?grid.tile_size(), %filter, "Resizing tiled");

        for tile in grid {
            let len = tile.width as usize * tile.height as usize;
            self.resize_region(&mut scratch[..len], tile, filter)?;
            sink(tile, &scratch[..len])?;
        }
        Ok(())
    }

    /// Validates a full resize and returns the work description.
    pub(crate) fn prepare_full(&self, filter: Filter) -> Result<RegionJob<'a>> {
        let input = self.input.ok_or(Error::InputNotBound)?;
        let Some(output) = self.output.as_ref() else {
            return Err(Error::OutputNotBound);
        };
        Ok(RegionJob::new(input, output.dimensions(), output.bounds(), filter, self.grid))
    }

    /// Validates a region request against the bindings and `dest_len`.
    pub(crate) fn prepare_region(
        &self,
        region: Rect,
        dest_len: usize,
        filter: Filter,
    ) -> Result<RegionJob<'a>> {
        let input = self.input.ok_or(Error::InputNotBound)?;
        let (width, height) = self.output_dims.ok_or(Error::OutputNotBound)?;

        let required = pixel_count(region.width, region.height)?;
        if !Rect::from_size(width, height).contains_rect(&region) {
            return Err(Error::invalid_region(
                region.x,
                region.y,
                region.width,
                region.height,
                width,
                height,
            ));
        }
        if dest_len < required {
            return Err(Error::buffer_too_small(required, dest_len));
        }
        Ok(RegionJob::new(input, (width, height), region, filter, self.grid))
    }

    /// Mutable access to the bound output samples.
    pub(crate) fn output_data_mut(&mut self) -> Result<&mut [f32]> {
        self.output
            .as_mut()
            .map(ImageViewMut::data_mut)
            .ok_or(Error::OutputNotBound)
    }
}

fn check_output_size(width: u32, height: u32) -> Result<()> {
    pixel_count(width, height)?;
    if width == 1 || height == 1 {
        return Err(Error::DegenerateOutputSize { width, height });
    }
    Ok(())
}

/// A validated region fill: sampler, normalization and target rectangle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RegionJob<'a> {
    sampler: Sampler<'a>,
    last_col: f32,
    last_row: f32,
    pub(crate) region: Rect,
}

impl<'a> RegionJob<'a> {
    fn new(input: ImageView<'a>, output: (u32, u32), region: Rect, filter: Filter, grid: SampleGrid) -> Self {
        Self {
            sampler: Sampler::new(input, filter, grid),
            last_col: (output.0 - 1) as f32,
            last_row: (output.1 - 1) as f32,
            region,
        }
    }

    /// Fills output row `region.y + row_index` into `row`.
    #[inline]
    pub(crate) fn fill_row(&self, row_index: usize, row: &mut [f32]) {
        let y = self.region.y + row_index as u32;
        let v = y as f32 / self.last_row;
        for (i, out) in row.iter_mut().enumerate() {
            let x = self.region.x + i as u32;
            *out = self.sampler.sample(x as f32 / self.last_col, v);
        }
    }

    /// Fills the whole region into `dest`, which holds at least `width * height` samples.
    pub(crate) fn fill(&self, dest: &mut [f32]) {
        let width = self.region.width as usize;
        let len = width * self.region.height as usize;
        for (row_index, row) in dest[..len].chunks_exact_mut(width).enumerate() {
            self.fill_row(row_index, row);
        }
    }
}

/// Calculates the aspect-preserving dimensions that fit inside a box.
///
/// # Example
///
/// ```rust
/// use upscale_ops::fit_dimensions;
///
/// // 8x8 sensor frame on a 320x240 panel
/// assert_eq!(fit_dimensions(8, 8, 320, 240), (240, 240));
/// assert_eq!(fit_dimensions(32, 24, 320, 320), (320, 240));
/// ```
pub fn fit_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let scale_w = max_w as f32 / src_w as f32;
    let scale_h = max_h as f32 / src_h as f32;
    scale_dimensions(src_w, src_h, scale_w.min(scale_h))
}

/// Scales dimensions by `scale`, rounding and keeping each side at least 1.
///
/// ```rust
/// use upscale_ops::scale_dimensions;
///
/// assert_eq!(scale_dimensions(8, 6, 2.5), (20, 15));
/// ```
pub fn scale_dimensions(src_w: u32, src_h: u32, scale: f32) -> (u32, u32) {
    let new_w = ((src_w as f32 * scale).round() as u32).max(1);
    let new_h = ((src_h as f32 * scale).round() as u32).max(1);
    (new_w, new_h)
}
