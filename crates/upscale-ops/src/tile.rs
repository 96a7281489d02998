//! Tile planning for partial output.
//!
//! A [`TileGrid`] partitions an output image into non-overlapping
//! rectangles, row-major, with the last column and row of tiles clipped to
//! the image. Feeding each tile to
//! [`Resampler::resize_region`](crate::Resampler::resize_region) reproduces a
//! full resize exactly while only ever holding one tile in memory.
//!
//! ```text
//! ┌──────┬──────┬───┐
//! │  0   │  1   │ 2 │
//! ├──────┼──────┼───┤
//! │  3   │  4   │ 5 │
//! └──────┴──────┴───┘
//! ```

use tracing::debug;
use upscale_core::{Error, Rect, Result};

/// Row-major partition of a `width x height` image into tiles.
///
/// # Example
///
/// ```rust
/// use upscale_core::Rect;
/// use upscale_ops::TileGrid;
///
/// let grid = TileGrid::new(10, 5, 4, 4).unwrap();
/// assert_eq!(grid.len(), 6);
/// let tiles: Vec<Rect> = grid.iter().collect();
/// assert_eq!(tiles[2], Rect::new(8, 0, 2, 4));
/// assert_eq!(tiles[5], Rect::new(8, 4, 2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_width: u32,
    tile_height: u32,
}

impl TileGrid {
    /// Creates a grid of `tile_width x tile_height` tiles.
    ///
    /// Tiles larger than the image are clipped to it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] if any size is zero.
    pub fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimension(width, height, "image must not be empty"));
        }
        if tile_width == 0 || tile_height == 0 {
            return Err(Error::invalid_dimension(
                tile_width,
                tile_height,
                "tile must not be empty",
            ));
        }
        Ok(Self {
            width,
            height,
            tile_width: tile_width.min(width),
            tile_height: tile_height.min(height),
        })
    }

    /// Plans tiles that each hold at most `max_pixels` samples.
    ///
    /// Prefers full-width strips, which suit displays that accept a window
    /// of whole rows. If a single row exceeds the budget, rows are split into
    /// `max_pixels`-wide pieces.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upscale_ops::TileGrid;
    ///
    /// let strips = TileGrid::for_budget(320, 240, 320 * 16).unwrap();
    /// assert_eq!(strips.tile_size(), (320, 16));
    /// assert_eq!(strips.len(), 15);
    ///
    /// let pieces = TileGrid::for_budget(320, 240, 100).unwrap();
    /// assert_eq!(pieces.tile_size(), (100, 1));
    /// ```
    pub fn for_budget(width: u32, height: u32, max_pixels: usize) -> Result<Self> {
        if max_pixels == 0 {
            return Err(Error::invalid_dimension(width, height, "tile budget must be > 0"));
        }
        let grid = if width as usize <= max_pixels {
            let rows = (max_pixels / width.max(1) as usize).min(u32::MAX as usize) as u32;
            Self::new(width, height, width, rows)?
        } else {
            Self::new(width, height, max_pixels as u32, 1)?
        };
        debug!(
            width,
            height,
            max_pixels,
            tile_width = grid.tile_width,
            tile_height = grid.tile_height,
            tiles = grid.len(),
            "Planned tiles for budget"
        );
        Ok(grid)
    }

    /// Size of a full (unclipped) tile.
    #[inline]
    pub fn tile_size(&self) -> (u32, u32) {
        (self.tile_width, self.tile_height)
    }

    /// Samples in the largest tile; the scratch size a consumer needs.
    #[inline]
    pub fn max_tile_pixels(&self) -> usize {
        self.tile_width as usize * self.tile_height as usize
    }

    /// Number of tile columns.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.width.div_ceil(self.tile_width)
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.tile_height)
    }

    /// Total number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Always `false`; a grid covers a non-empty image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns tile `index` in row-major order.
    pub fn tile(&self, index: usize) -> Option<Rect> {
        if index >= self.len() {
            return None;
        }
        let cols = self.columns() as usize;
        let x = (index % cols) as u32 * self.tile_width;
        let y = (index / cols) as u32 * self.tile_height;
        Some(Rect::new(
            x,
            y,
            self.tile_width.min(self.width - x),
            self.tile_height.min(self.height - y),
        ))
    }

    /// Iterates over all tiles, row-major.
    pub fn iter(&self) -> Tiles<'_> {
        Tiles {
            grid: self,
            next: 0,
        }
    }
}

impl<'g> IntoIterator for &'g TileGrid {
    type Item = Rect;
    type IntoIter = Tiles<'g>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tiles of a [`TileGrid`].
#[derive(Debug, Clone)]
pub struct Tiles<'g> {
    grid: &'g TileGrid,
    next: usize,
}

impl Iterator for Tiles<'_> {
    type Item = Rect;

    fn next(&mut self) -> Option<Rect> {
        let tile = self.grid.tile(self.next)?;
        self.next += 1;
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tiles<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_image_once() {
        let grid = TileGrid::new(37, 23, 8, 5).unwrap();
        let mut hits = vec![0u8; 37 * 23];
        for tile in &grid {
            for (x, y) in tile.iter_coords() {
                hits[(y * 37 + x) as usize] += 1;
            }
        }
        assert!(hits.iter().all(|&h| h == 1));
        assert_eq!(grid.iter().len(), grid.len());
        assert_eq!(grid.len(), 5 * 5);
    }

    #[test]
    fn test_grid_clips_large_tiles() {
        let grid = TileGrid::new(6, 4, 100, 100).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.tile(0), Some(Rect::from_size(6, 4)));
        assert_eq!(grid.max_tile_pixels(), 24);
        assert_eq!(grid.tile(1), None);
    }

    #[test]
    fn test_grid_rejects_zero() {
        assert!(TileGrid::new(0, 4, 2, 2).is_err());
        assert!(TileGrid::new(4, 4, 0, 2).is_err());
        assert!(TileGrid::new(4, 4, 2, 0).is_err());
        assert!(TileGrid::for_budget(4, 4, 0).is_err());
    }

    #[test]
    fn test_budget_strips() {
        let grid = TileGrid::for_budget(10, 7, 25).unwrap();
        assert_eq!(grid.tile_size(), (10, 2));
        assert_eq!(grid.len(), 4);
        assert_eq!(grid.tile(3), Some(Rect::new(0, 6, 10, 1)));
        assert!(grid.iter().all(|t| t.area() <= 25));
    }

    #[test]
    fn test_budget_row_pieces() {
        let grid = TileGrid::for_budget(10, 3, 4).unwrap();
        assert_eq!(grid.tile_size(), (4, 1));
        assert_eq!(grid.columns(), 3);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.tile(2), Some(Rect::new(8, 0, 2, 1)));
    }

    #[test]
    fn test_budget_larger_than_image() {
        let grid = TileGrid::for_budget(8, 8, 1_000_000).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.tile_size(), (8, 8));
    }
}
