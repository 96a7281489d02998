//! Borrowed single-channel image views.
//!
//! An image here is a flat row-major mapping from `(column, row)` to one
//! `f32` sample. The views in this module never own their storage: the
//! caller allocates the buffer, the view pairs it with declared dimensions
//! and validates that the buffer is large enough.
//!
//! ```text
//! data: [ p(0,0) p(1,0) .. p(w-1,0) | p(0,1) .. | .. p(w-1,h-1) ]
//!         └──────── row 0 ────────┘
//! ```
//!
//! A buffer longer than `width * height` is accepted; only the leading
//! `width * height` samples belong to the image.

use crate::error::{pixel_count, Error, Result};
use crate::rect::Rect;

/// Read-only view over a caller-owned row-major `f32` buffer.
///
/// # Example
///
/// ```rust
/// use upscale_core::ImageView;
///
/// let data = [0.0, 10.0, 20.0, 30.0];
/// let view = ImageView::new(&data, 2, 2).unwrap();
/// assert_eq!(view.pixel(1, 1), 30.0);
/// assert_eq!(view.get_pixel(2, 0), None);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct ImageView<'a> {
    data: &'a [f32],
    width: u32,
    height: u32,
}

impl<'a> ImageView<'a> {
    /// Creates a view, checking dimensions and buffer length.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimension`] if width or height is zero
    /// - [`Error::BufferTooSmall`] if `data` holds fewer than `width * height` samples
    pub fn new(data: &'a [f32], width: u32, height: u32) -> Result<Self> {
        let required = pixel_count(width, height)?;
        if data.len() < required {
            return Err(Error::buffer_too_small(required, data.len()));
        }
        Ok(Self {
            data: &data[..required],
            width,
            height,
        })
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Index of the last column, `width - 1`.
    #[inline]
    pub fn last_col(&self) -> u32 {
        self.width - 1
    }

    /// Index of the last row, `height - 1`.
    #[inline]
    pub fn last_row(&self) -> u32 {
        self.height - 1
    }

    /// Returns the full-image rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Number of samples in the image.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Image samples, exactly `width * height` long.
    #[inline]
    pub fn data(&self) -> &'a [f32] {
        self.data
    }

    /// Returns the sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> f32 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Gets a sample, returning `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Returns row `y` as a slice.
    #[inline]
    pub fn row(&self, y: u32) -> &'a [f32] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Smallest and largest sample.
    pub fn min_max(&self) -> (f32, f32) {
        self.data
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

impl std::fmt::Debug for ImageView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageView")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

/// Mutable view over a caller-owned row-major `f32` buffer.
///
/// # Example
///
/// ```rust
/// use upscale_core::ImageViewMut;
///
/// let mut data = vec![0.0f32; 6];
/// let mut view = ImageViewMut::new(&mut data, 3, 2).unwrap();
/// view.set_pixel(2, 1, 4.5);
/// assert_eq!(view.as_view().pixel(2, 1), 4.5);
/// ```
pub struct ImageViewMut<'a> {
    data: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> ImageViewMut<'a> {
    /// Creates a mutable view, checking dimensions and buffer length.
    ///
    /// # Errors
    ///
    /// Same as [`ImageView::new`].
    pub fn new(data: &'a mut [f32], width: u32, height: u32) -> Result<Self> {
        let required = pixel_count(width, height)?;
        if data.len() < required {
            return Err(Error::buffer_too_small(required, data.len()));
        }
        Ok(Self {
            data: &mut data[..required],
            width,
            height,
        })
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the full-image rectangle.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Reborrows as a read-only view.
    #[inline]
    pub fn as_view(&self) -> ImageView<'_> {
        ImageView {
            data: &*self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Image samples, exactly `width * height` long.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Sets the sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if coordinates are outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.data[y as usize * self.width as usize + x as usize] = value;
    }

    /// Returns row `y` as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        let start = y as usize * self.width as usize;
        &mut self.data[start..start + self.width as usize]
    }

    /// Fills the whole image with `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }
}

impl std::fmt::Debug for ImageViewMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageViewMut")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_view_new() {
        let data = vec![1.0f32; 12];
        let view = ImageView::new(&data, 4, 3).unwrap();
        assert_eq!(view.dimensions(), (4, 3));
        assert_eq!(view.last_col(), 3);
        assert_eq!(view.last_row(), 2);
        assert_eq!(view.pixel_count(), 12);
        assert_eq!(view.bounds(), Rect::from_size(4, 3));
    }

    #[test]
    fn test_view_rejects_zero_size() {
        let data = vec![1.0f32; 4];
        assert!(matches!(
            ImageView::new(&data, 0, 4),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            ImageView::new(&data, 4, 0),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_view_rejects_short_buffer() {
        let data = vec![1.0f32; 11];
        assert_eq!(
            ImageView::new(&data, 4, 3).unwrap_err(),
            Error::BufferTooSmall {
                required: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_view_truncates_long_buffer() {
        let data: Vec<f32> = (0..20).map(|i| i as f32).collect();
        let view = ImageView::new(&data, 2, 2).unwrap();
        assert_eq!(view.data(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_view_row_major() {
        let data: Vec<f32> = (0..6).map(|i| i as f32).collect();
        let view = ImageView::new(&data, 3, 2).unwrap();
        assert_eq!(view.pixel(0, 1), 3.0);
        assert_eq!(view.pixel(2, 0), 2.0);
        assert_eq!(view.row(1), &[3.0, 4.0, 5.0]);
        assert_eq!(view.get_pixel(3, 0), None);
        assert_eq!(view.get_pixel(0, 2), None);
    }

    #[test]
    fn test_view_min_max() {
        let data = [3.5, -1.25, 8.0, 0.0];
        let (lo, hi) = ImageView::new(&data, 2, 2).unwrap().min_max();
        assert_relative_eq!(lo, -1.25);
        assert_relative_eq!(hi, 8.0);
    }

    #[test]
    fn test_view_mut() {
        let mut data = vec![0.0f32; 6];
        {
            let mut view = ImageViewMut::new(&mut data, 3, 2).unwrap();
            view.fill(2.0);
            view.set_pixel(1, 0, 5.0);
            view.row_mut(1)[2] = 7.0;
            assert_eq!(view.as_view().pixel(1, 0), 5.0);
        }
        assert_eq!(data, vec![2.0, 5.0, 2.0, 2.0, 2.0, 7.0]);
    }

    #[test]
    #[should_panic]
    fn test_view_pixel_out_of_bounds_panics() {
        let data = [0.0f32; 4];
        let view = ImageView::new(&data, 2, 2).unwrap();
        let _ = view.pixel(2, 0);
    }
}
