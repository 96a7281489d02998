//! Clamped pixel lookup.
//!
//! All sampling filters read the input through [`PixelAccessor`], which
//! replicates edge pixels for out-of-range coordinates. A tap at `(-5, -5)`
//! reads the top-left corner, a tap past the last column reads the last
//! column, and so on. There is no error path: any image of at least 1x1
//! answers every coordinate.

use upscale_core::ImageView;

/// Clamps a signed index into `[0, len - 1]`.
///
/// `len` must be at least 1.
#[inline]
pub fn clamp_index(i: isize, len: u32) -> usize {
    debug_assert!(len > 0);
    if i < 0 {
        0
    } else {
        (i as usize).min(len as usize - 1)
    }
}

/// Edge-replicating reader over an input image.
#[derive(Debug, Clone, Copy)]
pub struct PixelAccessor<'a> {
    image: ImageView<'a>,
}

impl<'a> PixelAccessor<'a> {
    /// Wraps an input image.
    #[inline]
    pub fn new(image: ImageView<'a>) -> Self {
        Self { image }
    }

    /// Input width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Input height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The wrapped image.
    #[inline]
    pub fn image(&self) -> ImageView<'a> {
        self.image
    }

    /// Returns the sample at `(x, y)` with both coordinates clamped to the image.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upscale_core::ImageView;
    /// use upscale_ops::PixelAccessor;
    ///
    /// let data = [1.0, 2.0, 3.0, 4.0];
    /// let px = PixelAccessor::new(ImageView::new(&data, 2, 2).unwrap());
    /// assert_eq!(px.get(-5, -5), 1.0);
    /// assert_eq!(px.get(2, 2), 4.0);
    /// assert_eq!(px.get(7, -1), 2.0);
    /// ```
    #[inline]
    pub fn get(&self, x: isize, y: isize) -> f32 {
        let cx = clamp_index(x, self.image.width());
        let cy = clamp_index(y, self.image.height());
        self.image.data()[cy * self.image.width() as usize + cx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> Vec<f32> {
        (0..width * height).map(|i| i as f32).collect()
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-3, 5), 0);
        assert_eq!(clamp_index(-1, 5), 0);
        assert_eq!(clamp_index(0, 5), 0);
        assert_eq!(clamp_index(4, 5), 4);
        assert_eq!(clamp_index(5, 5), 4);
        assert_eq!(clamp_index(isize::MAX, 5), 4);
        assert_eq!(clamp_index(7, 1), 0);
    }

    #[test]
    fn test_inside_reads_row_major() {
        let data = ramp(4, 3);
        let px = PixelAccessor::new(ImageView::new(&data, 4, 3).unwrap());
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(px.get(x, y), (y * 4 + x) as f32);
            }
        }
    }

    #[test]
    fn test_edges_replicate() {
        let data = ramp(4, 3);
        let px = PixelAccessor::new(ImageView::new(&data, 4, 3).unwrap());

        assert_eq!(px.get(-5, -5), px.get(0, 0));
        assert_eq!(px.get(4, 3), px.get(3, 2));
        assert_eq!(px.get(-1, 1), px.get(0, 1));
        assert_eq!(px.get(2, 99), px.get(2, 2));
        assert_eq!(px.get(100, -100), px.get(3, 0));
    }

    #[test]
    fn test_single_pixel_image() {
        let data = [42.0f32];
        let px = PixelAccessor::new(ImageView::new(&data, 1, 1).unwrap());
        for (x, y) in [(-1, -1), (0, 0), (1, 0), (0, 1), (9, 9)] {
            assert_eq!(px.get(x, y), 42.0);
        }
    }
}
