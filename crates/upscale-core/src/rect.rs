//! Rectangle type for partial output requests.
//!
//! A [`Rect`] describes a region of the *output* coordinate space. The
//! resampler fills such regions into small caller-supplied buffers, which is
//! how a memory-constrained consumer streams a large upscaled image tile by
//! tile.
//!
//! # Coordinate System
//!
//! All coordinates use the standard image convention:
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right
//! - Y increases downward
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Output  │
//!   │   │  Tile    │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use upscale_core::Rect;
//!
//! let tile = Rect::new(32, 0, 32, 24);
//! assert!(tile.contains(40, 10));
//! assert!(Rect::from_size(320, 240).contains_rect(&tile));
//! ```

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// # Invariants
///
/// - A rectangle with zero width or height is considered empty
/// - [`right`](Rect::right) and [`bottom`](Rect::bottom) use `u32` arithmetic; callers keep
///   `x + width` and `y + height` within `u32`
///
/// # Example
///
/// ```rust
/// use upscale_core::Rect;
///
/// let rect = Rect::new(10, 20, 100, 50);
/// assert_eq!(rect.right(), 110);
/// assert_eq!(rect.bottom(), 70);
/// assert_eq!(rect.area(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use upscale_core::Rect;
    ///
    /// let rect = Rect::from_size(320, 240);
    /// assert_eq!((rect.x, rect.y), (0, 0));
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the X coordinate of the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// Inclusive on the left/top edges, exclusive on the right/bottom edges.
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if this rectangle fully contains another.
    ///
    /// Uses widened arithmetic so that a request whose far edge overflows
    /// `u32` is rejected instead of wrapping.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x as u64 + other.width as u64 <= self.x as u64 + self.width as u64
            && other.y as u64 + other.height as u64 <= self.y as u64 + self.height as u64
    }

    /// Output-space coordinates covered by this rectangle, in the same
    /// row-major order a region buffer is laid out in.
    ///
    /// ```rust
    /// use upscale_core::Rect;
    ///
    /// let rect = Rect::new(1, 1, 2, 2);
    /// let coords: Vec<_> = rect.iter_coords().collect();
    /// assert_eq!(coords, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    /// ```
    #[inline]
    pub fn iter_coords(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| (x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.area(), 5000);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10, 10, 100, 100);
        assert!(r.contains(10, 10));
        assert!(r.contains(109, 109));
        assert!(!r.contains(110, 110));
        assert!(!r.contains(5, 50));
    }

    #[test]
    fn test_rect_contains_rect() {
        let out = Rect::from_size(64, 48);
        assert!(out.contains_rect(&Rect::new(0, 0, 64, 48)));
        assert!(out.contains_rect(&Rect::new(60, 40, 4, 8)));
        assert!(!out.contains_rect(&Rect::new(60, 40, 5, 8)));
        assert!(!out.contains_rect(&Rect::new(u32::MAX, 0, 2, 1)));
    }

    #[test]
    fn test_rect_empty() {
        assert!(Rect::new(3, 3, 0, 5).is_empty());
        assert!(!Rect::new(3, 3, 1, 1).is_empty());
        assert_eq!(Rect::new(3, 3, 0, 5).iter_coords().count(), 0);
    }

    #[test]
    fn test_rect_display() {
        assert_eq!(Rect::new(16, 8, 32, 24).to_string(), "32x24+16+8");
    }
}
