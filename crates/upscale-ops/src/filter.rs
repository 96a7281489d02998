//! Sampling filters.
//!
//! Three interchangeable strategies turn a position in input pixel space
//! into one output sample:
//!
//! - [`Filter::Nearest`] - Single tap, no interpolation (blocky)
//! - [`Filter::Bilinear`] - 2x2 taps, linear in each axis (smooth, no overshoot)
//! - [`Filter::Bicubic`] - 4x4 taps, Catmull-Rom cubic Hermite in each axis (sharper, may ring)
//!
//! Every tap goes through [`PixelAccessor`], so the image border is handled
//! by edge replication only.
//!
//! A [`Sampler`] binds a filter to an input image and a [`SampleGrid`], and
//! maps normalized `(u, v)` coordinates in `[0, 1]` to samples.
//!
//! # Example
//!
//! ```rust
//! use upscale_core::ImageView;
//! use upscale_ops::{Filter, SampleGrid, Sampler};
//!
//! let data = [0.0, 10.0, 20.0, 30.0];
//! let input = ImageView::new(&data, 2, 2).unwrap();
//! let sampler = Sampler::new(input, Filter::Bilinear, SampleGrid::Corners);
//! assert_eq!(sampler.sample(0.5, 0.5), 15.0);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use upscale_core::ImageView;

use crate::accessor::PixelAccessor;

/// Linear interpolation, `a + t * (b - a)`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Catmull-Rom cubic Hermite through four control points.
///
/// Interpolates between `b` (at `t = 0`) and `c` (at `t = 1`); `a` and `d`
/// only shape the tangents.
///
/// ```text
/// a = -0.5A + 1.5B - 1.5C + 0.5D
/// b =    A  - 2.5B + 2C   - 0.5D
/// c = -0.5A         + 0.5C
/// d = B
/// ```
#[inline]
pub fn cubic_hermite(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let c3 = -0.5 * (a - 3.0 * b + 3.0 * c - d);
    let c2 = a - 2.5 * b + 2.0 * c - 0.5 * d;
    let c1 = -0.5 * a + 0.5 * c;
    let c0 = b;

    ((c3 * t + c2) * t + c1) * t + c0
}

/// Resampling filter for resize operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    /// Nearest-neighbor (fastest, no interpolation).
    Nearest,
    /// Bilinear interpolation (smooth, fast).
    Bilinear,
    /// Bicubic Catmull-Rom interpolation (sharper than bilinear).
    #[default]
    Bicubic,
}

impl Filter {
    /// All filters, cheapest first.
    pub const ALL: [Filter; 3] = [Filter::Nearest, Filter::Bilinear, Filter::Bicubic];

    /// Input samples read per output pixel.
    #[inline]
    pub fn taps(&self) -> usize {
        match self {
            Filter::Nearest => 1,
            Filter::Bilinear => 4,
            Filter::Bicubic => 16,
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Nearest => "nearest",
            Filter::Bilinear => "bilinear",
            Filter::Bicubic => "bicubic",
        }
    }

    /// Samples `pixels` at `(x, y)` given in input pixel space.
    ///
    /// Nearest truncates both coordinates. Bilinear and bicubic split each
    /// coordinate into `floor` and fractional remainder and interpolate the
    /// 2x2 or 4x4 neighbourhood around `(floor(x), floor(y))`, horizontally
    /// first, then vertically.
    #[inline]
    pub fn sample(&self, pixels: &PixelAccessor<'_>, x: f32, y: f32) -> f32 {
        match self {
            Filter::Nearest => pixels.get(x as isize, y as isize),
            Filter::Bilinear => sample_bilinear(pixels, x, y),
            Filter::Bicubic => sample_bicubic(pixels, x, y),
        }
    }
}

#[inline]
fn sample_bilinear(pixels: &PixelAccessor<'_>, x: f32, y: f32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (xi, yi) = (x0 as isize, y0 as isize);

    let top = lerp(pixels.get(xi, yi), pixels.get(xi + 1, yi), fx);
    let bottom = lerp(pixels.get(xi, yi + 1), pixels.get(xi + 1, yi + 1), fx);
    lerp(top, bottom, fy)
}

#[inline]
fn sample_bicubic(pixels: &PixelAccessor<'_>, x: f32, y: f32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (xi, yi) = (x0 as isize, y0 as isize);

    let row = |dy: isize| {
        let yy = yi + dy;
        cubic_hermite(
            pixels.get(xi - 1, yy),
            pixels.get(xi, yy),
            pixels.get(xi + 1, yy),
            pixels.get(xi + 2, yy),
            fx,
        )
    };

    cubic_hermite(row(-1), row(0), row(1), row(2), fy)
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Filter`] or [`SampleGrid`] name fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for Filter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" | "point" => Ok(Filter::Nearest),
            "bilinear" | "linear" => Ok(Filter::Bilinear),
            "bicubic" | "cubic" | "catmull-rom" => Ok(Filter::Bicubic),
            _ => Err(ParseError {
                kind: "filter",
                value: s.to_string(),
                expected: "nearest, bilinear, bicubic",
            }),
        }
    }
}

/// Mapping from normalized output coordinates to input pixel space.
///
/// ```text
/// Extent:  u = 0 ─► x = 0      u = 1 ─► x = width       (first/last tap clamped)
/// Corners: u = 0 ─► x = 0      u = 1 ─► x = width - 1   (corners coincide)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleGrid {
    /// `x = u * width`, nearest truncates. This is the sampling used by the
    /// thermal-camera firmware this crate serves and is the default.
    #[default]
    Extent,
    /// `x = u * (width - 1)`, nearest rounds. Output corners land exactly on
    /// input corners, and equal-size resizes are exact for every filter.
    Corners,
}

impl SampleGrid {
    /// Scale factors from `[0, 1]` to input pixel space for `input`.
    #[inline]
    pub fn scale(&self, input: &ImageView<'_>) -> (f32, f32) {
        match self {
            SampleGrid::Extent => (input.width() as f32, input.height() as f32),
            SampleGrid::Corners => (input.last_col() as f32, input.last_row() as f32),
        }
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            SampleGrid::Extent => "extent",
            SampleGrid::Corners => "corners",
        }
    }
}

impl fmt::Display for SampleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleGrid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "extent" | "edges" => Ok(SampleGrid::Extent),
            "corners" | "align-corners" => Ok(SampleGrid::Corners),
            _ => Err(ParseError {
                kind: "sample grid",
                value: s.to_string(),
                expected: "extent, corners",
            }),
        }
    }
}

/// A filter bound to an input image and a sample grid.
///
/// Cheap to copy; holds only a borrowed view and two scale factors.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    pixels: PixelAccessor<'a>,
    filter: Filter,
    grid: SampleGrid,
    scale_x: f32,
    scale_y: f32,
}

impl<'a> Sampler<'a> {
    /// Creates a sampler over `input`.
    pub fn new(input: ImageView<'a>, filter: Filter, grid: SampleGrid) -> Self {
        let (scale_x, scale_y) = grid.scale(&input);
        Self {
            pixels: PixelAccessor::new(input),
            filter,
            grid,
            scale_x,
            scale_y,
        }
    }

    /// The filter in use.
    #[inline]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The grid in use.
    #[inline]
    pub fn grid(&self) -> SampleGrid {
        self.grid
    }

    /// Samples the input at normalized `(u, v)`, both expected in `[0, 1]`.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let x = u * self.scale_x;
        let y = v * self.scale_y;
        match (self.filter, self.grid) {
            // truncating x + 0.5 rounds to the closest pixel centre
            (Filter::Nearest, SampleGrid::Corners) => self.filter.sample(&self.pixels, x + 0.5, y + 0.5),
            _ => self.filter.sample(&self.pixels, x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const QUAD: [f32; 4] = [0.0, 10.0, 20.0, 30.0];

    fn quad() -> ImageView<'static> {
        ImageView::new(&QUAD, 2, 2).unwrap()
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        assert_relative_eq!(cubic_hermite(3.0, -1.0, 8.0, 2.0, 0.0), -1.0);
        assert_relative_eq!(cubic_hermite(3.0, -1.0, 8.0, 2.0, 1.0), 8.0, epsilon = 1e-5);
    }

    #[test]
    fn test_cubic_hermite_reproduces_lines() {
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_abs_diff_eq!(cubic_hermite(0.0, 1.0, 2.0, 3.0, t), 1.0 + t, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_cubic_hermite_constant() {
        for i in 0..=8 {
            let t = i as f32 / 8.0;
            assert_eq!(cubic_hermite(7.5, 7.5, 7.5, 7.5, t), 7.5);
        }
    }

    #[test]
    fn test_cubic_hermite_undershoots_before_step() {
        // Catmull-Rom rings next to a hard edge: -0.0625 between two zeros
        let v = cubic_hermite(0.0, 0.0, 0.0, 1.0, 0.5);
        assert_relative_eq!(v, -0.0625);
    }

    #[test]
    fn test_filter_metadata() {
        assert_eq!(Filter::default(), Filter::Bicubic);
        assert_eq!(Filter::Nearest.taps(), 1);
        assert_eq!(Filter::Bilinear.taps(), 4);
        assert_eq!(Filter::Bicubic.taps(), 16);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("nearest".parse::<Filter>().unwrap(), Filter::Nearest);
        assert_eq!("Linear".parse::<Filter>().unwrap(), Filter::Bilinear);
        assert_eq!(" cubic ".parse::<Filter>().unwrap(), Filter::Bicubic);
        assert_eq!("catmull-rom".parse::<Filter>().unwrap(), Filter::Bicubic);

        let err = "lanczos".parse::<Filter>().unwrap_err();
        assert!(err.to_string().contains("lanczos"));

        for f in Filter::ALL {
            assert_eq!(f.to_string().parse::<Filter>().unwrap(), f);
        }
    }

    #[test]
    fn test_grid_parse() {
        assert_eq!("extent".parse::<SampleGrid>().unwrap(), SampleGrid::Extent);
        assert_eq!("align-corners".parse::<SampleGrid>().unwrap(), SampleGrid::Corners);
        assert!("middle".parse::<SampleGrid>().is_err());
    }

    #[test]
    fn test_nearest_truncates() {
        let px = PixelAccessor::new(quad());
        assert_eq!(Filter::Nearest.sample(&px, 0.99, 0.2), 0.0);
        assert_eq!(Filter::Nearest.sample(&px, 1.0, 0.2), 10.0);
        assert_eq!(Filter::Nearest.sample(&px, 1.7, 1.9), 30.0);
        assert_eq!(Filter::Nearest.sample(&px, 5.0, 5.0), 30.0);
    }

    #[test]
    fn test_bilinear_blend() {
        let px = PixelAccessor::new(quad());
        assert_eq!(Filter::Bilinear.sample(&px, 0.0, 0.0), 0.0);
        assert_eq!(Filter::Bilinear.sample(&px, 0.5, 0.0), 5.0);
        assert_eq!(Filter::Bilinear.sample(&px, 0.0, 0.5), 10.0);
        assert_eq!(Filter::Bilinear.sample(&px, 0.5, 0.5), 15.0);
        // x and y remainders are independent
        assert_relative_eq!(Filter::Bilinear.sample(&px, 0.25, 0.75), 17.5);
    }

    #[test]
    fn test_bicubic_hits_pixels_at_integer_positions() {
        let data: Vec<f32> = (0..16).map(|i| ((i * 7) % 5) as f32).collect();
        let px = PixelAccessor::new(ImageView::new(&data, 4, 4).unwrap());
        for y in 0..4 {
            for x in 0..4 {
                assert_relative_eq!(
                    Filter::Bicubic.sample(&px, x as f32, y as f32),
                    px.get(x, y),
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn test_bicubic_linear_ramp_interior() {
        // f(x, y) = x + 2y is reproduced away from the clamped border
        let data: Vec<f32> = (0..36).map(|i| (i % 6) as f32 + 2.0 * (i / 6) as f32).collect();
        let px = PixelAccessor::new(ImageView::new(&data, 6, 6).unwrap());
        for (x, y) in [(1.5, 1.5), (2.25, 3.0), (3.75, 2.5)] {
            assert_abs_diff_eq!(Filter::Bicubic.sample(&px, x, y), x + 2.0 * y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_sampler_extent_grid() {
        let sampler = Sampler::new(quad(), Filter::Bilinear, SampleGrid::Extent);
        assert_eq!(sampler.sample(0.0, 0.0), 0.0);
        // 0.5 * width lands on the second column
        assert_eq!(sampler.sample(0.5, 0.5), 30.0);
        assert_eq!(sampler.sample(1.0, 1.0), 30.0);
    }

    #[test]
    fn test_sampler_corners_grid() {
        let sampler = Sampler::new(quad(), Filter::Bilinear, SampleGrid::Corners);
        assert_eq!(sampler.sample(0.0, 0.0), 0.0);
        assert_eq!(sampler.sample(0.5, 0.5), 15.0);
        assert_eq!(sampler.sample(1.0, 0.0), 10.0);
        assert_eq!(sampler.sample(1.0, 1.0), 30.0);
    }

    #[test]
    fn test_sampler_corners_nearest_rounds() {
        let sampler = Sampler::new(quad(), Filter::Nearest, SampleGrid::Corners);
        assert_eq!(sampler.sample(0.49, 0.0), 0.0);
        assert_eq!(sampler.sample(0.51, 0.0), 10.0);
        assert_eq!(sampler.sample(0.0, 0.6), 20.0);
    }
}
