//! ASCII shade-map preview.
//!
//! The terminal stands in for the TFT: the frame is resampled straight to
//! the character grid, then each sample is mapped to a glyph by brightness.

use upscale_core::ImageView;

const RAMP: &[u8] = b" .:-=+*#%@";

/// Maps `value` in `[lo, hi]` to a glyph; out-of-range values saturate.
pub fn shade(value: f32, lo: f32, hi: f32) -> char {
    let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.0 };
    let idx = (t.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
    RAMP[idx] as char
}

/// Renders `view` line by line, scaled between `lo` and `hi`.
pub fn render(view: &ImageView<'_>, lo: f32, hi: f32) -> String {
    let mut out = String::with_capacity((view.width() as usize + 1) * view.height() as usize);
    for y in 0..view.height() {
        out.extend(view.row(y).iter().map(|&v| shade(v, lo, hi)));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_ends() {
        assert_eq!(shade(0.0, 0.0, 1.0), ' ');
        assert_eq!(shade(1.0, 0.0, 1.0), '@');
        assert_eq!(shade(-4.0, 0.0, 1.0), ' ');
        assert_eq!(shade(9.0, 0.0, 1.0), '@');
    }

    #[test]
    fn test_shade_flat_range() {
        assert_eq!(shade(3.0, 3.0, 3.0), ' ');
    }

    #[test]
    fn test_render_lines() {
        let data = [0.0, 1.0, 1.0, 0.0];
        let view = ImageView::new(&data, 2, 2).unwrap();
        assert_eq!(render(&view, 0.0, 1.0), " @\n@ \n");
    }
}
