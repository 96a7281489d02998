//! Verify command
//!
//! Resizes the frame once into a full buffer and once tile by tile, then
//! compares the two bit for bit for every filter.

use crate::VerifyArgs;
use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use upscale_ops::{Filter, Rect, Resampler, SampleGrid, TileGrid};

pub fn run(args: VerifyArgs, verbose: u8) -> Result<()> {
    let frame = super::load_frame(&args.source)?;
    let (tile_w, tile_h) = super::parse_size(&args.tile)?;
    let grid: SampleGrid = args.grid.parse()?;

    if verbose > 0 {
        println!(
            "Verifying {}x{} -> {}x{} in {}x{} tiles ({} grid)",
            frame.width, frame.height, args.width, args.height, tile_w, tile_h, grid
        );
    }

    let mut failed = 0;
    for filter in Filter::ALL {
        let mismatches = compare(
            &frame.data,
            (frame.width, frame.height),
            (args.width, args.height),
            (tile_w, tile_h),
            filter,
            grid,
        )?;
        if mismatches == 0 {
            println!("  {:<8} ok", filter.name());
        } else {
            println!("  {:<8} {} samples differ", filter.name(), mismatches);
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("FAIL: tiled output differs from full resize for {} filter(s)", failed);
    }
    info!("Tiled output matches full resize");
    Ok(())
}

/// Counts samples where the tiled result is not bit-identical to the full one.
fn compare(
    src: &[f32],
    (src_w, src_h): (u32, u32),
    (dst_w, dst_h): (u32, u32),
    (tile_w, tile_h): (u32, u32),
    filter: Filter,
    grid: SampleGrid,
) -> Result<usize> {
    let mut full = vec![0.0f32; dst_w as usize * dst_h as usize];
    {
        let mut rs = Resampler::with_grid(grid);
        rs.bind_input(src, src_w, src_h)?;
        rs.bind_output(&mut full, dst_w, dst_h)
            .with_context(|| format!("Cannot resize to {dst_w}x{dst_h}"))?;
        rs.resize_full(filter)?;
    }

    let tiles = TileGrid::new(dst_w, dst_h, tile_w, tile_h)?;
    let mut scratch = vec![0.0f32; tiles.max_tile_pixels()];
    let mut rs = Resampler::with_grid(grid);
    rs.bind_input(src, src_w, src_h)?;
    rs.bind_output_size(dst_w, dst_h)?;

    let mut mismatches = 0;
    rs.resize_tiled(&mut scratch, tile_w, tile_h, filter, |rect: Rect, samples| {
        for (i, (x, y)) in rect.iter_coords().enumerate() {
            let expected = full[y as usize * dst_w as usize + x as usize];
            if samples[i].to_bits() != expected.to_bits() {
                mismatches += 1;
            }
        }
        Ok::<(), anyhow::Error>(())
    })?;

    debug!(%filter, mismatches, tiles = tiles.len(), "Compared");
    Ok(mismatches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_clean() {
        let src: Vec<f32> = (0..24).map(|i| ((i * 7) % 11) as f32).collect();
        for filter in Filter::ALL {
            for grid in [SampleGrid::Extent, SampleGrid::Corners] {
                let diff = compare(&src, (6, 4), (37, 23), (5, 7), filter, grid).unwrap();
                assert_eq!(diff, 0, "{filter} {grid}");
            }
        }
    }

    #[test]
    fn test_compare_rejects_degenerate() {
        let src = [1.0f32; 4];
        assert!(compare(&src, (2, 2), (1, 8), (4, 4), Filter::Bilinear, SampleGrid::Extent).is_err());
    }
}
