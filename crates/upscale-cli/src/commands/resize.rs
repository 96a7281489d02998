//! Resize command
//!
//! Resamples a frame to the target size, either into one full buffer or
//! tile by tile through a single tile-sized scratch buffer.

use crate::ResizeArgs;
use anyhow::{bail, Context, Result};
use tracing::{debug, info, trace};
use upscale_ops::{fit_dimensions, scale_dimensions, Filter, Resampler, SampleGrid, TileGrid};

use super::Stats;

pub fn run(args: ResizeArgs, verbose: u8) -> Result<()> {
    let frame = super::load_frame(&args.source)?;
    let (src_w, src_h) = (frame.width, frame.height);

    // Determine target dimensions
    let (dst_w, dst_h) = match (args.width, args.height, args.scale, args.fit.as_deref()) {
        (Some(w), Some(h), _, _) => (w, h),
        (Some(w), None, _, _) => {
            let h = (src_h as f32 * w as f32 / src_w as f32).round() as u32;
            (w, h.max(1))
        }
        (None, Some(h), _, _) => {
            let w = (src_w as f32 * h as f32 / src_h as f32).round() as u32;
            (w.max(1), h)
        }
        (None, None, Some(s), _) => {
            if !(s.is_finite() && s > 0.0) {
                bail!("Scale must be a positive number, got {s}");
            }
            scale_dimensions(src_w, src_h, s)
        }
        (None, None, None, Some(fit)) => {
            let (max_w, max_h) = super::parse_size(fit)?;
            fit_dimensions(src_w, src_h, max_w, max_h)
        }
        _ => bail!("Specify --width, --height, --scale, or --fit"),
    };

    let filter: Filter = args.filter.parse()?;
    let grid: SampleGrid = args.grid.parse()?;

    if verbose > 0 {
        println!("Resizing {}x{} -> {}x{} ({}, {} grid)", src_w, src_h, dst_w, dst_h, filter, grid);
    }
    info!(src_w, src_h, dst_w, dst_h, %filter, %grid, "Resize");

    let stats = match args.tile.as_deref() {
        Some(tile) => {
            if args.parallel {
                debug!("--parallel has no effect on tiled output");
            }
            resize_tiled(&frame.data, (src_w, src_h), (dst_w, dst_h), tile, filter, grid)?
        }
        None => resize_full(&frame.data, (src_w, src_h), (dst_w, dst_h), filter, grid, args.parallel)?,
    };

    println!("Output {}x{}: {} samples", dst_w, dst_h, stats.count());
    println!("  Min:  {:.4}", stats.min);
    println!("  Max:  {:.4}", stats.max);
    println!("  Mean: {:.4}", stats.mean());

    if let Some(ref size) = args.preview {
        super::print_preview(&frame, size, filter, grid)?;
    }

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}

fn resize_full(
    src: &[f32],
    (src_w, src_h): (u32, u32),
    (dst_w, dst_h): (u32, u32),
    filter: Filter,
    grid: SampleGrid,
    parallel: bool,
) -> Result<Stats> {
    let mut dst = vec![0.0f32; dst_w as usize * dst_h as usize];
    let mut rs = Resampler::with_grid(grid);
    rs.bind_input(src, src_w, src_h)?;
    rs.bind_output(&mut dst, dst_w, dst_h)
        .with_context(|| format!("Cannot resize to {dst_w}x{dst_h}"))?;

    if parallel {
        debug!(threads = rayon::current_num_threads(), "Parallel resize");
        upscale_ops::parallel::resize_full_par(&mut rs, filter)?;
    } else {
        rs.resize_full(filter)?;
    }

    let view = rs.output().context("Output not bound")?;
    let mut stats = Stats::default();
    stats.push_slice(view.data());
    Ok(stats)
}

fn resize_tiled(
    src: &[f32],
    (src_w, src_h): (u32, u32),
    (dst_w, dst_h): (u32, u32),
    tile: &str,
    filter: Filter,
    grid: SampleGrid,
) -> Result<Stats> {
    let (tile_w, tile_h) = super::parse_size(tile)?;
    let tiles = TileGrid::new(dst_w, dst_h, tile_w, tile_h)?;
    let mut scratch = vec![0.0f32; tiles.max_tile_pixels()];
    debug!(tiles = tiles.len(), scratch = scratch.len(), "Tile plan");

    let mut rs = Resampler::with_grid(grid);
    rs.bind_input(src, src_w, src_h)?;
    rs.bind_output_size(dst_w, dst_h)
        .with_context(|| format!("Cannot resize to {dst_w}x{dst_h}"))?;

    let mut stats = Stats::default();
    rs.resize_tiled(&mut scratch, tile_w, tile_h, filter, |rect, samples| {
        trace!(%rect, "Tile done");
        stats.push_slice(samples);
        Ok::<(), anyhow::Error>(())
    })?;
    Ok(stats)
}
