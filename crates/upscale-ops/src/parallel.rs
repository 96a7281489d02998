//! Parallel resize using Rayon.
//!
//! Splits the destination into rows and fills them on the Rayon pool. Each
//! row runs the same per-pixel arithmetic as the serial driver, so results
//! are bit-identical to [`Resampler::resize_full`] and
//! [`Resampler::resize_region`].
//!
//! # Example
//!
//! ```rust
//! use upscale_ops::{parallel, Filter, Resampler};
//!
//! let frame = vec![0.5f32; 8 * 8];
//! let mut out = vec![0.0f32; 320 * 240];
//! let mut rs = Resampler::new();
//! rs.bind_input(&frame, 8, 8).unwrap();
//! rs.bind_output(&mut out, 320, 240).unwrap();
//! parallel::resize_full_par(&mut rs, Filter::Bicubic).unwrap();
//! ```

use rayon::prelude::*;
use tracing::trace;
use upscale_core::{Rect, Result};

use crate::filter::Filter;
use crate::resampler::{RegionJob, Resampler};

/// Parallel [`Resampler::resize_full`].
pub fn resize_full_par(resampler: &mut Resampler<'_>, filter: Filter) -> Result<()> {
    let job = resampler.prepare_full(filter)?;
    trace!(width = job.region.width, height = job.region.height, %filter, "resize_full_par");
    fill_par(&job, resampler.output_data_mut()?);
    Ok(())
}

/// Parallel [`Resampler::resize_region`].
pub fn resize_region_par(
    resampler: &Resampler<'_>,
    dest: &mut [f32],
    region: Rect,
    filter: Filter,
) -> Result<()> {
    let job = resampler.prepare_region(region, dest.len(), filter)?;
    trace!(%region, %filter, "resize_region_par");
    fill_par(&job, dest);
    Ok(())
}

fn fill_par(job: &RegionJob<'_>, dest: &mut [f32]) {
    let width = job.region.width as usize;
    let len = width * job.region.height as usize;
    dest[..len]
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row_index, row)| job.fill_row(row_index, row));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> Vec<f32> {
        (0..64).map(|i| ((i * 37) % 11) as f32 - 3.0).collect()
    }

    #[test]
    fn test_full_par_matches_serial() {
        let input = frame();
        for filter in Filter::ALL {
            let mut serial = vec![0.0f32; 50 * 30];
            let mut par = vec![0.0f32; 50 * 30];
            {
                let mut rs = Resampler::new();
                rs.bind_input(&input, 8, 8).unwrap();
                rs.bind_output(&mut serial, 50, 30).unwrap();
                rs.resize_full(filter).unwrap();
            }
            {
                let mut rs = Resampler::new();
                rs.bind_input(&input, 8, 8).unwrap();
                rs.bind_output(&mut par, 50, 30).unwrap();
                resize_full_par(&mut rs, filter).unwrap();
            }
            assert_eq!(serial, par, "{filter}");
        }
    }

    #[test]
    fn test_region_par_matches_serial() {
        let input = frame();
        let mut rs = Resampler::new();
        rs.bind_input(&input, 8, 8).unwrap();
        rs.bind_output_size(40, 40).unwrap();

        let region = Rect::new(7, 11, 13, 9);
        let mut serial = vec![0.0f32; 13 * 9];
        let mut par = vec![0.0f32; 13 * 9];
        rs.resize_region(&mut serial, region, Filter::Bicubic).unwrap();
        resize_region_par(&rs, &mut par, region, Filter::Bicubic).unwrap();
        assert_eq!(serial, par);
    }

    #[test]
    fn test_region_par_validates() {
        let input = frame();
        let mut rs = Resampler::new();
        rs.bind_input(&input, 8, 8).unwrap();
        rs.bind_output_size(16, 16).unwrap();
        let mut dest = vec![0.0f32; 4];
        assert!(resize_region_par(&rs, &mut dest, Rect::new(0, 0, 4, 4), Filter::Nearest).is_err());
    }
}
