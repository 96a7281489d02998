//! CLI command implementations

pub mod resize;
pub mod verify;

use anyhow::{bail, Context, Result};
use upscale_ops::{Filter, Resampler, SampleGrid};

use crate::preview;
use crate::source::{Frame, Pattern};
use crate::SourceArgs;

/// Parses a `WxH` size such as `320x240`.
pub fn parse_size(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .with_context(|| format!("Invalid size '{s}', expected WxH"))?;
    let w: u32 = w.trim().parse().with_context(|| format!("Invalid width in '{s}'"))?;
    let h: u32 = h.trim().parse().with_context(|| format!("Invalid height in '{s}'"))?;
    if w == 0 || h == 0 {
        bail!("Size '{s}' must be at least 1x1");
    }
    Ok((w, h))
}

/// Builds the input frame from source arguments.
pub fn load_frame(args: &SourceArgs) -> Result<Frame> {
    let (width, height) = parse_size(&args.size)?;
    match &args.values {
        Some(values) => Frame::from_values(values.clone(), width, height),
        None => {
            let pattern = Pattern::parse(&args.pattern, args.value)?;
            Ok(Frame::from_pattern(pattern, width, height))
        }
    }
}

/// Running min / max / mean over streamed samples.
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub min: f32,
    pub max: f32,
    sum: f64,
    count: usize,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
            sum: 0.0,
            count: 0,
        }
    }
}

impl Stats {
    pub fn push_slice(&mut self, samples: &[f32]) {
        for &v in samples {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
            self.sum += v as f64;
        }
        self.count += samples.len();
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        if self.count == 0 { 0.0 } else { self.sum / self.count as f64 }
    }
}

/// Prints `frame` resampled to the `COLSxROWS` character grid.
pub fn print_preview(frame: &Frame, size: &str, filter: Filter, grid: SampleGrid) -> Result<()> {
    let (cols, rows) = parse_size(size)?;
    let mut canvas = vec![0.0f32; cols as usize * rows as usize];
    let mut rs = Resampler::with_grid(grid);
    rs.bind_input(&frame.data, frame.width, frame.height)?;
    rs.bind_output(&mut canvas, cols, rows)
        .context("Preview needs at least 2x2 characters")?;
    rs.resize_full(filter)?;

    let view = rs.output().context("Preview output not bound")?;
    let (lo, hi) = view.min_max();
    print!("{}", preview::render(&view, lo, hi));
    Ok(())
}
