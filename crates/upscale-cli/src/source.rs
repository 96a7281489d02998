//! Synthetic input frames.
//!
//! Stand-ins for a sensor readout so the resampler can be exercised
//! without hardware. Values are in degrees Celsius-like units.

use std::str::FromStr;

use anyhow::{bail, Result};

/// Synthetic frame generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    /// Diagonal ramp from 0 at the top-left to 1 at the bottom-right.
    Gradient,
    /// Alternating 0 / 1 cells, one pixel each.
    Checker,
    /// Ambient 20 with a warm blob (35 at the peak) off-centre.
    Hotspot,
    /// Every sample set to one value.
    Constant(f32),
}

impl Pattern {
    /// Parses a pattern name; `value` is used by `constant`.
    pub fn parse(name: &str, value: f32) -> Result<Self> {
        Ok(match name.parse::<PatternName>()? {
            PatternName::Gradient => Pattern::Gradient,
            PatternName::Checker => Pattern::Checker,
            PatternName::Hotspot => Pattern::Hotspot,
            PatternName::Constant => Pattern::Constant(value),
        })
    }

    /// Renders a `width x height` frame.
    pub fn generate(&self, width: u32, height: u32) -> Vec<f32> {
        let span = ((width - 1) + (height - 1)).max(1) as f32;
        // peak at one third of the frame, spread over a quarter of it
        let (cx, cy) = (width as f32 / 3.0, height as f32 / 3.0);
        let sigma = (width.max(height) as f32 / 4.0).max(0.5);

        let mut out = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let v = match self {
                    Pattern::Gradient => (x + y) as f32 / span,
                    Pattern::Checker => ((x + y) % 2) as f32,
                    Pattern::Hotspot => {
                        let d2 = (x as f32 - cx).powi(2) + (y as f32 - cy).powi(2);
                        20.0 + 15.0 * (-d2 / (2.0 * sigma * sigma)).exp()
                    }
                    Pattern::Constant(c) => *c,
                };
                out.push(v);
            }
        }
        out
    }
}

enum PatternName {
    Gradient,
    Checker,
    Hotspot,
    Constant,
}

impl FromStr for PatternName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "gradient" | "ramp" => Ok(Self::Gradient),
            "checker" | "checkerboard" => Ok(Self::Checker),
            "hotspot" | "thermal" => Ok(Self::Hotspot),
            "constant" | "flat" => Ok(Self::Constant),
            _ => bail!("Unknown pattern '{s}' (expected gradient, checker, hotspot, constant)"),
        }
    }
}

/// A frame ready to bind as resampler input.
#[derive(Debug, Clone)]
pub struct Frame {
    pub data: Vec<f32>,
    pub width: u32,
    pub height: u32,
}

impl Frame {
    /// Wraps explicit samples, checking the count against the size.
    pub fn from_values(values: Vec<f32>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if values.len() != expected {
            bail!(
                "Expected {} samples for a {}x{} frame, got {}",
                expected,
                width,
                height,
                values.len()
            );
        }
        Ok(Self {
            data: values,
            width,
            height,
        })
    }

    /// Renders a synthetic frame.
    pub fn from_pattern(pattern: Pattern, width: u32, height: u32) -> Self {
        Self {
            data: pattern.generate(width, height),
            width,
            height,
        }
    }
}
