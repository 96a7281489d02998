//! upscale - resample single-channel float frames
//!
//! Drives `upscale-ops` from the command line: synthetic sensor frames,
//! full or tiled resizes, and a tile/full equivalence check.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod preview;
mod source;

#[derive(Parser)]
#[command(name = "upscale")]
#[command(author, version, about = "Upscale single-channel float frames")]
#[command(long_about = "
Resamples a small single-channel float frame (for example an 8x8 thermal
sensor reading) to display resolution with nearest, bilinear or bicubic
sampling. Output can be produced tile by tile through a bounded buffer.

Examples:
  upscale resize -W 320 -H 240                       # 8x8 hotspot frame to 320x240
  upscale resize --values 0,10,20,30 -s 2x2 -W 3 -H 3 -f bilinear --grid corners
  upscale resize --pattern checker --scale 8 --tile 64x16 --preview 64x24
  upscale verify -s 32x24 -W 320 -H 240 --tile 40x8
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads for --parallel (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Resize a frame and print statistics
    #[command(visible_alias = "r")]
    Resize(ResizeArgs),

    /// Check that tiled output equals a full resize for every filter
    #[command(visible_alias = "v")]
    Verify(VerifyArgs),
}

/// Where the input frame comes from.
#[derive(Args)]
struct SourceArgs {
    /// Synthetic pattern: gradient, checker, hotspot, constant
    #[arg(short, long, default_value = "hotspot")]
    pattern: String,

    /// Sample value for the constant pattern
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    value: f32,

    /// Explicit row-major samples, comma separated (overrides --pattern)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<f32>>,

    /// Source frame size WxH
    #[arg(short = 's', long, default_value = "8x8")]
    size: String,
}

/// Arguments for the `resize` command.
#[derive(Args)]
struct ResizeArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Target width
    #[arg(short = 'W', long)]
    width: Option<u32>,

    /// Target height
    #[arg(short = 'H', long)]
    height: Option<u32>,

    /// Scale factor (e.g. 4, 12.5)
    #[arg(long)]
    scale: Option<f32>,

    /// Fit inside a WxH box, keeping the aspect ratio
    #[arg(long)]
    fit: Option<String>,

    /// Filter: nearest, bilinear, bicubic
    #[arg(short, long, default_value = "bicubic")]
    filter: String,

    /// Sample grid: extent, corners
    #[arg(short, long, default_value = "extent")]
    grid: String,

    /// Produce the output in WxH tiles through one tile-sized buffer
    #[arg(short, long)]
    tile: Option<String>,

    /// Fill rows on the rayon pool (ignored with --tile)
    #[arg(long)]
    parallel: bool,

    /// Print an ASCII shade map of the frame at COLSxROWS
    #[arg(long, num_args = 0..=1, default_missing_value = "64x24")]
    preview: Option<String>,
}

/// Arguments for the `verify` command.
#[derive(Args)]
struct VerifyArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Target width
    #[arg(short = 'W', long, default_value = "320")]
    width: u32,

    /// Target height
    #[arg(short = 'H', long, default_value = "240")]
    height: u32,

    /// Tile size WxH
    #[arg(short, long, default_value = "32x32")]
    tile: String,

    /// Sample grid: extent, corners
    #[arg(short, long, default_value = "extent")]
    grid: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Resize(args) => commands::resize::run(args, cli.verbose),
        Commands::Verify(args) => commands::verify::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resize() {
        let cli = Cli::try_parse_from([
            "upscale", "resize", "--values", "0,-10,20,30", "-s", "2x2", "-W", "3", "-H", "3",
            "-f", "bilinear", "--preview",
        ])
        .unwrap();
        let Commands::Resize(args) = cli.command else {
            panic!("expected resize");
        };
        assert_eq!(args.source.values, Some(vec![0.0, -10.0, 20.0, 30.0]));
        assert_eq!(args.width, Some(3));
        assert_eq!(args.preview.as_deref(), Some("64x24"));
    }

    #[test]
    fn test_parse_verify_defaults() {
        let cli = Cli::try_parse_from(["upscale", "-vv", "verify"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Verify(args) = cli.command else {
            panic!("expected verify");
        };
        assert_eq!((args.width, args.height), (320, 240));
        assert_eq!(args.tile, "32x32");
        assert_eq!(args.source.size, "8x8");
    }
}
