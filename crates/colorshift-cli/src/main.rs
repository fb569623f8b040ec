//! colorshift - per-pixel colorspace conversion for JPEG and PNG files

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colorshift_color::TransformKind;
use colorshift_core::Quantization;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "colorshift")]
#[command(author, version, about = "Per-pixel colorspace conversion for JPEG and PNG")]
#[command(long_about = "
Applies one colorspace transform to every pixel of an image and writes the
result next to the input as <stem>_<suffix><ext>.

Examples:
  colorshift convert photo.jpg -t rgb-to-hsv        # writes photo_HSV.jpg
  colorshift convert plate.png -t gray -s luma      # writes plate_luma.png
  colorshift convert plate.png -t hls -q nearest
  colorshift job jobs/grade.yaml
  colorshift list
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one image
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Run a YAML job file
    Job(JobArgs),

    /// List transforms and their output suffixes
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image (JPEG or PNG)
    input: PathBuf,

    /// Transform name or suffix (see `colorshift list`)
    #[arg(short, long)]
    transform: TransformKind,

    /// Output suffix (default: the transform's)
    #[arg(short, long)]
    suffix: Option<String>,

    /// Channel quantization: truncate or nearest
    #[arg(short, long, default_value = "truncate")]
    quantization: Quantization,
}

#[derive(Args)]
struct JobArgs {
    /// Job description
    file: PathBuf,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.threads),
        Commands::Job(args) => commands::job::run(args, cli.threads),
        Commands::List => commands::list::run(),
    }
}
