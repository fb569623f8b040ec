//! Single-image conversion from command-line arguments.

use crate::ConvertArgs;
use anyhow::Result;
use colorshift_cli::ConvertConfig;
use tracing::trace;

/// Runs the convert command.
pub fn run(args: ConvertArgs, threads: usize) -> Result<()> {
    trace!(input = %args.input.display(), transform = %args.transform, "convert::run");

    let config = ConvertConfig {
        input: args.input,
        transform: args.transform,
        suffix: args.suffix,
        quantization: args.quantization,
        threads,
    };
    super::run_job(&config)
}
