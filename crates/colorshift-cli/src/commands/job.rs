//! YAML job files.

use crate::JobArgs;
use anyhow::{Context, Result};
use colorshift_cli::ConvertConfig;
use tracing::{debug, trace};

/// Runs the job command. A nonzero `-j` overrides the file's `threads`.
pub fn run(args: JobArgs, threads: usize) -> Result<()> {
    trace!(file = %args.file.display(), "job::run");

    let mut config = ConvertConfig::from_yaml_file(&args.file)
        .with_context(|| format!("Failed to load job: {}", args.file.display()))?;
    if threads > 0 {
        debug!(from = config.threads, to = threads, "thread count overridden");
        config.threads = threads;
    }
    super::run_job(&config)
}
