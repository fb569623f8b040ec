//! CLI command implementations

pub mod convert;
pub mod job;
pub mod list;

use anyhow::{Context, Result};
use colorshift_cli::ConvertConfig;

/// Runs a job, attaching the input path to any failure.
pub fn run_job(config: &ConvertConfig) -> Result<()> {
    let out = colorshift_cli::run(config)
        .with_context(|| format!("Failed to convert: {}", config.input.display()))?;
    println!("{}", out.display());
    Ok(())
}
