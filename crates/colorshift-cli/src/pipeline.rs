//! Decode, transform, encode.

use crate::config::ConvertConfig;
use crate::error::{PipelineError, PipelineResult};
use colorshift_color::Engine;
use colorshift_core::Raster;
use colorshift_io::{OutputFormat, output_path};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Runs one conversion job and returns the path written.
///
/// The output goes next to the input as `<stem>_<suffix><ext>`, in the same
/// container. The encoder is picked before anything is decoded, so an
/// unsupported extension fails without touching the filesystem.
pub fn run(config: &ConvertConfig) -> PipelineResult<PathBuf> {
    trace!(?config, "pipeline::run");
    config.validate()?;

    let out_path = output_path(&config.input, config.resolved_suffix());
    let format = OutputFormat::from_path(&out_path).map_err(|source| PipelineError::Encode {
        path: out_path.clone(),
        source,
    })?;

    let src = colorshift_io::decode(&config.input).map_err(|source| PipelineError::Decode {
        path: config.input.clone(),
        source,
    })?;

    let started = Instant::now();
    let dst = transform(config, &src)?;
    let elapsed = started.elapsed();
    info!(
        transform = %config.transform,
        width = dst.width(),
        height = dst.height(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "conversion finished"
    );

    colorshift_io::encode(&dst, &out_path, format).map_err(|source| PipelineError::Encode {
        path: out_path.clone(),
        source,
    })?;
    Ok(out_path)
}

/// Applies the job's transform, on a dedicated pool when `threads > 0`.
fn transform(config: &ConvertConfig, src: &Raster) -> PipelineResult<Raster> {
    let engine = Engine::new(config.quantization);
    let apply = || {
        engine
            .apply(config.transform, src)
            .map_err(|source| PipelineError::Transform {
                transform: config.transform,
                source,
            })
    };

    if config.threads == 0 {
        return apply();
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    debug!(threads = config.threads, "using dedicated thread pool");
    pool.install(apply)
}
