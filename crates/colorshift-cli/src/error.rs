//! Pipeline errors, one variant per stage.

use colorshift_color::{ColorError, TransformKind};
use colorshift_io::IoError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a conversion job.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading or decoding the input failed.
    #[error("failed to decode {}", .path.display())]
    Decode {
        /// Input file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: IoError,
    },

    /// Applying the transform failed.
    #[error("transform {transform} failed")]
    Transform {
        /// Transform being applied.
        transform: TransformKind,
        /// Underlying error.
        #[source]
        source: ColorError,
    },

    /// Selecting an encoder or writing the output failed.
    #[error("failed to encode {}", .path.display())]
    Encode {
        /// Output file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: IoError,
    },

    /// The job description is unusable.
    #[error("invalid job: {0}")]
    Config(String),

    /// The worker pool could not be built.
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for conversion jobs.
pub type PipelineResult<T> = Result<T, PipelineError>;
