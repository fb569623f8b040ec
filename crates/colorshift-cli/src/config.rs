//! Conversion job description.
//!
//! A job names one input file and one transform. In YAML:
//!
//! ```yaml
//! input: shots/plate.png
//! transform: rgb-to-hls
//! suffix: HLS        # optional, defaults to the transform's suffix
//! quantization: nearest  # optional, truncate | nearest
//! threads: 4         # optional, 0 = all cores
//! ```

use crate::error::{PipelineError, PipelineResult};
use colorshift_color::TransformKind;
use colorshift_core::Quantization;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// One input file, one transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    /// Source image (JPEG or PNG).
    pub input: PathBuf,
    /// Transform to apply.
    pub transform: TransformKind,
    /// Output filename suffix; `None` uses [`TransformKind::suffix`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Channel quantization policy.
    #[serde(default)]
    pub quantization: Quantization,
    /// Worker threads, 0 for rayon's default.
    #[serde(default)]
    pub threads: usize,
}

impl ConvertConfig {
    /// Job with default suffix, quantization and thread count.
    pub fn new(input: impl Into<PathBuf>, transform: TransformKind) -> Self {
        Self {
            input: input.into(),
            transform,
            suffix: None,
            quantization: Quantization::default(),
            threads: 0,
        }
    }

    /// Suffix actually used for the output name.
    pub fn resolved_suffix(&self) -> &str {
        self.suffix.as_deref().unwrap_or(self.transform.suffix())
    }

    /// Rejects suffixes that would escape the input's directory or vanish.
    pub fn validate(&self) -> PipelineResult<()> {
        let suffix = self.resolved_suffix();
        if suffix.is_empty() {
            return Err(PipelineError::Config("suffix must not be empty".into()));
        }
        if suffix.contains(['/', '\\']) {
            return Err(PipelineError::Config(format!(
                "suffix '{suffix}' must not contain path separators"
            )));
        }
        Ok(())
    }

    /// Parses a YAML job.
    pub fn from_yaml_str(yaml: &str) -> PipelineResult<Self> {
        trace!(bytes = yaml.len(), "ConvertConfig::from_yaml_str");
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| PipelineError::Config(e.to_string()))?;
        config.validate()?;
        debug!(input = %config.input.display(), transform = %config.transform, "job parsed");
        Ok(config)
    }

    /// Loads a YAML job file. A relative `input` is resolved against the
    /// job file's directory.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::Config(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_yaml_str(&text)
            .map_err(|e| PipelineError::Config(format!("{}: {e}", path.display())))?;
        if config.input.is_relative() {
            if let Some(dir) = path.parent() {
                config.input = dir.join(&config.input);
            }
        }
        Ok(config)
    }

    /// Serializes back to YAML.
    pub fn to_yaml_string(&self) -> PipelineResult<String> {
        serde_yaml::to_string(self).map_err(|e| PipelineError::Config(e.to_string()))
    }
}
