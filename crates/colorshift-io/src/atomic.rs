//! Write-then-rename output.
//!
//! Bytes go to a temporary file next to the target, which is persisted over
//! the target only after everything was written. A dropped temporary file
//! deletes itself.

use crate::IoResult;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, trace};

/// Writes `data` to `path` through a sibling temporary file.
pub fn write(path: &Path, data: &[u8]) -> IoResult<()> {
    trace!(path = %path.display(), bytes = data.len(), "atomic::write");

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), "output persisted");
    Ok(())
}
