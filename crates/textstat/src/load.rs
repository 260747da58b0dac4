//! Reading the analyzed file.

use std::io;
use std::path::{Path, PathBuf};

use textstat_metrics::normalize_newlines;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("No input file given")]
    NoInput,

    #[error("File '{}' not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read `path` as UTF-8 and normalize its line endings to `\n`.
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read input file");
    Ok(normalize_newlines(&raw).into_owned())
}
