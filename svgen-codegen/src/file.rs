//! Writing rendered source text to disk.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to write a generated source file.
///
/// Open-time failures are classified so callers can report them precisely;
/// the caller decides whether a failure is fatal.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("output path not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("permission denied writing {path}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmitError {
    fn classify(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}

/// Write rendered source text to `path`, creating parent directories.
pub fn write_source(path: impl AsRef<Path>, content: &str) -> Result<(), EmitError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| EmitError::classify(path, e))?;
    }
    std::fs::write(path, content).map_err(|e| EmitError::classify(path, e))
}
