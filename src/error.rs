use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures raised while loading the manifest or rewriting a target file.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Cannot find {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("JSON file cannot be parsed {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    /// Map an I/O error on `path`, splitting out the not-found case.
    pub fn from_io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            UpdateError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            UpdateError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            UpdateError::FileNotFound { path }
            | UpdateError::Parse { path, .. }
            | UpdateError::Io { path, .. } => path,
        }
    }
}
