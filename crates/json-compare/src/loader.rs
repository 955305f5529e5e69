//! Load and parse JSON documents from disk.
//!
//! The comparison engine consumes already-parsed values; this module is the
//! boundary where file and parse failures are caught and named before the
//! engine ever runs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Can not find: {}", .path.display())]
    FileNotFound { path: PathBuf },
    #[error("Can not read: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid JSON: {}: {source}", .path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file the failure is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::FileNotFound { path } => path,
            LoadError::Io { path, .. } => path,
            LoadError::InvalidJson { path, .. } => path,
        }
    }
}

/// Read a file and parse it as one JSON document.
///
/// # Errors
///
/// - [`LoadError::FileNotFound`] when the file does not exist
/// - [`LoadError::Io`] for any other read failure
/// - [`LoadError::InvalidJson`] when the contents do not parse, carrying
///   the serde_json detail (line/column included in its message)
pub fn load_json_file(path: &Path) -> Result<Value, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}
