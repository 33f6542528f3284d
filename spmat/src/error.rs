//! Error type for file-backed operations

use std::io;
use std::path::{Path, PathBuf};

use spmat_core::{ErrorCategory, SpmatError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Core(#[from] SpmatError),
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Core category of the failure, `None` for I/O and JSON errors
    pub fn category(&self) -> Option<ErrorCategory> {
        match self {
            Error::Core(e) => Some(e.category()),
            _ => None,
        }
    }

    /// The underlying container error, if any
    pub fn as_core(&self) -> Option<&SpmatError> {
        match self {
            Error::Core(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
