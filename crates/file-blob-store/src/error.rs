//! Error types for the blob file store

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum BlobStoreError {
    /// No blob file exists at the path the key maps to.
    NotFound(PathBuf),
    Io(Box<std::io::Error>),
}

impl fmt::Display for BlobStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlobStoreError::NotFound(path) => write!(f, "no blob file at {}", path.display()),
            BlobStoreError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for BlobStoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlobStoreError::Io(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BlobStoreError {
    fn from(err: std::io::Error) -> Self {
        BlobStoreError::Io(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, BlobStoreError>;
