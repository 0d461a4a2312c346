//! Error types for update-version.
//!
//! All operations return `Result<T>` which aliases `Result<T, UpdateError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version update operations.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// Manifest file does not exist.
    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    /// Executable location has no usable project root above it.
    #[error("Cannot derive project root from {}", .0.display())]
    RootNotFound(PathBuf),

    /// Version rejected by `--strict`.
    #[error("Invalid version '{0}': {1}")]
    InvalidVersion(String, String),

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Atomic rename of the rewritten manifest failed.
    #[error("Failed to replace manifest: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for update-version operations.
pub type Result<T> = std::result::Result<T, UpdateError>;
