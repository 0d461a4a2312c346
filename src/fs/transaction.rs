//! Backed-up, atomic file rewrite.
//!
//! ## Execution Guarantees
//!
//! - **Backup**: `<path>.bak` holds the pre-edit content before the file changes
//! - **Atomicity**: New content is written to a sibling temp file and renamed
//!   over the original, so a failure never leaves a half-written file
//! - **Validation**: Pre-flight checks before any mutations
//! - **Always rewrites**: Unchanged content is still written and backed up
//!
//! ## Phases
//!
//! 1. **Build**: Stage the rewrite via `update_file_with()`
//! 2. **Validate**: Check the file still exists and is writable
//! 3. **Execute**: Write backup, then atomically replace the file
//!
//! ## Example
//!
//! ```no_run
//! # use update_version::fs::Transaction;
//! # use std::path::PathBuf;
//! # fn example() -> update_version::error::Result<()> {
//! let mut txn = Transaction::new(false);
//!
//! txn.update_file_with(PathBuf::from("Cargo.toml"), |old| old.replace("0.0.0", "1.0.0"))?;
//!
//! txn.commit()?;
//! # Ok(())
//! # }
//! ```

use crate::error::{Result, UpdateError};

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Suffix appended to a file name to form its backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Returns `<path>.bak`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// A staged file rewrite.
///
/// Stores original content for the backup.
#[derive(Debug, Clone)]
pub struct Operation {
    pub path: PathBuf,
    pub original: String,
    pub new: String,
}

impl Operation {
    pub fn backup_path(&self) -> PathBuf {
        backup_path(&self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransactionState {
    /// Staging.
    Building,
    /// Rewrite succeeded.
    Committed,
    /// Validation or execution failed.
    Failed,
}

/// Transaction around a single manifest rewrite.
///
/// Must be explicitly committed. If dropped without committing, logs a warning.
///
/// ## Dry-Run Mode
///
/// When `dry_run = true`, the rewrite is staged but never written, and no
/// backup is created.
#[must_use = "Transaction must be committed"]
pub struct Transaction {
    operation: Option<Operation>,
    dry_run: bool,
    state: TransactionState,
}

impl Transaction {
    /// Creates a new transaction.
    pub fn new(dry_run: bool) -> Self {
        Self {
            operation: None,
            dry_run,
            state: TransactionState::Building,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns true if successfully committed.
    pub fn is_committed(&self) -> bool {
        self.state == TransactionState::Committed
    }

    /// Stages a rewrite computed from the file's current content.
    ///
    /// Reads the file now; a missing file fails here, before anything
    /// (including the backup) is written.
    pub fn update_file_with<F>(&mut self, path: PathBuf, rewrite: F) -> Result<()>
    where
        F: FnOnce(&str) -> String,
    {
        if self.state != TransactionState::Building {
            return Err(UpdateError::Other(anyhow::anyhow!(
                "Cannot modify transaction after commit"
            )));
        }

        if let Some(staged) = &self.operation {
            return Err(UpdateError::Other(anyhow::anyhow!(
                "Rewrite already staged for {}",
                staged.path.display()
            )));
        }

        log::debug!("Staging update for: {}", path.display());

        let original = read_original(&path)?;
        let new_content = rewrite(&original);

        if original == new_content {
            log::debug!("Content unchanged, rewriting anyway: {}", path.display());
        }

        if self.dry_run {
            log::info!("Would update: {}", path.display());
        }

        self.operation = Some(Operation {
            path,
            original,
            new: new_content,
        });

        Ok(())
    }

    /// Checks the staged file still exists and is writable.
    fn validate(op: &Operation) -> Result<()> {
        if !op.path.exists() {
            return Err(UpdateError::ManifestNotFound(op.path.clone()));
        }

        if let Ok(metadata) = fs::metadata(&op.path) {
            if metadata.permissions().readonly() {
                return Err(UpdateError::Io(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("File is read-only: {}", op.path.display()),
                )));
            }
        }

        Ok(())
    }

    /// Commits the staged rewrite.
    ///
    /// Order:
    /// 1. Validate
    /// 2. Write `<path>.bak` with the original content
    /// 3. Write the new content to a temp file beside it
    /// 4. Rename the temp file over the original
    ///
    /// A failure in step 3 or 4 leaves the original file untouched.
    pub fn commit(&mut self) -> Result<()> {
        if self.state != TransactionState::Building {
            return Err(UpdateError::Other(anyhow::anyhow!(
                "Transaction already committed"
            )));
        }

        if self.dry_run {
            self.state = TransactionState::Committed;
            return Ok(());
        }

        if let Some(op) = &self.operation {
            if let Err(e) = Self::validate(op).and_then(|_| Self::execute(op)) {
                self.state = TransactionState::Failed;
                return Err(e);
            }
        }

        self.state = TransactionState::Committed;
        Ok(())
    }

    fn execute(op: &Operation) -> Result<()> {
        let backup = op.backup_path();
        fs::write(&backup, &op.original).map_err(|e| {
            UpdateError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write backup {}: {}", backup.display(), e),
            ))
        })?;
        log::debug!("Backed up: {} → {}", op.path.display(), backup.display());

        write_atomic(&op.path, &op.new)?;
        log::debug!("Updated: {}", op.path.display());
        Ok(())
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if self.state == TransactionState::Building && self.operation.is_some() && !self.dry_run {
            log::warn!("Transaction dropped without commit");
        }
    }
}

fn read_original(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            return UpdateError::ManifestNotFound(path.to_path_buf());
        }
        log::error!("Failed to read {}: {}", path.display(), e);
        UpdateError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read {}: {}", path.display(), e),
        ))
    })
}

/// Writes `content` to a temp file in `path`'s directory, then renames it
/// over `path`. The temp file is removed if anything fails before the rename.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let permissions = fs::metadata(path).ok().map(|m| m.permissions());

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    if let Some(permissions) = permissions {
        temp.as_file().set_permissions(permissions)?;
    }

    temp.persist(path)?;
    Ok(())
}
