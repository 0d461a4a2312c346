//! Resolves which manifest gets rewritten.
//!
//! ## Precedence
//!
//! 1. `--manifest-path`: used as given
//! 2. `--root` / `UPDATE_VERSION_ROOT`: `<root>/Cargo.toml`
//! 3. Executable location: the parent of the directory holding the binary,
//!    for installs laid out as `<root>/<bin dir>/update-version`

use crate::error::{Result, UpdateError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the manifest file under the project root.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Where the manifest location came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    ManifestPath,
    Explicit,
    Executable,
}

/// Absolute manifest path plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocation {
    pub path: PathBuf,
    pub source: RootSource,
}

pub fn resolve_manifest(
    manifest_path: Option<&Path>,
    root: Option<&Path>,
) -> Result<ManifestLocation> {
    if let Some(path) = manifest_path {
        return Ok(ManifestLocation {
            path: absolutize(path)?,
            source: RootSource::ManifestPath,
        });
    }

    if let Some(root) = root {
        return Ok(ManifestLocation {
            path: absolutize(root)?.join(MANIFEST_FILE),
            source: RootSource::Explicit,
        });
    }

    let exe = fs::canonicalize(env::current_exe()?)?;
    Ok(ManifestLocation {
        path: root_from_executable(&exe)?.join(MANIFEST_FILE),
        source: RootSource::Executable,
    })
}

/// Returns the grandparent of `exe`, i.e. the parent of its directory.
pub fn root_from_executable(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| UpdateError::RootNotFound(exe.to_path_buf()))
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}
