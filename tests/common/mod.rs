//! Shared helpers for update-version integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest used by most tests.
#[allow(unused)]
pub const DEMO_MANIFEST: &str = "[package]\nname = \"demo\"\nversion = \"0.0.0\"\n";

/// Creates a project root holding a `Cargo.toml` with `content`.
pub fn create_project(content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Cargo.toml"), content).unwrap();
    temp
}

#[allow(unused)]
pub fn manifest(root: &Path) -> PathBuf {
    root.join("Cargo.toml")
}

#[allow(unused)]
pub fn backup(root: &Path) -> PathBuf {
    root.join("Cargo.toml.bak")
}

#[allow(unused)]
pub fn read_manifest(root: &Path) -> String {
    fs::read_to_string(manifest(root)).unwrap()
}

#[allow(unused)]
pub fn read_backup(root: &Path) -> String {
    fs::read_to_string(backup(root)).unwrap()
}

/// Runs `update-version --root <root> <args>`.
pub fn run_update(root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("update-version");
    cmd.arg("--root")
        .arg(root)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("UPDATE_VERSION_ROOT")
        .current_dir(root);

    cmd.assert()
}

/// The two status lines printed before every rewrite.
#[allow(unused)]
pub fn expected_stdout(root: &Path, version: &str) -> String {
    format!(
        "Updating version in {}\n  from version = \"0.0.0\" to version = \"{}\"\n",
        manifest(root).display(),
        version
    )
}
