use crate::error::{Result, UpdateError};

/// Checks that `version` is a semantic version.
///
/// Only used with `--strict`; by default any string is written verbatim.
pub fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        return Err(UpdateError::InvalidVersion(
            version.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    semver::Version::parse(version)
        .map(|_| ())
        .map_err(|e| UpdateError::InvalidVersion(version.to_string(), e.to_string()))
}
