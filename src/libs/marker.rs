//! The version marker: a one-line file naming the last installed version.
//!
//! The marker and the installed binary together decide whether an update is
//! needed. Neither is ever deleted by the updater.

use crate::libs::error::{UpdateError, UpdateResult};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Outcome of comparing the local installation with the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    UpToDate,
    NeedsUpdate,
}

/// Reads the marker file.
///
/// Returns `Ok(None)` when the file does not exist, which is different from an
/// existing empty file (`Ok(Some(""))`). Surrounding whitespace is trimmed.
pub fn read_marker(path: &Path) -> UpdateResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content.trim().to_string())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(UpdateError::io(path, e)),
    }
}

/// Overwrites the marker file with `version`, creating it and any missing
/// parent directories.
pub fn write_marker(path: &Path, version: &str) -> UpdateResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| UpdateError::io(parent, e))?;
    }
    fs::write(path, version.trim()).map_err(|e| UpdateError::io(path, e))
}

/// Up to date only when the marker names exactly `latest` and the binary exists.
///
/// This is string identity, not version ordering: any difference in spelling
/// triggers an update.
pub fn compare(current: Option<&str>, latest: &str, binary_path: &Path) -> VersionStatus {
    if current == Some(latest) && binary_path.exists() {
        VersionStatus::UpToDate
    } else {
        VersionStatus::NeedsUpdate
    }
}
