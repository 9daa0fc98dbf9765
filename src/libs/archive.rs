//! Extraction of the tool binary from a downloaded `.tar.gz` release asset.

use crate::libs::error::{UpdateError, UpdateResult};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Component, Path, PathBuf};
use tar::Archive;

/// Extracts the entry named `entry_name` from a gzip-compressed tar held in
/// memory and installs it at `destination`.
///
/// The entry is matched on its full path inside the archive, ignoring a
/// leading `./`. Its content is written to a temporary sibling of
/// `destination` and then renamed into place, replacing any existing file. On
/// Unix the installed file is made executable.
///
/// Returns the number of bytes written.
pub fn extract_entry(archive_bytes: &[u8], entry_name: &str, destination: &Path) -> UpdateResult<u64> {
    let mut archive = Archive::new(GzDecoder::new(archive_bytes));
    let wanted = Path::new(entry_name);

    for entry in archive.entries().map_err(UpdateError::Extraction)? {
        let entry = entry.map_err(UpdateError::Extraction)?;
        let is_wanted = {
            let path = entry.path().map_err(UpdateError::Extraction)?;
            entry.header().entry_type().is_file() && strip_cur_dir(&path) == wanted
        };
        if is_wanted {
            return install(entry, destination);
        }
    }

    Err(UpdateError::EntryNotFound(entry_name.to_string()))
}

fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

fn install<R: Read>(mut reader: R, destination: &Path) -> UpdateResult<u64> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| UpdateError::io(parent, e))?;
    }

    let staging = staging_path(destination);
    let result = File::create(&staging)
        .map_err(|e| UpdateError::io(&staging, e))
        .and_then(|mut out| io::copy(&mut reader, &mut out).map_err(UpdateError::Extraction))
        .and_then(|written| set_executable(&staging).map(|_| written))
        .and_then(|written| fs::rename(&staging, destination).map(|_| written).map_err(|e| UpdateError::io(destination, e)));

    // The staging file must not outlive a failed install.
    if result.is_err() && staging.exists() {
        let _ = fs::remove_file(&staging);
    }
    result
}

fn staging_path(destination: &Path) -> PathBuf {
    let mut name = destination.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".download");
    destination.with_file_name(name)
}

#[cfg(unix)]
fn set_executable(path: &Path) -> UpdateResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path).map_err(|e| UpdateError::io(path, e))?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).map_err(|e| UpdateError::io(path, e))
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> UpdateResult<()> {
    Ok(())
}
