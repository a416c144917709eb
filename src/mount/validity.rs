//! Checking that a directory can serve as a fresh mountpoint

use std::fs;
use std::path::Path;
use tracing::debug;

/// A valid mountpoint is an existing directory with nothing in it.
pub fn is_valid_mountpoint(path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }

    let mut entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot open mountpoint {}: {}", path.display(), e);
            return false;
        }
    };

    // read_dir never yields `.` or `..`
    match entries.next() {
        None => true,
        Some(Ok(entry)) => {
            debug!(
                "Mountpoint {} is not empty: found {:?}",
                path.display(),
                entry.file_name()
            );
            false
        }
        Some(Err(e)) => {
            debug!("Error reading mountpoint {}: {}", path.display(), e);
            false
        }
    }
}
