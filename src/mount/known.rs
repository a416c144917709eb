//! Rediscovering mountpoints from the daemon's cache directory

use crate::unit::unescape_path;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List mountpoints recorded in `cache_dir` that still exist as directories.
///
/// Each non-hidden subdirectory of `cache_dir` is named after the escaped
/// path of a mountpoint. A missing cache directory just means no mounts have
/// been configured yet, so it yields an empty list. Results come back in
/// directory iteration order.
pub fn list_known_mounts(cache_dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(cache_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot open cache dir {}: {}", cache_dir.display(), e);
            return Vec::new();
        }
    };

    let mut mounts = Vec::new();
    for entry in entries.flatten() {
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if !is_dir {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            debug!("Skipping non UTF-8 cache entry {:?}", file_name);
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let path = match unescape_path(name) {
            Ok(path) => PathBuf::from(path),
            Err(e) => {
                debug!("Skipping cache entry: {}", e);
                continue;
            }
        };

        if path.is_dir() {
            mounts.push(path);
        } else {
            debug!("Stale cache entry {} for {}", name, path.display());
        }
    }

    debug!(
        "Found {} known mounts in {}",
        mounts.len(),
        cache_dir.display()
    );
    mounts
}
