//! Marker file parsing
//!
//! The marker file holds newline-separated `Key=Value` lines. Only the
//! `Name=` key, the account the mount belongs to, is consumed.

use crate::error::{KeeperError, KeeperResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// Marker file name used by the daemon unless configured otherwise
pub const DEFAULT_MARKER_FILE: &str = ".xdg-volume-info";

const NAME_KEY: &[u8] = b"Name=";

/// Read the account name from the marker file of a live mount.
///
/// Returns `Ok(None)` when the file has no `Name=` line or its value is
/// blank. Fails with [`KeeperError::MarkerNotFound`] if the marker file
/// cannot be opened, which usually means the mount is not live.
pub fn read_account_name(mountpoint: &Path, marker: &str) -> KeeperResult<Option<String>> {
    let path = mountpoint.join(marker);
    let file = File::open(&path).map_err(|e| {
        warn!("Could not open marker file {}: {}", path.display(), e);
        KeeperError::MarkerNotFound {
            path: path.clone(),
            source: e,
        }
    })?;

    let name = parse_account_name(BufReader::new(file))
        .map_err(|e| KeeperError::io(format!("reading {}", path.display()), e))?;

    if name.is_none() {
        debug!("No account name in {}", path.display());
    }
    Ok(name)
}

/// Lines are scanned as bytes; only the `Name=` value has to be text, and
/// invalid UTF-8 in it is replaced rather than rejected.
fn parse_account_name(mut reader: impl BufRead) -> std::io::Result<Option<String>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        if let Some(value) = line.strip_prefix(NAME_KEY) {
            let value = value.strip_suffix(b"\n").unwrap_or(value);
            let value = value.strip_suffix(b"\r").unwrap_or(value);
            let name = String::from_utf8_lossy(value).into_owned();
            return Ok(Some(name).filter(|n| !n.is_empty()));
        }
    }
}
