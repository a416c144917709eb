//! systemd unit-name path escaping
//!
//! The daemon keeps one cache directory per mountpoint, named after the
//! mountpoint in the same escaped form systemd uses for path-based template
//! instances (`systemd-escape --path`). `/home/me/OneDrive` becomes
//! `home-me-OneDrive`, and `onedriver@.service` becomes
//! `onedriver@home-me-OneDrive.service`.

use crate::error::{KeeperError, KeeperResult};
use std::fmt::Write;

/// Escape an absolute path into a unit-name-safe string.
///
/// Duplicate slashes and `.` components are dropped and leading/trailing
/// slashes stripped before escaping. The root directory escapes to `-`.
pub fn escape_path(path: &str) -> String {
    let components: Vec<&str> = path
        .split('/')
        .filter(|c| !c.is_empty() && *c != ".")
        .collect();

    if components.is_empty() {
        return "-".to_string();
    }

    let joined = components.join("/");
    let mut escaped = String::with_capacity(joined.len());
    for (i, byte) in joined.bytes().enumerate() {
        match byte {
            b'/' => escaped.push('-'),
            // a leading dot would make the name hidden
            b'.' if i == 0 => push_hex(&mut escaped, byte),
            b if b.is_ascii_alphanumeric() || matches!(b, b':' | b'_' | b'.') => {
                escaped.push(b as char)
            }
            _ => push_hex(&mut escaped, byte),
        }
    }
    escaped
}

/// Reverse [`escape_path`], returning the absolute path a unit name refers to.
pub fn unescape_path(name: &str) -> KeeperResult<String> {
    if name.is_empty() {
        return Err(invalid(name, "name is empty"));
    }
    if name == "-" {
        return Ok("/".to_string());
    }

    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() + 1);
    out.push(b'/');

    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'-' => {
                out.push(b'/');
                i += 1;
            }
            b'\\' => {
                let byte = bytes
                    .get(i + 1..i + 4)
                    .and_then(|seq| match seq {
                        [b'x', hi, lo] => Some((hex_value(*hi)? << 4) | hex_value(*lo)?),
                        _ => None,
                    })
                    .ok_or_else(|| invalid(name, "malformed \\x escape"))?;
                out.push(byte);
                i += 4;
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    let path =
        String::from_utf8(out).map_err(|_| invalid(name, "escaped bytes are not valid UTF-8"))?;

    let normalized = path
        .split('/')
        .skip(1)
        .all(|c| !c.is_empty() && c != "." && c != "..");
    if !normalized {
        return Err(invalid(name, "path is not normalized"));
    }

    Ok(path)
}

/// Instantiate a template unit (`daemon@.service`) for a mountpoint.
pub fn template_instance(template: &str, mountpoint: &str) -> KeeperResult<String> {
    let (prefix, suffix) = template
        .split_once("@.")
        .filter(|(prefix, suffix)| !prefix.is_empty() && !suffix.is_empty())
        .ok_or_else(|| KeeperError::InvalidUnitTemplate(template.to_string()))?;

    Ok(format!("{}@{}.{}", prefix, escape_path(mountpoint), suffix))
}

fn push_hex(out: &mut String, byte: u8) {
    let _ = write!(out, "\\x{byte:02x}");
}

fn hex_value(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

fn invalid(name: &str, reason: &str) -> KeeperError {
    KeeperError::InvalidUnitName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
