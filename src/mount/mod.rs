//! Observing mountpoints managed by the filesystem daemon
//!
//! The daemon signals a live mount by creating a marker file (by default
//! `.xdg-volume-info`) at the mount root. Every mountpoint it has ever served
//! also leaves a cache directory named after the escaped mount path, which is
//! how previously configured mounts are rediscovered.
//!
//! | Operation | Result |
//! |-----------|--------|
//! | [`wait_until_ready`] | `Ready`, `TimedOut` or `NotPresent` |
//! | [`read_account_name`] | account name from the marker file, if any |
//! | [`is_valid_mountpoint`] | whether a directory is empty and usable |
//! | [`list_known_mounts`] | existing mountpoints found in the cache dir |

pub mod known;
pub mod marker;
pub mod readiness;
pub mod validity;

pub use known::list_known_mounts;
pub use marker::{read_account_name, DEFAULT_MARKER_FILE};
pub use readiness::{wait_until_ready, PollOptions, Readiness};
pub use validity::is_valid_mountpoint;
