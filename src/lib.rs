//! mountkeeper - mountpoint helpers for remote filesystem launchers
//!
//! Waits for daemon-managed mounts to come up, reads the account a mount
//! belongs to, validates new mountpoints and rediscovers previously
//! configured ones from the daemon's cache directory.

pub mod cli;
pub mod config;
pub mod error;
pub mod mount;
pub mod paths;
pub mod ui;
pub mod unit;

pub use error::{KeeperError, KeeperResult};
pub use mount::{
    is_valid_mountpoint, list_known_mounts, read_account_name, wait_until_ready, PollOptions,
    Readiness,
};
pub use paths::HostDirs;
