//! Configuration schema for mountkeeper
//!
//! Configuration is stored at `~/.config/mountkeeper/config.toml`

use crate::mount::DEFAULT_MARKER_FILE;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filesystem daemon settings
    pub daemon: DaemonConfig,

    /// Readiness polling settings
    pub poll: PollConfig,

    /// Host directory overrides
    pub paths: PathsConfig,
}

impl Config {
    /// Check values that parse but cannot be used, naming the first bad key
    pub fn validate(&self) -> Result<(), String> {
        if self.poll.interval_ms == 0 {
            return Err("poll.interval_ms must be at least 1".to_string());
        }
        if self.daemon.app_name.is_empty() {
            return Err("daemon.app_name must not be empty".to_string());
        }
        let marker = &self.daemon.marker_file;
        if marker.is_empty() || marker.contains('/') {
            return Err(format!(
                "daemon.marker_file must be a plain file name, got {:?}",
                marker
            ));
        }
        Ok(())
    }
}

/// Filesystem daemon settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    /// Subdirectory of the user cache dir holding one entry per mount
    pub app_name: String,

    /// File the daemon creates at the root of a live mount
    pub marker_file: String,

    /// Template unit started for each mountpoint
    pub unit_template: String,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            app_name: "onedriver".to_string(),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
            unit_template: "onedriver@.service".to_string(),
        }
    }
}

/// Readiness polling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Give up waiting for a mount after this many seconds
    pub timeout_secs: u64,

    /// Delay between marker checks in milliseconds
    pub interval_ms: u64,
}

impl PollConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 120,
            interval_ms: 100,
        }
    }
}

/// Host directory overrides. Unset values are looked up from the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Home directory used for `~` substitution
    pub home_dir: Option<PathBuf>,

    /// Root of the per-user cache directory
    pub cache_dir: Option<PathBuf>,
}
