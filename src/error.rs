//! Error types for mountkeeper
//!
//! All modules use `KeeperResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mountkeeper operations
pub type KeeperResult<T> = Result<T, KeeperError>;

/// All errors that can occur in mountkeeper
#[derive(Error, Debug)]
pub enum KeeperError {
    // Mount errors
    #[error("Could not open marker file {path}: {source}")]
    MarkerNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No account name recorded in {0}")]
    NoAccountName(PathBuf),

    #[error("Timed out after {secs}s waiting for {path} to mount")]
    MountTimeout { path: PathBuf, secs: u64 },

    #[error("Mountpoint does not exist: {0}")]
    MountpointMissing(PathBuf),

    #[error("Invalid mountpoint {path}: {reason}")]
    MountpointInvalid { path: PathBuf, reason: String },

    // Unit name errors
    #[error("Invalid unit name {name}: {reason}")]
    InvalidUnitName { name: String, reason: String },

    #[error("Invalid unit template {0}: expected a name like daemon@.service")]
    InvalidUnitTemplate(String),

    // Environment errors
    #[error("Could not determine the {0} directory for the current user")]
    HostDirUnavailable(&'static str),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl KeeperError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MountTimeout { .. } => {
                Some("Check the daemon: systemctl --user status onedriver@<mount>.service")
            }
            Self::MarkerNotFound { .. } => {
                Some("The mount is not live yet. Run: mountkeeper wait <mountpoint>")
            }
            Self::MountpointInvalid { .. } => Some("Mountpoints must be existing, empty directories"),
            Self::HostDirUnavailable(_) => {
                Some("Set paths.home_dir and paths.cache_dir in the config file")
            }
            _ => None,
        }
    }
}
