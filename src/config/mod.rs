//! Configuration loading for mountkeeper
//!
//! A missing file means defaults. A file that exists must parse and pass
//! [`Config::validate`], otherwise every command fails with
//! [`KeeperError::ConfigInvalid`] naming the file.

pub mod schema;

pub use schema::{Config, DaemonConfig, PathsConfig, PollConfig};

use crate::error::{KeeperError, KeeperResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

const APP_DIR: &str = "mountkeeper";
const FILE_NAME: &str = "config.toml";

/// Locates and reads the config file
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Use `explicit` when given (from `--config` or `MOUNTKEEPER_CONFIG`),
    /// otherwise `<config dir>/mountkeeper/config.toml`
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let path = explicit.unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join(FILE_NAME)
        });
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> KeeperResult<Config> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", self.path.display());
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(KeeperError::io(
                    format!("reading config from {}", self.path.display()),
                    e,
                ))
            }
        };

        let config: Config = toml::from_str(&content).map_err(|e| self.invalid(e.to_string()))?;
        config.validate().map_err(|reason| self.invalid(reason))?;
        Ok(config)
    }

    /// Write the default config. Returns `false` without touching the file
    /// if it already exists and `overwrite` is not set.
    pub async fn write_defaults(&self, overwrite: bool) -> KeeperResult<bool> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| KeeperError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let content = toml::to_string_pretty(&Config::default())?;

        let mut options = OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = match options.open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(self.write_error(e)),
        };
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| self.write_error(e))?;
        file.flush().await.map_err(|e| self.write_error(e))?;

        info!("Wrote default config to {}", self.path.display());
        Ok(true)
    }

    fn invalid(&self, reason: String) -> KeeperError {
        KeeperError::ConfigInvalid {
            path: self.path.clone(),
            reason,
        }
    }

    fn write_error(&self, source: std::io::Error) -> KeeperError {
        KeeperError::io(format!("writing config to {}", self.path.display()), source)
    }
}
