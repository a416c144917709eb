//! Host directory lookups and `~` substitution for display paths

use crate::config::PathsConfig;
use crate::error::{KeeperError, KeeperResult};
use crate::mount;
use std::path::PathBuf;
use tracing::debug;

/// The current user's home and cache directories.
///
/// Everything that depends on the host environment takes one of these
/// instead of querying the environment itself, so tests can point the
/// whole crate at fixture directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDirs {
    home: PathBuf,
    cache: PathBuf,
}

impl HostDirs {
    /// Create from explicit directories
    pub fn new(home: impl Into<PathBuf>, cache: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            cache: cache.into(),
        }
    }

    /// Resolve directories from config overrides, falling back to the environment
    pub fn detect(paths: &PathsConfig) -> KeeperResult<Self> {
        let home = paths
            .home_dir
            .clone()
            .or_else(dirs::home_dir)
            .ok_or(KeeperError::HostDirUnavailable("home"))?;
        let cache = paths
            .cache_dir
            .clone()
            .or_else(dirs::cache_dir)
            .ok_or(KeeperError::HostDirUnavailable("cache"))?;

        debug!(
            "Host dirs: home={}, cache={}",
            home.display(),
            cache.display()
        );
        Ok(Self { home, cache })
    }

    /// Directory holding the daemon's per-mount cache entries
    pub fn app_cache_dir(&self, app_name: &str) -> PathBuf {
        self.cache.join(app_name)
    }

    /// Mountpoints the daemon has been configured for that still exist
    pub fn known_mounts(&self, app_name: &str) -> Vec<PathBuf> {
        mount::list_known_mounts(&self.app_cache_dir(app_name))
    }

    /// Replace the home directory prefix of `path` with `~`
    pub fn abbreviate(&self, path: &str) -> String {
        abbreviate(path, &self.home.to_string_lossy())
    }

    /// Replace a leading `~` in `path` with the home directory
    pub fn expand(&self, path: &str) -> String {
        expand(path, &self.home.to_string_lossy())
    }
}

/// Replace the `home` prefix of `path` with `~`.
///
/// Only whole components match: with a home of `/home/user`,
/// `/home/user/Drive` becomes `~/Drive` but `/home/user2` is left alone.
pub fn abbreviate(path: &str, home: &str) -> String {
    if path.is_empty() || home.is_empty() {
        return path.to_string();
    }

    let home = home.trim_end_matches('/');
    match path.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{}", rest),
        _ => path.to_string(),
    }
}

/// Replace a leading `~` or `~/` in `path` with `home`.
///
/// Absolute paths, empty input and other relative paths (including
/// `~name` forms) are returned unchanged.
pub fn expand(path: &str, home: &str) -> String {
    if path.starts_with('/') {
        return path.to_string();
    }

    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = home.trim_end_matches('/');
            if rest.is_empty() && home.is_empty() {
                "/".to_string()
            } else {
                format!("{}{}", home, rest)
            }
        }
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "/home/jane";

    #[test]
    fn abbreviate_under_home() {
        assert_eq!(abbreviate("/home/jane/OneDrive", HOME), "~/OneDrive");
        assert_eq!(abbreviate("/home/jane", HOME), "~");
    }

    #[test]
    fn abbreviate_outside_home() {
        assert_eq!(abbreviate("/mnt/drive", HOME), "/mnt/drive");
        assert_eq!(abbreviate("/home/janet/Drive", HOME), "/home/janet/Drive");
        assert_eq!(abbreviate("", HOME), "");
    }

    #[test]
    fn abbreviate_home_with_trailing_slash() {
        assert_eq!(abbreviate("/home/jane/OneDrive", "/home/jane/"), "~/OneDrive");
    }

    #[test]
    fn abbreviate_root_home() {
        assert_eq!(abbreviate("/srv/drive", "/"), "~/srv/drive");
        assert_eq!(expand("~/srv/drive", "/"), "/srv/drive");
        assert_eq!(expand("~", "/"), "/");
    }

    #[test]
    fn expand_tilde() {
        assert_eq!(expand("~/OneDrive", HOME), "/home/jane/OneDrive");
        assert_eq!(expand("~", HOME), "/home/jane");
    }

    #[test]
    fn expand_passthrough() {
        assert_eq!(expand("/mnt/drive", HOME), "/mnt/drive");
        assert_eq!(expand("", HOME), "");
        assert_eq!(expand("relative/dir", HOME), "relative/dir");
        assert_eq!(expand("~bob/Drive", HOME), "~bob/Drive");
    }

    #[test]
    fn abbreviate_after_expand_is_identity() {
        for p in ["~", "~/OneDrive", "~/a/b c/d", "~bob"] {
            assert_eq!(abbreviate(&expand(p, HOME), HOME), p);
        }
    }

    #[test]
    fn expand_after_abbreviate_is_identity() {
        for p in ["/home/jane", "/home/jane/OneDrive", "/home/jane/x/y z"] {
            assert_eq!(expand(&abbreviate(p, HOME), HOME), p);
        }
    }

    #[test]
    fn host_dirs_from_config_overrides() {
        let paths = PathsConfig {
            home_dir: Some(PathBuf::from("/home/jane")),
            cache_dir: Some(PathBuf::from("/var/cache/jane")),
        };
        let dirs = HostDirs::detect(&paths).unwrap();
        assert_eq!(dirs, HostDirs::new("/home/jane", "/var/cache/jane"));
        assert_eq!(
            dirs.app_cache_dir("onedriver"),
            PathBuf::from("/var/cache/jane/onedriver")
        );
        assert_eq!(dirs.abbreviate("/home/jane/OneDrive"), "~/OneDrive");
        assert_eq!(dirs.expand("~/OneDrive"), "/home/jane/OneDrive");
    }
}
