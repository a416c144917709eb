//! Waiting for a mount to come up

use crate::config::PollConfig;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::time::{sleep, Instant};
use tracing::{debug, info};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);
const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Floor for the delay between checks, so a zero interval cannot spin
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Outcome of waiting for a mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The marker file appeared
    Ready,
    /// The directory stayed up but the marker never appeared
    TimedOut,
    /// The mountpoint directory could not be opened
    NotPresent,
}

/// Timing for [`wait_until_ready`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    pub timeout: Duration,
    pub interval: Duration,
}

impl PollOptions {
    /// Poll every 100ms for `secs` seconds, or the default 120 if unset
    pub fn from_timeout_secs(secs: Option<u64>) -> Self {
        Self {
            timeout: secs.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT),
            ..Self::default()
        }
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl From<&PollConfig> for PollOptions {
    fn from(config: &PollConfig) -> Self {
        Self {
            timeout: config.timeout(),
            interval: config.interval(),
        }
    }
}

/// Poll `mountpoint` until the `marker` file shows up in it.
///
/// Returns [`Readiness::NotPresent`] as soon as the directory cannot be
/// opened. Dropping the returned future abandons the wait.
pub async fn wait_until_ready(mountpoint: &Path, marker: &str, options: &PollOptions) -> Readiness {
    let interval = options.interval.max(MIN_INTERVAL);
    let start = Instant::now();
    let deadline = start
        .checked_add(options.timeout)
        .unwrap_or_else(|| start + FAR_FUTURE);

    debug!(
        "Waiting up to {:?} for {} in {}, checking every {:?}",
        options.timeout,
        marker,
        mountpoint.display(),
        interval
    );

    loop {
        match has_marker(mountpoint, marker).await {
            None => {
                debug!("Mountpoint {} is not present", mountpoint.display());
                return Readiness::NotPresent;
            }
            Some(true) => {
                info!("Mount at {} is ready", mountpoint.display());
                return Readiness::Ready;
            }
            Some(false) => {}
        }

        let now = Instant::now();
        if now >= deadline {
            break;
        }
        // the last pause ends at the deadline so one final check lands on it
        sleep(interval.min(deadline - now)).await;
    }

    info!(
        "Gave up waiting for {} after {:?}",
        mountpoint.display(),
        options.timeout
    );
    Readiness::TimedOut
}

/// `None` if the directory cannot be opened
async fn has_marker(dir: &Path, marker: &str) -> Option<bool> {
    let mut entries = fs::read_dir(dir).await.ok()?;
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) if entry.file_name() == marker => return Some(true),
            Ok(Some(_)) => continue,
            Ok(None) => return Some(false),
            Err(e) => {
                debug!("Error scanning {}: {}", dir.display(), e);
                return Some(false);
            }
        }
    }
}
