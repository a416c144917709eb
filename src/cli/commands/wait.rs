//! Wait command - block until a mount is live

use crate::cli::args::WaitArgs;
use crate::config::Config;
use crate::error::{KeeperError, KeeperResult};
use crate::mount::{wait_until_ready, PollOptions, Readiness};
use crate::paths::HostDirs;
use crate::ui::{Status, TaskSpinner, UiContext};
use std::path::PathBuf;
use std::time::Duration;

/// Execute the wait command
pub async fn execute(args: WaitArgs, config: &Config, dirs: &HostDirs) -> KeeperResult<()> {
    let mountpoint = PathBuf::from(dirs.expand(&args.mountpoint));

    let mut options = PollOptions::from(&config.poll);
    if let Some(secs) = args.timeout {
        options.timeout = Duration::from_secs(secs);
    }

    let spinner = TaskSpinner::start(
        UiContext::detect(),
        &format!("Waiting for {}...", args.mountpoint),
    );

    match wait_until_ready(&mountpoint, &config.daemon.marker_file, &options).await {
        Readiness::Ready => {
            spinner.finish(Status::Ok, &format!("{} is mounted", args.mountpoint));
            Ok(())
        }
        Readiness::TimedOut => {
            spinner.finish(Status::Fail, "Mount did not come up");
            Err(KeeperError::MountTimeout {
                path: mountpoint,
                secs: options.timeout.as_secs(),
            })
        }
        Readiness::NotPresent => {
            spinner.finish(Status::Fail, "Mountpoint is missing");
            Err(KeeperError::MountpointMissing(mountpoint))
        }
    }
}
