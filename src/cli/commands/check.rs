//! Check command - validate a directory before mounting on it

use crate::cli::args::MountpointArgs;
use crate::error::{KeeperError, KeeperResult};
use crate::mount::is_valid_mountpoint;
use crate::paths::HostDirs;
use crate::ui::{self, Status, UiContext};
use std::path::PathBuf;

/// Execute the check command
pub async fn execute(args: MountpointArgs, dirs: &HostDirs) -> KeeperResult<()> {
    let mountpoint = PathBuf::from(dirs.expand(&args.mountpoint));

    if !is_valid_mountpoint(&mountpoint) {
        let reason = if mountpoint.is_dir() {
            "directory is not empty"
        } else {
            "not an accessible directory"
        };
        return Err(KeeperError::MountpointInvalid {
            path: mountpoint,
            reason: reason.to_string(),
        });
    }

    ui::status(
        &UiContext::detect(),
        Status::Ok,
        format_args!("Valid mountpoint: {}", args.mountpoint),
    );
    Ok(())
}
