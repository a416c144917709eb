//! Account command - print the account a live mount belongs to

use crate::cli::args::MountpointArgs;
use crate::config::Config;
use crate::error::{KeeperError, KeeperResult};
use crate::mount::read_account_name;
use crate::paths::HostDirs;
use std::path::PathBuf;

/// Execute the account command
pub async fn execute(args: MountpointArgs, config: &Config, dirs: &HostDirs) -> KeeperResult<()> {
    let mountpoint = PathBuf::from(dirs.expand(&args.mountpoint));
    let marker = &config.daemon.marker_file;

    let name = read_account_name(&mountpoint, marker)?
        .ok_or_else(|| KeeperError::NoAccountName(mountpoint.join(marker)))?;

    println!("{}", name);
    Ok(())
}
