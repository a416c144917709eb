//! Unit command - name the daemon unit serving a mountpoint

use crate::cli::args::MountpointArgs;
use crate::config::Config;
use crate::error::KeeperResult;
use crate::paths::HostDirs;
use crate::unit::template_instance;

/// Execute the unit command
pub async fn execute(args: MountpointArgs, config: &Config, dirs: &HostDirs) -> KeeperResult<()> {
    let mountpoint = dirs.expand(&args.mountpoint);
    let unit = template_instance(&config.daemon.unit_template, &mountpoint)?;

    println!("{}", unit);
    Ok(())
}
