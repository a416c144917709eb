//! Path command - convert between absolute and ~-prefixed paths

use crate::cli::args::{PathAction, PathArgs};
use crate::error::KeeperResult;
use crate::paths::HostDirs;

/// Execute the path command
pub async fn execute(args: PathArgs, dirs: &HostDirs) -> KeeperResult<()> {
    let converted = match args.action {
        PathAction::Abbreviate { path } => dirs.abbreviate(&path),
        PathAction::Expand { path } => dirs.expand(&path),
    };

    println!("{}", converted);
    Ok(())
}
