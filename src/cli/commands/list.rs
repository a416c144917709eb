//! List command - show known mountpoints

use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::KeeperResult;
use crate::mount::read_account_name;
use crate::paths::HostDirs;
use crate::ui::{self, Status, UiContext};
use crate::unit::template_instance;
use console::style;
use serde::Serialize;
use std::path::PathBuf;

/// A mountpoint found in the daemon's cache directory
#[derive(Debug, Serialize)]
pub struct KnownMount {
    /// Absolute mountpoint path
    pub path: PathBuf,

    /// Path with the home directory shown as ~
    pub display: String,

    /// Template unit instance serving this mountpoint
    pub unit: String,

    /// Account name, if the mount is currently live
    pub account: Option<String>,
}

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config, dirs: &HostDirs) -> KeeperResult<()> {
    let mounts = dirs
        .known_mounts(&config.daemon.app_name)
        .into_iter()
        .map(|path| describe(path, config, dirs))
        .collect::<KeeperResult<Vec<_>>>()?;

    if mounts.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => ui::status(&UiContext::detect(), Status::Info, "No known mounts"),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&mounts),
        OutputFormat::Json => print_json(&mounts)?,
        OutputFormat::Plain => print_plain(&mounts),
    }

    Ok(())
}

fn describe(path: PathBuf, config: &Config, dirs: &HostDirs) -> KeeperResult<KnownMount> {
    let path_str = path.to_string_lossy();
    let unit = template_instance(&config.daemon.unit_template, &path_str)?;
    let display = dirs.abbreviate(&path_str);

    // only live mounts carry a marker; skip the read otherwise
    let account = if path.join(&config.daemon.marker_file).is_file() {
        read_account_name(&path, &config.daemon.marker_file)
            .ok()
            .flatten()
    } else {
        None
    };

    Ok(KnownMount {
        path,
        display,
        unit,
        account,
    })
}

fn print_table(mounts: &[KnownMount]) {
    println!(
        "{:<32} {:<28} {:<40}",
        style("MOUNTPOINT").bold(),
        style("ACCOUNT").bold(),
        style("UNIT").bold()
    );
    println!("{}", "-".repeat(100));

    for mount in mounts {
        let account = match mount.account {
            Some(ref name) => style(name.clone()).green(),
            None => style("not mounted".to_string()).dim(),
        };
        println!("{:<32} {:<28} {:<40}", mount.display, account, mount.unit);
    }

    println!();
    println!("{} mount(s)", mounts.len());
}

fn print_json(mounts: &[KnownMount]) -> KeeperResult<()> {
    let json = serde_json::to_string_pretty(mounts)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(mounts: &[KnownMount]) {
    for mount in mounts {
        println!("{}", mount.path.display());
    }
}
