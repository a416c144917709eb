//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// mountkeeper - mountpoint helper for remote filesystem launchers
///
/// Waits for mounts to come up, reads mount metadata and rediscovers
/// mountpoints the filesystem daemon has been configured for.
#[derive(Parser, Debug)]
#[command(name = "mountkeeper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MOUNTKEEPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(
        long,
        global = true,
        env = "MOUNTKEEPER_LOG_FORMAT",
        default_value = "text"
    )]
    pub log_format: LogFormat,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List mountpoints the daemon has been configured for
    List(ListArgs),

    /// Wait until a mountpoint is live
    Wait(WaitArgs),

    /// Show the account name of a live mount
    Account(MountpointArgs),

    /// Check that a directory is usable as a new mountpoint
    Check(MountpointArgs),

    /// Convert between absolute and ~-prefixed paths
    Path(PathArgs),

    /// Print the daemon unit name for a mountpoint
    Unit(MountpointArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the wait command
#[derive(Parser, Debug)]
pub struct WaitArgs {
    /// Mountpoint to watch (~ is expanded)
    pub mountpoint: String,

    /// Seconds to wait before giving up (default: from config)
    #[arg(short, long)]
    pub timeout: Option<u64>,
}

/// Arguments for commands that take a single mountpoint
#[derive(Parser, Debug)]
pub struct MountpointArgs {
    /// Mountpoint path (~ is expanded)
    pub mountpoint: String,
}

/// Arguments for the path command
#[derive(Parser, Debug)]
pub struct PathArgs {
    #[command(subcommand)]
    pub action: PathAction,
}

/// Path subcommands
#[derive(Subcommand, Debug)]
pub enum PathAction {
    /// Replace the home directory prefix with ~
    Abbreviate {
        /// Absolute path
        path: String,
    },

    /// Replace a leading ~ with the home directory
    Expand {
        /// ~-prefixed path
        path: String,
    },
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
