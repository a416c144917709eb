//! mountkeeper - mountpoint helper CLI
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use mountkeeper::cli::{Cli, Commands, LogFormat};
use mountkeeper::config::ConfigManager;
use mountkeeper::error::KeeperResult;
use mountkeeper::paths::HostDirs;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold().for_stderr(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow().for_stderr(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> KeeperResult<()> {
    let cli = Cli::parse();

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("mountkeeper=warn"),
        1 => EnvFilter::new("mountkeeper=info"),
        _ => EnvFilter::new("mountkeeper=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();
    match cli.log_format {
        LogFormat::Text => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    let config_manager = ConfigManager::resolve(cli.config.clone());
    let config = config_manager.load().await?;
    debug!("Using config file {}", config_manager.path().display());

    // Config command works even when host dirs cannot be resolved
    if let Commands::Config(args) = cli.command {
        return mountkeeper::cli::commands::config(args, &config, &config_manager).await;
    }

    let dirs = HostDirs::detect(&config.paths)?;

    match cli.command {
        Commands::Config(_) => unreachable!("Config handled above"),
        Commands::List(args) => mountkeeper::cli::commands::list(args, &config, &dirs).await,
        Commands::Wait(args) => mountkeeper::cli::commands::wait(args, &config, &dirs).await,
        Commands::Account(args) => mountkeeper::cli::commands::account(args, &config, &dirs).await,
        Commands::Check(args) => mountkeeper::cli::commands::check(args, &dirs).await,
        Commands::Path(args) => mountkeeper::cli::commands::path(args, &dirs).await,
        Commands::Unit(args) => mountkeeper::cli::commands::unit(args, &config, &dirs).await,
    }
}
