//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::KeeperResult;
use crate::ui::{self, Status, UiContext};

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> KeeperResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => print!("{}", toml::to_string_pretty(config)?),
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
    }

    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> KeeperResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path().display();

    if manager.write_defaults(force).await? {
        ui::status(&ctx, Status::Ok, format_args!("Wrote default config to {}", path));
    } else {
        ui::status(
            &ctx,
            Status::Warn,
            format_args!("Config already exists at {} (use --force to overwrite)", path),
        );
    }
    Ok(())
}
