use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write a configuration file with defaults.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let force = matches!(cli.command, Some(Commands::Init { force: true }));

    let path = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };

    if path.exists() && !force {
        return Err(AppError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(&path)?;

    info(format!("Config file : {}", path.display()));
    success("Edit office and officer details there before exporting.");
    Ok(())
}
