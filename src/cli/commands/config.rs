use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(Commands::Config {
        print_config,
        check,
    }) = &cli.command
    {
        let path = match &cli.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        };

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "{} does not exist, defaults are in use (run `tourprog init`)",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in &missing {
                    warning(format!("Missing key '{key}', using the default"));
                }
            }

            if cfg.default_ownership().is_none() {
                info("default_ownership is blank: `add` will require --ownership.");
            }
        }

        if !*print_config && !*check {
            info("Nothing to do: use --print or --check.");
        }
    }

    Ok(())
}
