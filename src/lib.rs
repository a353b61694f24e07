//! tourprog library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind the session (entry table, validation, report rendering).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Init { .. }) => cli::commands::init::handle(cli),
        Some(Commands::Config { .. }) => cli::commands::config::handle(cli, cfg),
        Some(cmd @ Commands::Check { .. }) => cli::commands::check::handle(cmd, cfg),
        Some(Commands::Session) | None => cli::commands::session::handle(cfg),
    }
}

/// Entry point called from main.rs
pub fn run() -> AppResult<()> {
    // parse CLI
    let cli = Cli::parse();

    // `init` writes the file, everything else reads it once
    if matches!(cli.command, Some(Commands::Init { .. })) {
        return dispatch(&cli, &Config::default());
    }

    let config_path = cli.config.as_deref().map(expand_tilde);
    let cfg = Config::load(config_path.as_deref())?;

    // hand over to the dispatcher
    dispatch(&cli, &cfg)
}
