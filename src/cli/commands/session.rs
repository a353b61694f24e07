use crate::cli::commands;
use crate::cli::parser::{SessionCommand, SessionLine};
use crate::config::Config;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{error, header, info};
use crate::utils::tokenize::split_command_line;
use clap::Parser;
use clap::error::ErrorKind;
use std::io::{self, BufRead, Write};

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Owns the table for the lifetime of one session. The table lives here and
/// nowhere else; commands get it passed in.
pub struct Session {
    store: EntryStore,
    cfg: Config,
}

impl Session {
    pub fn new(cfg: Config) -> Self {
        Self {
            store: EntryStore::new(),
            cfg,
        }
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    /// Read commands until `quit` or end of input. Errors in a line are
    /// printed and the session goes on.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        header(format!("{} - {}", self.cfg.office_name, self.cfg.report_title));
        info("Type `help` for the list of commands, `quit` to leave.");

        loop {
            print!("tourprog> ");
            io::stdout().flush().ok();

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                println!();
                break;
            }

            match self.handle_line(&line, input) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }

        tracing::debug!(entries = self.store.len(), "session closed");
        info("Session closed, the table is discarded.");
        Ok(())
    }

    /// Parse and execute one line.
    pub fn handle_line<R: BufRead>(&mut self, line: &str, input: &mut R) -> AppResult<Flow> {
        let words = split_command_line(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match SessionLine::try_parse_from(&words) {
            Ok(p) => p,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                print!("{e}");
                return Ok(Flow::Continue);
            }
            Err(e) => {
                eprint!("{e}");
                return Ok(Flow::Continue);
            }
        };

        self.execute(&parsed.command, input)
    }

    pub fn execute<R: BufRead>(&mut self, cmd: &SessionCommand, input: &mut R) -> AppResult<Flow> {
        match cmd {
            SessionCommand::Add { .. } => commands::add::handle(cmd, &mut self.store, &self.cfg)?,
            SessionCommand::Edit { .. } => commands::edit::handle(cmd, &mut self.store)?,
            SessionCommand::Del { .. } => commands::del::handle(cmd, &mut self.store)?,
            SessionCommand::List => commands::list::handle(&mut self.store)?,
            SessionCommand::Stats => commands::stats::handle(&self.store)?,
            SessionCommand::Export { .. } => {
                commands::export::handle(cmd, &mut self.store, &self.cfg, input)?
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Handle the `session` command on stdin.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    Session::new(cfg.clone()).run(&mut input)
}
