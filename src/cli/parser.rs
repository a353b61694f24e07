use crate::export::ExportFormat;
use crate::models::{Category, Ownership};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for tourprog
#[derive(Parser)]
#[command(
    name = "tourprog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan the monthly tour program of an electrical inspector and export it as a PDF",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of the standard one
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Defaults to `session` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a configuration file with the default values
    Init {
        #[arg(long, short, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,
    },

    /// Start an interactive session (one command per line on stdin)
    Session,

    /// Check dates against the calendar rules (Sunday, second Saturday)
    Check {
        /// Dates to check (YYYY-MM-DD)
        #[arg(required = true, value_parser = parse_date_arg)]
        dates: Vec<NaiveDate>,
    },
}

pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("'{s}' is not a date, expected YYYY-MM-DD"))
}

/// One line typed during a session.
#[derive(Parser, Debug)]
#[command(
    name = "tourprog",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Form fields shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct EntryFields {
    #[arg(long, help = "Time of inspection (HH:MM)", conflicts_with = "no_time")]
    pub time: Option<String>,

    #[arg(long = "no-time", help = "Leave the time blank")]
    pub no_time: bool,

    #[arg(long, value_enum)]
    pub category: Option<Category>,

    #[arg(long, value_enum)]
    pub ownership: Option<Ownership>,

    #[arg(long, help = "Name & address of the installation")]
    pub address: Option<String>,

    #[arg(long, help = "Place of inspection")]
    pub place: Option<String>,

    #[arg(long, help = "Name of the electrical section")]
    pub section: Option<String>,

    #[arg(long)]
    pub remarks: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Validate and add a tour entry
    Add {
        /// Date of the visit (YYYY-MM-DD)
        #[arg(value_parser = parse_date_arg)]
        date: NaiveDate,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Change a row (no validation)
    Edit {
        /// Row number as shown by `list`
        row: usize,

        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        #[command(flatten)]
        fields: EntryFields,
    },

    /// Delete a row
    Del {
        /// Row number as shown by `list`
        row: usize,
    },

    /// Show the table sorted by date
    List,

    /// Show summary statistics
    Stats,

    /// Write the table (PDF by default)
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
