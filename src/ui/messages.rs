//! Coloured one-line messages for the terminal.
//!
//! Colours are dropped when `NO_COLOR` is set.

use ansi_term::Colour;
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn paint(colour: Colour, icon: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        icon.to_string()
    } else {
        colour.bold().paint(icon).to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", paint(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", paint(Colour::Red, ICON_ERR), msg);
}

/// Section header, e.g. above the session table.
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {}", msg);
    if std::env::var_os("NO_COLOR").is_some() {
        println!("{}", line);
    } else {
        println!("{}", Colour::Blue.bold().paint(line));
    }
}
