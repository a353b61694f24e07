//! Split a session command line into words.
//!
//! Words are separated by spaces; a word starting with `"` runs until the
//! closing quote, and `""` inside a quoted word is a literal quote.

use crate::errors::{AppError, AppResult};

pub fn split_command_line(line: &str) -> AppResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .quote(b'"')
        .has_headers(false)
        .flexible(true)
        .from_reader(line.trim().as_bytes());

    let mut record = csv::StringRecord::new();
    if !rdr.read_record(&mut record)? {
        return Ok(Vec::new());
    }

    // consecutive spaces produce empty fields
    let words = record
        .iter()
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    if rdr.read_record(&mut record)? {
        return Err(AppError::InvalidCommand(
            "one command per line, please".into(),
        ));
    }

    Ok(words)
}
