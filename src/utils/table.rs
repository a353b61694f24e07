//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{ellipsize, pad_right};
use ansi_term::Style;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Plain text rendering, cells cut to the column width.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad_right(&ellipsize(&c.header, c.width), c.width))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        out.push_str(&rule.join(" "));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .enumerate()
                .map(|(i, col)| {
                    let v = row.get(i).map(String::as_str).unwrap_or("");
                    pad_right(&ellipsize(v, col.width), col.width)
                })
                .collect();
            out.push_str(cells.join(" ").trim_end());
            out.push('\n');
        }

        out
    }

    /// Same as `render` with a bold header line for terminals.
    pub fn render_styled(&self) -> String {
        let plain = self.render();
        let mut lines = plain.lines();
        let mut out = String::new();
        if let Some(first) = lines.next() {
            out.push_str(&Style::new().bold().paint(first).to_string());
            out.push('\n');
        }
        for l in lines {
            out.push_str(l);
            out.push('\n');
        }
        out
    }
}
