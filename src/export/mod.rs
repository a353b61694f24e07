// src/export/mod.rs

mod excel_date;
pub(crate) mod fs_utils;
mod json_csv;
pub mod metrics;
mod model;
pub mod pdf;
mod pdf_export;
pub mod report;
mod xlsx;

pub use model::EntryExport;
pub use pdf_export::PDF_MIME;
pub use report::{CellSpec, layout_row, render_report};

pub(crate) use json_csv::{export_csv, export_json};
pub(crate) use model::entries_to_export;
pub(crate) use pdf_export::export_pdf;
pub(crate) use xlsx::export_xlsx;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared success line for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Pdf,
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
