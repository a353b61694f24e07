// src/export/pdf_export.rs

use crate::config::OfficeIdentity;
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::report::render_report;
use crate::models::TourEntry;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// MIME type of the report.
pub const PDF_MIME: &str = "application/pdf";

/// Render the report and write it to `path`.
pub(crate) fn export_pdf(
    entries: &[TourEntry],
    identity: &OfficeIdentity,
    title: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let bytes = render_report(entries, identity, title);
    tracing::debug!(bytes = bytes.len(), mime = PDF_MIME, "report buffer ready");
    fs::write(path, bytes)?;

    notify_export_success("PDF", path);
    Ok(())
}
