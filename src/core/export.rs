use crate::config::Config;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{
    ExportFormat, entries_to_export, export_csv, export_json, export_pdf, export_xlsx,
};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;
use std::io::BufRead;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Sort the table by date and write it.
    ///
    /// - `format`: pdf (default), csv, json or xlsx
    /// - `file`: output path; defaults to `output_file` from the config, with
    ///   the extension swapped for non-PDF formats
    /// - `input`: where the overwrite confirmation is read from
    ///
    /// Returns the path written, or `None` when the table is empty.
    pub fn export<R: BufRead>(
        store: &mut EntryStore,
        cfg: &Config,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        input: &mut R,
    ) -> AppResult<Option<PathBuf>> {
        if store.is_empty() {
            info("Add entries to generate PDF");
            return Ok(None);
        }

        let path = resolve_output_path(cfg, format, file);
        ensure_writable(&path, force, input)?;

        store.sort_by_date();
        let entries = store.entries();

        match format {
            ExportFormat::Pdf => export_pdf(entries, &cfg.identity(), &cfg.report_title, &path)?,
            ExportFormat::Csv => export_csv(&entries_to_export(entries), &path)?,
            ExportFormat::Json => export_json(&entries_to_export(entries), &path)?,
            ExportFormat::Xlsx => export_xlsx(entries, &path)?,
        }

        Ok(Some(path))
    }
}

fn resolve_output_path(cfg: &Config, format: ExportFormat, file: Option<&str>) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => {
            let base = expand_tilde(&cfg.output_file);
            if format == ExportFormat::Pdf {
                base
            } else {
                base.with_extension(format.as_str())
            }
        }
    }
}
