// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{date_to_excel_serial, time_to_excel_fraction};
use crate::export::model::{entries_to_export, entry_to_row, get_headers};
use crate::export::notify_export_success;
use crate::models::{TimeField, TourEntry};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const DATE_COL: u16 = 0;
const TIME_COL: u16 = 1;

/// XLSX export with a styled header and column widths fitted to the content.
pub(crate) fn export_xlsx(entries: &[TourEntry], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Tour Program")?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x1F77B4))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    // ---------------------------
    // Rows
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, (entry, flat)) in entries.iter().zip(entries_to_export(entries)).enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in entry_to_row(&flat).iter().enumerate() {
            let col = col as u16;
            write_cell(worksheet, row, col, entry, value, band)?;
            let w = &mut col_widths[col as usize];
            *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet.set_column_width(c as u16, (*w).min(60) as f64 + 2.0)?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Date and structured time go in as real Excel values, everything else as text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    entry: &TourEntry,
    text: &str,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match (col, &entry.time) {
        (DATE_COL, _) => {
            let fmt = base.set_num_format("yyyy-mm-dd");
            worksheet.write_with_format(row, col, date_to_excel_serial(entry.date()), &fmt)?;
        }
        (TIME_COL, TimeField::Structured(t)) => {
            let fmt = base.set_num_format("hh:mm");
            worksheet.write_with_format(row, col, time_to_excel_fraction(*t), &fmt)?;
        }
        _ => {
            worksheet.write_with_format(row, col, text, &base)?;
        }
    }
    Ok(())
}

