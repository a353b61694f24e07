//! Tour program report: letterhead, fixed eight-column table, signature block.
//!
//! `layout_row` is the pure part (cell texts, widths, wrapping); `render_report`
//! walks the rows and keeps all cursor bookkeeping to itself.

use crate::config::OfficeIdentity;
use crate::export::metrics::{FontStyle, text_width_pt};
use crate::export::pdf::{Align, PdfManager};
use crate::models::TourEntry;
use crate::utils::truncate_chars;
use textwrap::WordSeparator;
use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;

/// Height of the header row and of one text line in a data row (mm).
pub const ROW_HEIGHT: f32 = 8.0;
const BODY_FONT_SIZE: f32 = 10.0;
const HEADER_ROW_FONT_SIZE: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKey {
    Date,
    Time,
    Day,
    Category,
    Ownership,
    Address,
    Section,
    Remarks,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub key: ColumnKey,
    pub label: &'static str,
    /// Share of the usable page width.
    pub ratio: f32,
    /// Characters kept from the value; `None` keeps everything.
    pub max_chars: Option<usize>,
    pub wrap: bool,
    pub align: Align,
}

pub const COLUMNS: [ColumnSpec; 8] = [
    ColumnSpec {
        key: ColumnKey::Date,
        label: "Date",
        ratio: 0.07,
        max_chars: None,
        wrap: false,
        align: Align::Center,
    },
    ColumnSpec {
        key: ColumnKey::Time,
        label: "Time",
        ratio: 0.05,
        max_chars: Some(5),
        wrap: false,
        align: Align::Center,
    },
    ColumnSpec {
        key: ColumnKey::Day,
        label: "Day",
        ratio: 0.06,
        max_chars: None,
        wrap: false,
        align: Align::Center,
    },
    ColumnSpec {
        key: ColumnKey::Category,
        label: "Category",
        ratio: 0.11,
        max_chars: Some(20),
        wrap: false,
        align: Align::Center,
    },
    ColumnSpec {
        key: ColumnKey::Ownership,
        label: "Ownership",
        ratio: 0.10,
        max_chars: Some(15),
        wrap: false,
        align: Align::Center,
    },
    ColumnSpec {
        key: ColumnKey::Address,
        label: "Name & Address of the Installation",
        ratio: 0.29,
        max_chars: Some(150),
        wrap: true,
        align: Align::Left,
    },
    ColumnSpec {
        key: ColumnKey::Section,
        label: "Section",
        ratio: 0.12,
        max_chars: Some(20),
        wrap: false,
        align: Align::Center,
    },
    ColumnSpec {
        key: ColumnKey::Remarks,
        label: "Remarks",
        ratio: 0.20,
        max_chars: Some(40),
        wrap: false,
        align: Align::Center,
    },
];

/// One cell of a data row, before placement on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSpec {
    pub text: String,
    pub width: f32,
    pub wrap: bool,
    pub align: Align,
}

/// Column widths for a usable page width.
pub fn column_widths(usable_width: f32) -> Vec<f32> {
    COLUMNS.iter().map(|c| usable_width * c.ratio).collect()
}

fn raw_value(entry: &TourEntry, key: ColumnKey) -> String {
    match key {
        ColumnKey::Date => entry.date_str(),
        ColumnKey::Time => entry.time.display(),
        ColumnKey::Day => entry.day().to_string(),
        ColumnKey::Category => entry.category.label().to_string(),
        ColumnKey::Ownership => entry.ownership.label().to_string(),
        ColumnKey::Address => entry.address.clone(),
        ColumnKey::Section => entry.electrical_section.clone(),
        ColumnKey::Remarks => entry.remarks.clone(),
    }
}

/// Cells of one data row: truncated text, width and wrap flag per column.
pub fn layout_row(entry: &TourEntry, usable_width: f32) -> Vec<CellSpec> {
    COLUMNS
        .iter()
        .map(|col| {
            let raw = raw_value(entry, col.key);
            let text = match col.max_chars {
                Some(n) => truncate_chars(&raw, n),
                None => raw,
            };
            let text = if col.wrap {
                text
            } else {
                // single-line cells cannot show line breaks
                text.replace(['\r', '\n'], " ")
            };
            CellSpec {
                text,
                width: usable_width * col.ratio,
                wrap: col.wrap,
                align: col.align,
            }
        })
        .collect()
}

/// Word measured in millimetres for `wrap_first_fit`.
#[derive(Debug)]
struct MeasuredWord {
    text: String,
    width: f64,
    whitespace_width: f64,
}

impl Fragment for MeasuredWord {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.whitespace_width
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

fn width_mm(text: &str, style: FontStyle, size: f32) -> f64 {
    (text_width_pt(text, style, size) * 25.4 / 72.0) as f64
}

/// Split a word that is wider than the line into pieces that fit.
fn split_long_word(word: &str, max: f64, style: FontStyle, size: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        if width_mm(&current, style, size) > max && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(ch);
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Word-wrap `text` into lines no wider than `max_width` millimetres.
/// Explicit line breaks are kept; an empty text gives no lines.
pub fn wrap_to_width(text: &str, max_width: f32, style: FontStyle, size: f32) -> Vec<String> {
    let max = max_width.max(1.0) as f64;
    let space = width_mm(" ", style, size);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut fragments = Vec::new();
        for word in WordSeparator::AsciiSpace.find_words(paragraph) {
            let w = word.word;
            if w.is_empty() {
                continue;
            }
            let pieces = if width_mm(w, style, size) > max {
                split_long_word(w, max, style, size)
            } else {
                vec![w.to_string()]
            };
            for piece in pieces {
                fragments.push(MeasuredWord {
                    width: width_mm(&piece, style, size),
                    text: piece,
                    whitespace_width: space,
                });
            }
        }

        if fragments.is_empty() {
            continue;
        }
        for line in wrap_first_fit(&fragments, &[max]) {
            let words: Vec<&str> = line.iter().map(|w| w.text.as_str()).collect();
            lines.push(words.join(" "));
        }
    }

    lines
}

/// A cell placed on the page: position, size and the lines it shows.
#[derive(Debug, Clone, PartialEq)]
struct PlacedCell {
    x: f32,
    y: f32,
    width: f32,
    lines: Vec<String>,
    align: Align,
}

/// Geometry of one data row starting at (`x0`, `y0`).
#[derive(Debug, Clone, PartialEq)]
struct RowGeometry {
    height: f32,
    cells: Vec<PlacedCell>,
}

/// Place the cells of a row side by side. Wrapped cells grow downwards one
/// line at a time; every cell of the row shares the tallest height, and each
/// cell starts on the row's top edge at the sum of the widths before it.
fn place_row(cells: &[CellSpec], x0: f32, y0: f32, cell_margin: f32) -> RowGeometry {
    let mut x = x0;
    let mut placed = Vec::with_capacity(cells.len());
    let mut max_lines = 1;

    for cell in cells {
        let lines = if cell.wrap {
            wrap_to_width(
                &cell.text,
                cell.width - 2.0 * cell_margin,
                FontStyle::Regular,
                BODY_FONT_SIZE,
            )
        } else {
            vec![cell.text.clone()]
        };
        max_lines = max_lines.max(lines.len());
        placed.push(PlacedCell {
            x,
            y: y0,
            width: cell.width,
            lines,
            align: cell.align,
        });
        x += cell.width;
    }

    RowGeometry {
        height: ROW_HEIGHT * max_lines as f32,
        cells: placed,
    }
}

impl RowGeometry {
    /// Same row with its top edge at `y`.
    fn moved_to(mut self, y: f32) -> Self {
        for cell in &mut self.cells {
            cell.y = y;
        }
        self
    }
}

/// Cut a row taller than `max_lines` text lines into parts that each fit on
/// a page. The first part carries every cell; later parts only continue the
/// wrapped lines, with the other cells left blank.
fn split_row(row: RowGeometry, max_lines: usize) -> Vec<RowGeometry> {
    let max_lines = max_lines.max(1);
    let total = row.cells.iter().map(|c| c.lines.len()).max().unwrap_or(1);
    if total <= max_lines {
        return vec![row];
    }

    (0..total)
        .step_by(max_lines)
        .map(|start| {
            let cells: Vec<PlacedCell> = row
                .cells
                .iter()
                .map(|c| PlacedCell {
                    lines: c.lines.iter().skip(start).take(max_lines).cloned().collect(),
                    ..c.clone()
                })
                .collect();
            let lines = cells.iter().map(|c| c.lines.len()).max().unwrap_or(0).max(1);
            RowGeometry {
                height: ROW_HEIGHT * lines as f32,
                cells,
            }
        })
        .collect()
}

fn draw_letterhead(pdf: &mut PdfManager, identity: &OfficeIdentity, title: &str) {
    pdf.set_font(FontStyle::Bold, 12.0);
    pdf.cell(0.0, 8.0, &identity.office_name, false, true, Align::Center);
    pdf.set_font(FontStyle::Regular, 10.0);
    pdf.cell(0.0, 6.0, &identity.office_address, false, true, Align::Center);
    pdf.ln(2.0);

    pdf.set_font(FontStyle::Regular, 9.0);
    pdf.cell(
        140.0,
        5.0,
        &format!("Name: {}", identity.officer_name),
        false,
        false,
        Align::Left,
    );
    pdf.cell(0.0, 5.0, &format!("PEN: {}", identity.pen), false, true, Align::Right);
    pdf.cell(
        140.0,
        5.0,
        &format!("Designation: {}", identity.designation),
        false,
        true,
        Align::Left,
    );

    let rule_y = pdf.y() + 2.0;
    let left = pdf.left_margin();
    let right = pdf.page_width() - left;
    pdf.hline(left, right, rule_y);
    pdf.ln(5.0);

    pdf.set_font(FontStyle::Bold, 11.0);
    pdf.cell(0.0, 6.0, title, false, true, Align::Center);
    pdf.ln(3.0);
}

fn draw_header_row(pdf: &mut PdfManager, widths: &[f32]) {
    pdf.set_font(FontStyle::Bold, HEADER_ROW_FONT_SIZE);
    for (col, w) in COLUMNS.iter().zip(widths) {
        pdf.cell(*w, ROW_HEIGHT, col.label, true, false, Align::Center);
    }
    pdf.ln(ROW_HEIGHT);
}

fn draw_data_row(pdf: &mut PdfManager, row: &RowGeometry) {
    pdf.set_font(FontStyle::Regular, BODY_FONT_SIZE);
    for cell in &row.cells {
        pdf.set_xy(cell.x, cell.y);
        if cell.lines.len() > 1 || cell.align == Align::Left {
            pdf.text_block(
                cell.width,
                ROW_HEIGHT,
                row.height,
                &cell.lines,
                true,
                cell.align,
            );
        } else {
            let text = cell.lines.first().map(String::as_str).unwrap_or("");
            pdf.cell(cell.width, row.height, text, true, false, cell.align);
        }
    }
    pdf.ln(row.height);
}

fn draw_signature_block(pdf: &mut PdfManager) {
    pdf.ln(10.0);
    pdf.break_if_needed(16.0);
    pdf.set_font(FontStyle::Regular, 10.0);
    pdf.cell(0.0, 8.0, "Signature: ___________________", false, true, Align::Left);
    pdf.cell(
        0.0,
        8.0,
        "Name/Designation: ___________________",
        false,
        true,
        Align::Left,
    );
}

/// Render the whole report. `entries` are expected in date order.
/// Never fails: odd field values are cut or blanked, never rejected.
pub fn render_report(entries: &[TourEntry], identity: &OfficeIdentity, title: &str) -> Vec<u8> {
    let mut pdf = PdfManager::landscape_a4();
    pdf.add_page();

    draw_letterhead(&mut pdf, identity, title);

    let usable = pdf.effective_width();
    let widths = column_widths(usable);
    draw_header_row(&mut pdf, &widths);

    // lines that fit on a page below the repeated header row
    let max_lines = ((pdf.body_height() - ROW_HEIGHT) / ROW_HEIGHT).floor() as usize;

    for entry in entries {
        let cells = layout_row(entry, usable);
        let row = place_row(&cells, pdf.x(), pdf.y(), pdf.cell_margin());
        for part in split_row(row, max_lines) {
            if pdf.break_if_needed(part.height) {
                draw_header_row(&mut pdf, &widths);
            }
            let part = part.moved_to(pdf.y());
            draw_data_row(&mut pdf, &part);
        }
    }

    draw_signature_block(&mut pdf);

    tracing::debug!(
        rows = entries.len(),
        pages = pdf.page_count(),
        "tour program rendered"
    );
    pdf.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EntryDraft, Ownership, TimeField};
    use chrono::{NaiveDate, NaiveTime};

    const USABLE: f32 = 277.0;

    fn identity() -> OfficeIdentity {
        OfficeIdentity {
            office_name: "Office of the Electrical Inspector".into(),
            office_address: "Palakkad".into(),
            officer_name: "A. Inspector".into(),
            designation: "Assistant Electrical Inspector".into(),
            pen: "833631".into(),
        }
    }

    fn sample_entry() -> TourEntry {
        let mut draft = EntryDraft::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        draft.time = TimeField::Structured(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        draft.category = Category::HtInstallation;
        draft.ownership = Some(Ownership::Private);
        draft.address = "Plant A, Road 5".into();
        draft.electrical_section = "Sec-1".into();
        draft.remarks = "Routine".into();
        draft.into_entry().unwrap()
    }

    fn find(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|w| w == needle.as_bytes())
    }

    #[test]
    fn ratios_fill_the_usable_width() {
        let total: f32 = column_widths(USABLE).iter().sum();
        assert!((total - USABLE).abs() < 1e-3);
    }

    #[test]
    fn sample_row_cells() {
        let cells = layout_row(&sample_entry(), USABLE);
        let texts: Vec<&str> = cells.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "2024-03-04",
                "09:00",
                "Monday",
                "HT Installation",
                "Private",
                "Plant A, Road 5",
                "Sec-1",
                "Routine"
            ]
        );
        assert!(cells[5].wrap);
        assert_eq!(cells.iter().filter(|c| c.wrap).count(), 1);
    }

    #[test]
    fn long_values_are_cut_to_column_limits() {
        let mut entry = sample_entry();
        entry.address = "x".repeat(300);
        entry.electrical_section = "s".repeat(30);
        entry.remarks = "r".repeat(60);
        entry.category = Category::AcCinemaCheck;
        entry.ownership = Ownership::GovernmentOwned;
        entry.time = TimeField::Raw("half past nine".into());

        let cells = layout_row(&entry, USABLE);
        assert_eq!(cells[1].text, "half ");
        assert_eq!(cells[3].text, "AC Check at AC Cinem");
        assert_eq!(cells[4].text, "Government-owne");
        assert_eq!(cells[5].text.len(), 150);
        assert_eq!(cells[6].text.len(), 20);
        assert_eq!(cells[7].text.len(), 40);
    }

    #[test]
    fn wrapped_address_does_not_shift_following_cells() {
        let mut entry = sample_entry();
        entry.address = "Installation building number ".repeat(11) + "end";
        assert!(entry.address.len() >= 300);

        let cells = layout_row(&entry, USABLE);
        let row = place_row(&cells, 10.0, 50.0, 1.0);

        let address = &row.cells[5];
        assert!(address.lines.len() > 1, "address should wrap");
        assert_eq!(row.height, ROW_HEIGHT * address.lines.len() as f32);

        let widths = column_widths(USABLE);
        let expected_x: f32 = 10.0 + widths[..6].iter().sum::<f32>();
        let section = &row.cells[6];
        assert!((section.x - expected_x).abs() < 1e-3);
        assert_eq!(section.y, 50.0);
        assert_eq!(section.lines, vec!["Sec-1".to_string()]);
        assert!(row.cells.iter().all(|c| c.y == 50.0));
    }

    #[test]
    fn wrap_fits_lines_to_width() {
        let text = "Name & Address of the Installation at a very long road somewhere";
        let lines = wrap_to_width(text, 40.0, FontStyle::Regular, 10.0);
        assert!(lines.len() > 1);
        for l in &lines {
            assert!(width_mm(l, FontStyle::Regular, 10.0) <= 40.0 + 1e-3);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_breaks_words_wider_than_the_line() {
        let lines = wrap_to_width(&"W".repeat(40), 20.0, FontStyle::Regular, 10.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), "W".repeat(40));
    }

    #[test]
    fn wrap_keeps_explicit_line_breaks() {
        let lines = wrap_to_width("Plant A\nRoad 5", 80.0, FontStyle::Regular, 10.0);
        assert_eq!(lines, vec!["Plant A", "Road 5"]);
        assert!(wrap_to_width("", 80.0, FontStyle::Regular, 10.0).is_empty());
    }

    #[test]
    fn empty_report_has_letterhead_and_footer() {
        let bytes = render_report(&[], &identity(), "Monthly Tour Program");
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(find(&bytes, "/Count 1"));
        assert!(find(&bytes, "(Monthly Tour Program)"));
        assert!(find(&bytes, "(PEN: 833631)"));
        assert!(find(&bytes, "(Remarks)"));
        assert!(find(&bytes, "(Signature: ___________________)"));
        assert!(!find(&bytes, "(Monday)"));
    }

    #[test]
    fn sample_entry_renders_one_row() {
        let bytes = render_report(&[sample_entry()], &identity(), "Monthly Tour Program");
        assert!(find(&bytes, "(09:00)"));
        assert!(find(&bytes, "(2024-03-04)"));
        assert!(find(&bytes, "(Plant A, Road 5)"));
        assert!(find(&bytes, "(Name/Designation: ___________________)"));
    }

    fn line_per_word_address() -> String {
        (0..60).map(|i| format!("L{i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn tall_row_is_split_into_parts_that_fit() {
        let mut entry = sample_entry();
        entry.address = line_per_word_address();
        let cells = layout_row(&entry, USABLE);
        assert_eq!(cells[5].text.chars().count(), 150);

        let row = place_row(&cells, 10.0, 50.0, 1.0);
        assert_eq!(row.cells[5].lines.len(), 40);

        let parts = split_row(row, 22);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].height, ROW_HEIGHT * 22.0);
        assert_eq!(parts[1].height, ROW_HEIGHT * 18.0);
        assert_eq!(parts[0].cells[6].lines, vec!["Sec-1".to_string()]);
        assert!(parts[1].cells[6].lines.is_empty());
        assert_eq!(parts[1].cells[5].lines.first().map(String::as_str), Some("L22"));
        assert_eq!(parts[1].cells[5].lines.last().map(String::as_str), Some("L39"));

        let moved = parts[1].clone().moved_to(18.0);
        assert!(moved.cells.iter().all(|c| c.y == 18.0));
    }

    #[test]
    fn short_row_is_not_split() {
        let row = place_row(&layout_row(&sample_entry(), USABLE), 10.0, 50.0, 1.0);
        let parts = split_row(row.clone(), 22);
        assert_eq!(parts, vec![row]);
    }

    #[test]
    fn tall_address_stays_inside_the_pages() {
        let mut entry = sample_entry();
        entry.address = line_per_word_address();
        let bytes = render_report(&[entry], &identity(), "Monthly Tour Program");
        assert!(find(&bytes, "(L0)"));
        assert!(find(&bytes, "(L39)"));
        assert!(!find(&bytes, "/Count 1"));

        // every text baseline lies above the bottom margin (10 mm = 28.35 pt)
        let text = String::from_utf8_lossy(&bytes);
        for line in text.lines().filter(|l| l.ends_with(" Tm")) {
            let nums: Vec<f32> = line
                .split_whitespace()
                .filter_map(|w| w.parse().ok())
                .collect();
            assert!(nums[5] > 28.3, "text below the margin: {line}");
        }
    }

    #[test]
    fn many_rows_flow_onto_more_pages() {
        let entries: Vec<TourEntry> = (0..60).map(|_| sample_entry()).collect();
        let bytes = render_report(&entries, &identity(), "Monthly Tour Program");
        assert!(!find(&bytes, "/Count 1"));
        assert!(find(&bytes, "/Count 3") || find(&bytes, "/Count 4"));
    }
}
