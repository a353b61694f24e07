// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Days since the Excel epoch (1899-12-30), as stored in a date cell.
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

/// Fraction of a day, as stored in a time cell.
pub(crate) fn time_to_excel_fraction(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}
