//! Calendar helpers: parsing, weekday names and the second-Saturday rule.

use chrono::{Datelike, Days, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// English weekday name, e.g. `Monday`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}

/// First Saturday on or after the 1st of the month of `date`.
pub fn first_saturday(date: NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(date);
    let offset = (Weekday::Sat.num_days_from_monday() + 7
        - first.weekday().num_days_from_monday())
        % 7;
    first + Days::new(offset as u64)
}

/// First Saturday of the month plus seven days.
pub fn second_saturday(date: NaiveDate) -> NaiveDate {
    first_saturday(date) + Days::new(7)
}

pub fn is_second_saturday(date: NaiveDate) -> bool {
    date == second_saturday(date)
}
