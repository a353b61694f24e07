use super::{Category, Ownership, TimeField};
use crate::utils::date::weekday_name;
use chrono::NaiveDate;

/// One scheduled inspection.
///
/// `date` and `day` are private so the weekday name can only ever be derived
/// from the date: every way of changing the date goes through `set_date`.
#[derive(Debug, Clone, PartialEq)]
pub struct TourEntry {
    date: NaiveDate,
    pub time: TimeField,
    day: &'static str,
    pub place_of_inspection: String,
    pub address: String,
    pub category: Category,
    pub ownership: Ownership,
    pub electrical_section: String,
    pub remarks: String,
}

impl TourEntry {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day(&self) -> &'static str {
        self.day
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.day = weekday_name(date);
    }
}

/// Form contents before validation.
///
/// Ownership stays optional here: a missing selection is what the validator
/// reports as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub time: TimeField,
    pub place_of_inspection: String,
    pub address: String,
    pub category: Category,
    pub ownership: Option<Ownership>,
    pub electrical_section: String,
    pub remarks: String,
}

impl EntryDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            time: TimeField::Absent,
            place_of_inspection: String::new(),
            address: String::new(),
            category: Category::default(),
            ownership: None,
            electrical_section: String::new(),
            remarks: String::new(),
        }
    }

    /// Turn the draft into an entry. Returns `None` when ownership is missing.
    pub fn into_entry(self) -> Option<TourEntry> {
        let ownership = self.ownership?;
        Some(TourEntry {
            date: self.date,
            time: self.time,
            day: weekday_name(self.date),
            place_of_inspection: self.place_of_inspection,
            address: self.address,
            category: self.category,
            ownership,
            electrical_section: self.electrical_section,
            remarks: self.remarks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn day_is_derived_from_date() {
        let mut draft = EntryDraft::new(d(2024, 3, 4));
        draft.ownership = Some(Ownership::Private);
        let mut entry = draft.into_entry().unwrap();
        assert_eq!(entry.day(), "Monday");

        entry.set_date(d(2024, 3, 10));
        assert_eq!(entry.day(), "Sunday");
        assert_eq!(entry.date_str(), "2024-03-10");
    }

    #[test]
    fn draft_without_ownership_does_not_convert() {
        assert!(EntryDraft::new(d(2024, 3, 4)).into_entry().is_none());
    }
}
