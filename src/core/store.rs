//! In-memory table of tour entries for one session.

use crate::errors::{AppError, AppResult};
use crate::models::TourEntry;
use chrono::NaiveDate;

/// Ordered collection of entries. Rows are addressed 1-based in the current
/// order, which is the order shown by `list` (always sorted first).
#[derive(Debug, Default, Clone)]
pub struct EntryStore {
    entries: Vec<TourEntry>,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TourEntry] {
        &self.entries
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.date() == date)
    }

    /// Insert after the last entry with an equal or earlier date, so the table
    /// stays in listing order. No other check; the validator runs before this.
    /// Returns the 1-based row of the new entry.
    pub fn append(&mut self, entry: TourEntry) -> usize {
        let at = self.entries.partition_point(|e| e.date() <= entry.date());
        tracing::debug!(date = %entry.date(), row = at + 1, "entry inserted");
        self.entries.insert(at, entry);
        at + 1
    }

    pub fn get(&self, row: usize) -> AppResult<&TourEntry> {
        row.checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(AppError::InvalidRow(row))
    }

    pub fn get_mut(&mut self, row: usize) -> AppResult<&mut TourEntry> {
        row.checked_sub(1)
            .and_then(|i| self.entries.get_mut(i))
            .ok_or(AppError::InvalidRow(row))
    }

    pub fn remove(&mut self, row: usize) -> AppResult<TourEntry> {
        if row == 0 || row > self.entries.len() {
            return Err(AppError::InvalidRow(row));
        }
        Ok(self.entries.remove(row - 1))
    }

    /// Stable ascending sort by date; entries sharing a date keep their order.
    pub fn sort_by_date(&mut self) {
        self.entries.sort_by_key(|e| e.date());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Ownership};

    fn entry(y: i32, m: u32, d: u32, remarks: &str) -> TourEntry {
        let mut draft = EntryDraft::new(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        draft.ownership = Some(Ownership::Private);
        draft.remarks = remarks.to_string();
        draft.into_entry().unwrap()
    }

    #[test]
    fn rows_are_one_based() {
        let mut store = EntryStore::new();
        store.append(entry(2024, 3, 4, "a"));
        store.append(entry(2024, 3, 5, "b"));

        assert_eq!(store.get(1).unwrap().remarks, "a");
        assert!(matches!(store.get(0), Err(AppError::InvalidRow(0))));
        assert!(matches!(store.get(3), Err(AppError::InvalidRow(3))));

        let removed = store.remove(2).unwrap();
        assert_eq!(removed.remarks, "b");
        assert_eq!(store.len(), 1);
        assert!(store.remove(5).is_err());
    }

    #[test]
    fn append_keeps_listing_order() {
        let mut store = EntryStore::new();
        assert_eq!(store.append(entry(2024, 3, 12, "late")), 1);
        assert_eq!(store.append(entry(2024, 3, 4, "first")), 1);
        assert_eq!(store.append(entry(2024, 3, 4, "second")), 2);
        assert_eq!(store.append(entry(2024, 3, 20, "last")), 4);

        let remarks: Vec<&str> = store.entries().iter().map(|e| e.remarks.as_str()).collect();
        assert_eq!(remarks, vec!["first", "second", "late", "last"]);
    }

    #[test]
    fn sort_is_stable_and_ascending() {
        let mut store = EntryStore::new();
        store.append(entry(2024, 3, 4, "first"));
        store.append(entry(2024, 3, 4, "second"));
        store.append(entry(2024, 3, 5, "late"));
        store
            .get_mut(3)
            .unwrap()
            .set_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        store.get_mut(3).unwrap().remarks = "moved".into();
        store.sort_by_date();

        let remarks: Vec<&str> = store.entries().iter().map(|e| e.remarks.as_str()).collect();
        assert_eq!(remarks, vec!["moved", "first", "second"]);
    }

    #[test]
    fn edit_through_get_mut_keeps_day_in_sync() {
        let mut store = EntryStore::new();
        store.append(entry(2024, 3, 4, "a"));
        store
            .get_mut(1)
            .unwrap()
            .set_date(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());
        assert_eq!(store.get(1).unwrap().day(), "Wednesday");
        assert!(store.contains_date(NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()));
    }
}
