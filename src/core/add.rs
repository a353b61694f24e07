use crate::core::store::EntryStore;
use crate::core::validator::{Severity, validate};
use crate::models::EntryDraft;
use crate::ui::messages::{error, success, warning};

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the draft and append it when every check passes.
    /// Each problem is reported on its own line; returns whether the entry
    /// was added.
    pub fn apply(store: &mut EntryStore, draft: EntryDraft) -> bool {
        let report = validate(&draft, store);

        for issue in &report.issues {
            match issue.severity() {
                Severity::Error => error(issue),
                Severity::Warning => warning(format!("Warning: {issue}")),
            }
        }

        if !report.passed() {
            return false;
        }

        match draft.into_entry() {
            Some(entry) => {
                let date = entry.date_str();
                let day = entry.day();
                let row = store.append(entry);
                success(format!("Tour entry added for {date} ({day}) at row {row}."));
                true
            }
            // ownership is checked by the validator
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ownership;
    use chrono::NaiveDate;

    fn draft(y: i32, m: u32, d: u32) -> EntryDraft {
        let mut draft = EntryDraft::new(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        draft.ownership = Some(Ownership::Private);
        draft
    }

    #[test]
    fn duplicate_date_does_not_grow_store() {
        let mut store = EntryStore::new();
        assert!(AddLogic::apply(&mut store, draft(2024, 3, 4)));
        assert!(!AddLogic::apply(&mut store, draft(2024, 3, 4)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_ownership_blocks() {
        let mut store = EntryStore::new();
        let mut d = draft(2024, 3, 5);
        d.ownership = None;
        assert!(!AddLogic::apply(&mut store, d));
        assert!(store.is_empty());
    }

    #[test]
    fn second_saturday_blocks_first_does_not() {
        let mut store = EntryStore::new();
        assert!(!AddLogic::apply(&mut store, draft(2024, 3, 9)));
        assert!(AddLogic::apply(&mut store, draft(2024, 3, 2)));
        assert_eq!(store.len(), 1);
    }
}
