use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::{Category, Ownership, TimeField};
use crate::ui::messages::{info, success};
use chrono::NaiveDate;

/// Fields to change on an existing row; `None` leaves the field alone.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EntryEdit {
    pub date: Option<NaiveDate>,
    pub time: Option<TimeField>,
    pub place_of_inspection: Option<String>,
    pub address: Option<String>,
    pub category: Option<Category>,
    pub ownership: Option<Ownership>,
    pub electrical_section: Option<String>,
    pub remarks: Option<String>,
}

impl EntryEdit {
    pub fn is_empty(&self) -> bool {
        *self == EntryEdit::default()
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Apply the changes to row `row` as-is: edits are not validated again,
    /// so a date may end up duplicated or on a Sunday.
    pub fn apply(store: &mut EntryStore, row: usize, edit: EntryEdit) -> AppResult<()> {
        if edit.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let entry = store.get_mut(row)?;

        if let Some(date) = edit.date {
            entry.set_date(date);
        }
        if let Some(time) = edit.time {
            entry.time = time;
        }
        if let Some(v) = edit.place_of_inspection {
            entry.place_of_inspection = v;
        }
        if let Some(v) = edit.address {
            entry.address = v;
        }
        if let Some(v) = edit.category {
            entry.category = v;
        }
        if let Some(v) = edit.ownership {
            entry.ownership = v;
        }
        if let Some(v) = edit.electrical_section {
            entry.electrical_section = v;
        }
        if let Some(v) = edit.remarks {
            entry.remarks = v;
        }

        tracing::debug!(row, date = %entry.date(), "entry edited");
        let msg = format!("✏️ Row {} updated ({} {}).", row, entry.date_str(), entry.day());

        // a new date may move the row
        if edit.date.is_some() {
            store.sort_by_date();
        }
        success(msg);
        Ok(())
    }
}
