use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(store: &mut EntryStore, row: usize) -> AppResult<()> {
        let removed = store.remove(row)?;
        tracing::debug!(row, date = %removed.date(), "entry deleted");
        info(format!("Deleted row {} ({})", row, removed.date_str()));
        Ok(())
    }
}
