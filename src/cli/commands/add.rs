use crate::cli::parser::SessionCommand;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::{EntryDraft, TimeField};

/// Fill the form from the typed options and the configured defaults, then
/// try to add it.
pub fn handle(cmd: &SessionCommand, store: &mut EntryStore, cfg: &Config) -> AppResult<()> {
    if let SessionCommand::Add { date, fields } = cmd {
        let mut draft = EntryDraft::new(*date);

        //
        // 1. Time: explicit, blank, or the configured default
        //
        draft.time = if fields.no_time {
            TimeField::Absent
        } else {
            match &fields.time {
                Some(t) => TimeField::from_input(t),
                None => cfg.default_time(),
            }
        };

        //
        // 2. Selections (ownership may still be missing)
        //
        draft.category = fields.category.unwrap_or_default();
        draft.ownership = fields.ownership.or_else(|| cfg.default_ownership());

        //
        // 3. Free text
        //
        draft.address = fields.address.clone().unwrap_or_default();
        draft.place_of_inspection = fields.place.clone().unwrap_or_default();
        draft.electrical_section = fields.section.clone().unwrap_or_default();
        draft.remarks = fields.remarks.clone().unwrap_or_default();

        AddLogic::apply(store, draft);
    }

    Ok(())
}
