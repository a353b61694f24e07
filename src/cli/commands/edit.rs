use crate::cli::parser::SessionCommand;
use crate::core::edit::{EditLogic, EntryEdit};
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::models::TimeField;

pub fn handle(cmd: &SessionCommand, store: &mut EntryStore) -> AppResult<()> {
    if let SessionCommand::Edit { row, date, fields } = cmd {
        let time = if fields.no_time {
            Some(TimeField::Absent)
        } else {
            fields.time.as_deref().map(TimeField::from_input)
        };

        let edit = EntryEdit {
            date: *date,
            time,
            place_of_inspection: fields.place.clone(),
            address: fields.address.clone(),
            category: fields.category,
            ownership: fields.ownership,
            electrical_section: fields.section.clone(),
            remarks: fields.remarks.clone(),
        };

        EditLogic::apply(store, *row, edit)?;
    }
    Ok(())
}
