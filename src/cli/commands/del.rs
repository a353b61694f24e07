use crate::cli::parser::SessionCommand;
use crate::core::del::DeleteLogic;
use crate::core::store::EntryStore;
use crate::errors::AppResult;

/// Delete a row by its number in the listing.
pub fn handle(cmd: &SessionCommand, store: &mut EntryStore) -> AppResult<()> {
    if let SessionCommand::Del { row } = cmd {
        DeleteLogic::apply(store, *row)?;
    }
    Ok(())
}
