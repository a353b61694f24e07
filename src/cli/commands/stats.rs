use crate::core::stats::SessionStats;
use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(store: &EntryStore) -> AppResult<()> {
    let stats = SessionStats::compute(store);
    header("Summary Statistics");
    println!("Total Inspections     : {}", stats.total_inspections);
    println!("Unique Places Visited : {}", stats.unique_places);
    Ok(())
}
