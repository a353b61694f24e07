use crate::core::store::EntryStore;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::{Column, Table};

/// Sort the table and print it; row numbers are the ones `edit`/`del` take.
pub fn handle(store: &mut EntryStore) -> AppResult<()> {
    if store.is_empty() {
        info("No entries yet. Use `add` to plan a visit.");
        return Ok(());
    }

    store.sort_by_date();

    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("Date", 10),
        Column::new("Time", 5),
        Column::new("Day", 9),
        Column::new("Category", 20),
        Column::new("Ownership", 16),
        Column::new("Place", 14),
        Column::new("Address", 28),
        Column::new("Section", 14),
        Column::new("Remarks", 20),
    ]);

    for (i, e) in store.entries().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            e.date_str(),
            e.time.display(),
            e.day().to_string(),
            e.category.label().to_string(),
            e.ownership.label().to_string(),
            e.place_of_inspection.clone(),
            e.address.replace('\n', " "),
            e.electrical_section.clone(),
            e.remarks.replace('\n', " "),
        ]);
    }

    header("Tour Program Schedule");
    if std::env::var_os("NO_COLOR").is_some() {
        print!("{}", table.render());
    } else {
        print!("{}", table.render_styled());
    }
    Ok(())
}
