use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::EntryStore;
use crate::core::validator::validate;
use crate::errors::AppResult;
use crate::models::{EntryDraft, Ownership};
use crate::ui::messages::{success, warning};
use crate::utils::date::{second_saturday, weekday_name};

/// Run the calendar rules on each date, as if adding it to an empty table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { dates } = cmd {
        let store = EntryStore::new();

        for date in dates {
            let mut draft = EntryDraft::new(*date);
            draft.ownership = Some(cfg.default_ownership().unwrap_or(Ownership::Private));
            let report = validate(&draft, &store);

            println!(
                "{} {} (second Saturday of the month: {})",
                date,
                weekday_name(*date),
                second_saturday(*date)
            );

            if report.passed() {
                success(format!("{date} is available"));
            } else {
                let reasons: Vec<String> = report.issues.iter().map(|i| i.to_string()).collect();
                warning(format!("{date} is not available: {}", reasons.join(" ")));
            }
        }
    }
    Ok(())
}
