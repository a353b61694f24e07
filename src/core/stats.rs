use crate::core::store::EntryStore;
use std::collections::HashSet;

/// Figures shown next to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub total_inspections: usize,
    /// Distinct place-of-inspection values, the blank one included.
    pub unique_places: usize,
}

impl SessionStats {
    pub fn compute(store: &EntryStore) -> Self {
        let places: HashSet<&str> = store
            .entries()
            .iter()
            .map(|e| e.place_of_inspection.as_str())
            .collect();
        Self {
            total_inspections: store.len(),
            unique_places: places.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Ownership};
    use chrono::NaiveDate;

    #[test]
    fn counts_distinct_places() {
        let mut store = EntryStore::new();
        assert_eq!(
            SessionStats::compute(&store),
            SessionStats {
                total_inspections: 0,
                unique_places: 0
            }
        );

        for (day, place) in [(4, "Palakkad"), (5, "Ottapalam"), (6, "Palakkad"), (7, "")] {
            let mut d = EntryDraft::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap());
            d.ownership = Some(Ownership::Private);
            d.place_of_inspection = place.into();
            store.append(d.into_entry().unwrap());
        }

        let stats = SessionStats::compute(&store);
        assert_eq!(stats.total_inspections, 4);
        assert_eq!(stats.unique_places, 3);
    }
}
