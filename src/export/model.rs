// src/export/model.rs

use crate::models::TourEntry;
use serde::Serialize;

/// Flat row for the CSV / JSON / XLSX table exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Place of Inspection")]
    pub place_of_inspection: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Ownership")]
    pub ownership: String,
    #[serde(rename = "Electrical Section")]
    pub electrical_section: String,
    #[serde(rename = "Remarks")]
    pub remarks: String,
}

impl From<&TourEntry> for EntryExport {
    fn from(e: &TourEntry) -> Self {
        Self {
            date: e.date_str(),
            time: e.time.display(),
            day: e.day().to_string(),
            place_of_inspection: e.place_of_inspection.clone(),
            address: e.address.clone(),
            category: e.category.label().to_string(),
            ownership: e.ownership.label().to_string(),
            electrical_section: e.electrical_section.clone(),
            remarks: e.remarks.clone(),
        }
    }
}

/// Header for CSV / XLSX, in column order
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Time",
        "Day",
        "Place of Inspection",
        "Address",
        "Category",
        "Ownership",
        "Electrical Section",
        "Remarks",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.time.clone(),
        e.day.clone(),
        e.place_of_inspection.clone(),
        e.address.clone(),
        e.category.clone(),
        e.ownership.clone(),
        e.electrical_section.clone(),
        e.remarks.clone(),
    ]
}

pub(crate) fn entries_to_export(entries: &[TourEntry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}
