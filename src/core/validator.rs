//! Calendar rules applied before an entry is added.

use crate::core::store::EntryStore;
use crate::models::EntryDraft;
use crate::utils::date::{is_second_saturday, is_sunday};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    OwnershipMissing,
    DateAlreadyBooked,
    Sunday,
    SecondSaturday,
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::OwnershipMissing => Severity::Error,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationIssue::OwnershipMissing => "Ownership is required!",
            ValidationIssue::DateAlreadyBooked => "Date already booked!",
            ValidationIssue::Sunday => "Selected date is a Sunday.",
            ValidationIssue::SecondSaturday => "Selected date is the second Saturday.",
        };
        f.write_str(msg)
    }
}

/// Outcome of all checks. Every issue blocks insertion, warnings included.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has(&self, issue: ValidationIssue) -> bool {
        self.issues.contains(&issue)
    }
}

/// Run every check against the store; none short-circuits.
pub fn validate(draft: &EntryDraft, store: &EntryStore) -> ValidationReport {
    let mut issues = Vec::new();

    if draft.ownership.is_none() {
        issues.push(ValidationIssue::OwnershipMissing);
    }
    if store.contains_date(draft.date) {
        issues.push(ValidationIssue::DateAlreadyBooked);
    }
    if is_sunday(draft.date) {
        issues.push(ValidationIssue::Sunday);
    }
    if is_second_saturday(draft.date) {
        issues.push(ValidationIssue::SecondSaturday);
    }

    tracing::debug!(date = %draft.date, issues = ?issues, "draft validated");
    ValidationReport { issues }
}
