//! Time of the visit as entered in the form.

use crate::utils::time::parse_time;
use chrono::NaiveTime;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TimeField {
    /// A proper time of day.
    Structured(NaiveTime),
    /// Whatever text was typed when it did not parse as `HH:MM`.
    Raw(String),
    #[default]
    Absent,
}

impl TimeField {
    /// Build from user input: `HH:MM` becomes `Structured`, blank becomes
    /// `Absent`, anything else is kept verbatim.
    pub fn from_input(s: &str) -> Self {
        if s.trim().is_empty() {
            return TimeField::Absent;
        }
        match parse_time(s.trim()) {
            Some(t) => TimeField::Structured(t),
            None => TimeField::Raw(s.to_string()),
        }
    }

    /// Cell text: `HH:MM`, the first five characters of a raw value, or empty.
    pub fn display(&self) -> String {
        match self {
            TimeField::Structured(t) => t.format("%H:%M").to_string(),
            TimeField::Raw(s) => s.chars().take(5).collect(),
            TimeField::Absent => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_time_formats_as_hh_mm() {
        let t = TimeField::from_input("9:05");
        assert_eq!(
            t,
            TimeField::Structured(NaiveTime::from_hms_opt(9, 5, 0).unwrap())
        );
        assert_eq!(t.display(), "09:05");
    }

    #[test]
    fn raw_time_keeps_first_five_chars() {
        let t = TimeField::from_input("10:30:45 approx");
        assert!(matches!(t, TimeField::Raw(_)));
        assert_eq!(t.display(), "10:30");

        assert_eq!(TimeField::Raw("am".into()).display(), "am");
    }

    #[test]
    fn blank_time_is_absent() {
        assert_eq!(TimeField::from_input("   "), TimeField::Absent);
        assert_eq!(TimeField::Absent.display(), "");
    }
}
