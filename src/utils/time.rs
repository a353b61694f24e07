//! Time of day as typed in the form.

use chrono::NaiveTime;

/// `HH:MM` (a one-digit hour is fine). Seconds or trailing text are refused.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hours_and_minutes_only() {
        assert_eq!(parse_time("09:00"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_time(" 14:30 "), NaiveTime::from_hms_opt(14, 30, 0));
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("10:30:45"), None);
        assert_eq!(parse_time("morning"), None);
    }
}
