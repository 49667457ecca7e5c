//! Watering-time helpers: parsing "HH:MM" + AM/PM labels and ordering
//! slots by clock time.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Parse a 12-hour "HH:MM" string (hours 1-12, minutes 0-59).
pub fn parse_clock(t: &str) -> Option<(u32, u32)> {
    let (h, m) = t.split_once(':')?;
    let hour: u32 = h.trim().parse().ok()?;
    let minute: u32 = m.trim().parse().ok()?;

    if (1..=12).contains(&hour) && minute < 60 {
        Some((hour, minute))
    } else {
        None
    }
}

/// Build the canonical slot label, e.g. "08:00 AM".
pub fn slot_label(time: &str, period: &str) -> AppResult<String> {
    let (hour, minute) =
        parse_clock(time).ok_or_else(|| AppError::InvalidTime(time.to_string()))?;

    let period = period.to_uppercase();
    if period != "AM" && period != "PM" {
        return Err(AppError::InvalidTime(format!("{time} {period}")));
    }

    Ok(format!("{hour:02}:{minute:02} {period}"))
}

/// Minutes past midnight for a slot label; None if the label is malformed.
pub fn minutes_of(label: &str) -> Option<u32> {
    let t = NaiveTime::parse_from_str(label, "%I:%M %p").ok()?;
    Some(t.hour() * 60 + t.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_parsing_enforces_twelve_hour_range() {
        assert_eq!(parse_clock("08:00"), Some((8, 0)));
        assert_eq!(parse_clock("12:59"), Some((12, 59)));
        assert_eq!(parse_clock("0:30"), None);
        assert_eq!(parse_clock("13:00"), None);
        assert_eq!(parse_clock("08:60"), None);
        assert_eq!(parse_clock("eight"), None);
    }

    #[test]
    fn labels_are_canonicalized() {
        assert_eq!(slot_label("8:5", "am").unwrap(), "08:05 AM");
        assert_eq!(slot_label("12:00", "PM").unwrap(), "12:00 PM");
        assert!(slot_label("08:00", "XX").is_err());
    }

    #[test]
    fn minutes_follow_the_clock() {
        assert_eq!(minutes_of("12:00 AM"), Some(0)); // midnight
        assert_eq!(minutes_of("08:00 AM"), Some(480));
        assert_eq!(minutes_of("12:30 PM"), Some(750));
        assert_eq!(minutes_of("11:59 PM"), Some(1439));
        assert_eq!(minutes_of("garbage"), None);
    }
}
