use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a "YYYY-MM" argument into the model's (month0, year) pair.
pub fn parse_month_arg(s: &str) -> AppResult<(u32, i32)> {
    let d = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    Ok((d.month0(), d.year()))
}

/// Resolve an optional "YYYY-MM" argument, defaulting to today's month.
pub fn resolve_month_arg(arg: Option<&String>, today: NaiveDate) -> AppResult<(u32, i32)> {
    match arg {
        Some(s) => parse_month_arg(s),
        None => Ok((today.month0(), today.year())),
    }
}

/// "YYYY-MM-DD" string for a model (day, month0, year) triple.
pub fn iso_date(day: u32, month: u32, year: i32) -> AppResult<String> {
    let d = NaiveDate::from_ymd_opt(year, month + 1, day)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{:02}-{day:02}", month + 1)))?;
    Ok(d.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_arg_parsing() {
        assert_eq!(parse_month_arg("2026-01").unwrap(), (0, 2026));
        assert_eq!(parse_month_arg("2024-12").unwrap(), (11, 2024));
        assert!(parse_month_arg("2024-13").is_err());
        assert!(parse_month_arg("june").is_err());
    }

    #[test]
    fn iso_dates_are_one_based() {
        assert_eq!(iso_date(5, 1, 2024).unwrap(), "2024-02-05");
        assert!(iso_date(30, 1, 2024).is_err());
    }
}
