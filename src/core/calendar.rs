//! Pure calendar selection model for the monthly irrigation planner.
//!
//! Months are indexed 0-11 (January = 0) and days 1..=days_in_month.
//! Selected days are scoped to the displayed month: the set is reloaded
//! from storage whenever the view moves to another month, so a membership
//! value here never refers to a different period than the one on screen.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One cell of the month grid: a leading blank before the 1st, or a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day(u32),
}

/// Position of a selected day inside a contiguous run, used by the
/// renderer to draw "pill" range highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPosition {
    None,
    Single,
    Start,
    Middle,
    End,
}

/// Outcome of a toggle attempt on a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added(u32),
    Removed(u32),
    /// The day is strictly before today; disabled cells cannot be toggled.
    PastLocked,
}

fn check_month(month: u32) -> AppResult<()> {
    if month > 11 {
        return Err(AppError::InvalidMonth(month));
    }
    Ok(())
}

/// Gregorian leap year rule: divisible by 4, except centuries not
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of calendar days in the given 0-based month.
pub fn days_in_month(month: u32, year: i32) -> AppResult<u32> {
    check_month(month)?;
    Ok(match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    })
}

/// Weekday index (0 = Sunday) of the first day of the month.
pub fn first_weekday_of_month(month: u32, year: i32) -> AppResult<u32> {
    check_month(month)?;
    let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{:02}-01", month + 1)))?;
    Ok(first.weekday().num_days_from_sunday())
}

/// Month grid: `first_weekday_of_month` blanks, then days 1..=days_in_month.
/// Padding the trailing row to 7 columns is the renderer's concern.
pub fn build_grid(month: u32, year: i32) -> AppResult<Vec<Cell>> {
    let lead = first_weekday_of_month(month, year)?;
    let days = days_in_month(month, year)?;

    let mut grid = Vec::with_capacity((lead + days) as usize);
    for _ in 0..lead {
        grid.push(Cell::Blank);
    }
    for d in 1..=days {
        grid.push(Cell::Day(d));
    }
    Ok(grid)
}

/// True if the candidate date is strictly earlier than `today`.
/// Both sides are calendar dates, so midnight normalization is implicit.
pub fn is_past(day: u32, month: u32, year: i32, today: NaiveDate) -> bool {
    match NaiveDate::from_ymd_opt(year, month + 1, day) {
        Some(d) => d < today,
        None => false,
    }
}

/// Exact calendar-date equality against `today`.
pub fn is_today(day: u32, month: u32, year: i32, today: NaiveDate) -> bool {
    day == today.day() && month == today.month0() && year == today.year()
}

/// The displayed month/year and the set of days marked scheduled for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    pub view_month: u32,
    pub view_year: i32,
    pub selected_days: BTreeSet<u32>,
}

impl CalendarState {
    pub fn new(month: u32, year: i32) -> AppResult<Self> {
        check_month(month)?;
        Ok(Self {
            view_month: month,
            view_year: year,
            selected_days: BTreeSet::new(),
        })
    }

    /// State positioned on the real-world current month.
    pub fn for_today(today: NaiveDate) -> Self {
        Self {
            view_month: today.month0(),
            view_year: today.year(),
            selected_days: BTreeSet::new(),
        }
    }

    /// Flip membership of `day` in the selected set. Past days are
    /// rejected silently (`Toggle::PastLocked`); days outside the month
    /// are an error the grid can never produce.
    pub fn toggle_day(&mut self, day: u32, today: NaiveDate) -> AppResult<Toggle> {
        let days = days_in_month(self.view_month, self.view_year)?;
        if day < 1 || day > days {
            return Err(AppError::InvalidDay(day));
        }
        if is_past(day, self.view_month, self.view_year, today) {
            return Ok(Toggle::PastLocked);
        }

        if self.selected_days.remove(&day) {
            Ok(Toggle::Removed(day))
        } else {
            self.selected_days.insert(day);
            Ok(Toggle::Added(day))
        }
    }

    /// Classify a day against its neighbors. Day 0 and day
    /// `days_in_month + 1` are never members, so runs never chain into an
    /// adjacent month.
    pub fn classify_run(&self, day: u32) -> RunPosition {
        if !self.selected_days.contains(&day) {
            return RunPosition::None;
        }

        let prev = day > 1 && self.selected_days.contains(&(day - 1));
        let next = self.selected_days.contains(&(day + 1));

        match (prev, next) {
            (false, false) => RunPosition::Single,
            (false, true) => RunPosition::Start,
            (true, false) => RunPosition::End,
            (true, true) => RunPosition::Middle,
        }
    }

    /// Backward navigation stops at the calendar month containing `today`.
    /// The comparison is month-granularity, not day-granularity.
    pub fn can_navigate_to_previous_month(&self, today: NaiveDate) -> bool {
        let prev = self.view_year * 12 + self.view_month as i32 - 1;
        let current = today.year() * 12 + today.month0() as i32;
        prev >= current
    }

    /// Move the view by `delta` months, wrapping year boundaries.
    /// Does not reload `selected_days`; that is the caller's job.
    pub fn advance_month(&mut self, delta: i32) {
        let total = self.view_year * 12 + self.view_month as i32 + delta;
        self.view_year = total.div_euclid(12);
        self.view_month = total.rem_euclid(12) as u32;
    }

    pub fn month_name(&self) -> &'static str {
        MONTHS[self.view_month as usize]
    }
}
