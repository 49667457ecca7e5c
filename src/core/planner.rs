//! Month planner: ties the pure calendar model to the persistence
//! collaborator.
//!
//! Every selection change is persisted first and applied to the in-memory
//! set only after the store confirmed it, so a failed write leaves the
//! model in agreement with the source of truth. Reloads are keyed on the
//! month/year captured at request time; a result for any other period is
//! stale and must not be applied.

use crate::core::calendar::{self, CalendarState, Toggle};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Persistence collaborator for the per-month selected-day set.
/// `month` is the 0-based model index; implementations decide how to
/// store it.
pub trait SelectionStore {
    fn list_selected_days(&mut self, month: u32, year: i32) -> AppResult<BTreeSet<u32>>;
    fn add_selected_day(&mut self, month: u32, year: i32, day: u32) -> AppResult<()>;
    fn remove_selected_day(&mut self, month: u32, year: i32, day: u32) -> AppResult<()>;
}

#[derive(Debug)]
pub struct MonthPlanner<'a, S: SelectionStore> {
    pub state: CalendarState,
    store: &'a mut S,
    today: NaiveDate,
}

impl<'a, S: SelectionStore> MonthPlanner<'a, S> {
    /// Open the planner on the real-world current month.
    pub fn open(store: &'a mut S, today: NaiveDate) -> AppResult<Self> {
        let mut planner = Self {
            state: CalendarState::for_today(today),
            store,
            today,
        };
        planner.reload()?;
        Ok(planner)
    }

    /// Open the planner on an explicit month. Months strictly before the
    /// current real-world month are unreachable through navigation and
    /// are refused here too.
    pub fn open_at(store: &'a mut S, today: NaiveDate, month: u32, year: i32) -> AppResult<Self> {
        let state = CalendarState::new(month, year)?;

        let mut probe = state.clone();
        probe.advance_month(1);
        if !probe.can_navigate_to_previous_month(today) {
            return Err(AppError::PastMonth(format!(
                "{} {}",
                state.month_name(),
                year
            )));
        }

        let mut planner = Self {
            state,
            store,
            today,
        };
        planner.reload()?;
        Ok(planner)
    }

    /// Re-fetch the selected-day set for the period displayed right now.
    /// The period is captured before the round-trip; if the view moved in
    /// the meantime the response is stale and is dropped.
    pub fn reload(&mut self) -> AppResult<()> {
        let (month, year) = (self.state.view_month, self.state.view_year);
        let days = self.store.list_selected_days(month, year)?;

        if (month, year) == (self.state.view_month, self.state.view_year) {
            self.state.selected_days = days;
        }
        Ok(())
    }

    /// Toggle a day: persist the change, then flip the in-memory set.
    /// Past days are locked without touching the store.
    pub fn toggle(&mut self, day: u32) -> AppResult<Toggle> {
        let (month, year) = (self.state.view_month, self.state.view_year);
        let days = calendar::days_in_month(month, year)?;
        if day < 1 || day > days {
            return Err(AppError::InvalidDay(day));
        }
        if calendar::is_past(day, month, year, self.today) {
            return Ok(Toggle::PastLocked);
        }

        if self.state.selected_days.contains(&day) {
            self.store.remove_selected_day(month, year, day)?;
        } else {
            self.store.add_selected_day(month, year, day)?;
        }

        self.state.toggle_day(day, self.today)
    }

    /// Move to the next month and reload its selection set.
    pub fn goto_next(&mut self) -> AppResult<()> {
        self.state.advance_month(1);
        self.reload()
    }

    /// Move to the previous month if navigation is allowed; returns false
    /// when already at the current real-world month.
    pub fn goto_prev(&mut self) -> AppResult<bool> {
        if !self.state.can_navigate_to_previous_month(self.today) {
            return Ok(false);
        }
        self.state.advance_month(-1);
        self.reload()?;
        Ok(true)
    }

    /// Schedule every selectable (non-past, not yet selected) day of the
    /// viewed month. Returns the number of days added.
    pub fn fill_month(&mut self) -> AppResult<u32> {
        let (month, year) = (self.state.view_month, self.state.view_year);
        let days = calendar::days_in_month(month, year)?;

        let mut added = 0;
        for day in 1..=days {
            if calendar::is_past(day, month, year, self.today)
                || self.state.selected_days.contains(&day)
            {
                continue;
            }
            self.store.add_selected_day(month, year, day)?;
            self.state.selected_days.insert(day);
            added += 1;
        }
        Ok(added)
    }

    /// Unschedule every selected day of the viewed month. Returns the
    /// number of days removed.
    pub fn clear_month(&mut self) -> AppResult<u32> {
        let (month, year) = (self.state.view_month, self.state.view_year);
        let selected: Vec<u32> = self.state.selected_days.iter().copied().collect();

        let mut removed = 0;
        for day in selected {
            self.store.remove_selected_day(month, year, day)?;
            self.state.selected_days.remove(&day);
            removed += 1;
        }
        Ok(removed)
    }
}
