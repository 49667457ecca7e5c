//! Terminal renderer for the month grid.
//!
//! Selected days are drawn green; bracket characters mark the edges of a
//! contiguous run so ranges read as pills: `[12 13 14]`, a lone day as
//! `[12]`. Past days are grey and today is highlighted when unselected.

use crate::core::calendar::{self, CalendarState, Cell, RunPosition};
use crate::errors::AppResult;
use crate::utils::colors::{BOLD, CYAN, GREEN, GREY, RESET};
use chrono::NaiveDate;

const WEEKDAY_HEADER: &str = "  S   M   T   W   T   F   S";

fn day_cell(state: &CalendarState, day: u32, today: NaiveDate) -> String {
    let (month, year) = (state.view_month, state.view_year);

    let body = match state.classify_run(day) {
        RunPosition::Single => format!("[{day:>2}]"),
        RunPosition::Start => format!("[{day:>2} "),
        RunPosition::End => format!(" {day:>2}]"),
        RunPosition::Middle => format!(" {day:>2} "),
        RunPosition::None => format!(" {day:>2} "),
    };

    if state.selected_days.contains(&day) {
        format!("{GREEN}{body}{RESET}")
    } else if calendar::is_past(day, month, year, today) {
        format!("{GREY}{body}{RESET}")
    } else if calendar::is_today(day, month, year, today) {
        format!("{CYAN}{BOLD}{body}{RESET}")
    } else {
        body
    }
}

/// Render the month view: title, weekday header, grid rows, legend.
pub fn render(state: &CalendarState, today: NaiveDate) -> AppResult<String> {
    let mut out = String::new();

    out.push_str(&format!(
        "{BOLD}        {} {}{RESET}\n",
        state.month_name().to_uppercase(),
        state.view_year
    ));
    out.push_str(WEEKDAY_HEADER);
    out.push('\n');

    let grid = calendar::build_grid(state.view_month, state.view_year)?;
    for (i, cell) in grid.iter().enumerate() {
        match cell {
            Cell::Blank => out.push_str("    "),
            Cell::Day(d) => out.push_str(&day_cell(state, *d, today)),
        }
        if i % 7 == 6 {
            out.push('\n');
        }
    }
    if grid.len() % 7 != 0 {
        out.push('\n');
    }

    out.push_str(&format!(
        "\n{GREEN}[n]{RESET} scheduled   {GREY}n{RESET} past    n  available\n"
    ));

    Ok(out)
}
