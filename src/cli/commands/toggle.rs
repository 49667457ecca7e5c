use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{MONTHS, Toggle};
use crate::core::planner::MonthPlanner;
use crate::db::log::irlog;
use crate::db::pool::DbPool;
use crate::db::queries::{SqliteStore, fetch_or_create_schedule};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Toggle a watering day on the month calendar.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { day, month } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let schedule = fetch_or_create_schedule(&pool.conn, &cfg.schedule_name)?;

        let today = date::today();
        let (m, y) = date::resolve_month_arg(month.as_ref(), today)?;

        let outcome = {
            let mut store = SqliteStore::new(&mut pool, schedule.id);
            let mut planner = MonthPlanner::open_at(&mut store, today, m, y)?;
            planner.toggle(*day)?
        };

        let label = format!("{} {}", MONTHS[m as usize], y);
        match outcome {
            Toggle::Added(d) => {
                let target = date::iso_date(d, m, y)?;
                irlog(&pool.conn, "day_scheduled", &target, "Watering day scheduled")?;
                success(format!("Day {d} scheduled for {label}"));
            }
            Toggle::Removed(d) => {
                let target = date::iso_date(d, m, y)?;
                irlog(&pool.conn, "day_unscheduled", &target, "Watering day unscheduled")?;
                success(format!("Day {d} unscheduled for {label}"));
            }
            Toggle::PastLocked => {
                warning(format!("Day {day} of {label} is in the past, nothing changed"));
            }
        }
    }
    Ok(())
}
