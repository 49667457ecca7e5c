use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::MONTHS;
use crate::core::planner::MonthPlanner;
use crate::db::log::irlog;
use crate::db::pool::DbPool;
use crate::db::queries::{SqliteStore, fetch_or_create_schedule};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Unschedule every selected day of the month.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { month } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let schedule = fetch_or_create_schedule(&pool.conn, &cfg.schedule_name)?;

        let today = date::today();
        let (m, y) = date::resolve_month_arg(month.as_ref(), today)?;

        let removed = {
            let mut store = SqliteStore::new(&mut pool, schedule.id);
            let mut planner = MonthPlanner::open_at(&mut store, today, m, y)?;
            planner.clear_month()?
        };

        let label = format!("{} {}", MONTHS[m as usize], y);
        if removed == 0 {
            info(format!("Nothing scheduled in {label}"));
        } else {
            irlog(
                &pool.conn,
                "month_cleared",
                &format!("{y}-{:02}", m + 1),
                "All scheduled days removed",
            )?;
            success(format!("Unscheduled {removed} days in {label}"));
        }
    }
    Ok(())
}
