use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::irlog;
use crate::db::pool::DbPool;
use crate::db::queries::fetch_or_create_schedule;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

/// Export scheduled days to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let schedule = fetch_or_create_schedule(&pool.conn, &cfg.schedule_name)?;

        // the store keeps months 1-based
        let period = match month {
            Some(s) => {
                let (m, y) = date::parse_month_arg(s)?;
                Some((m + 1, y))
            }
            None => None,
        };

        ExportLogic::run(&mut pool, &schedule, format, file, period, *force)?;
        irlog(&pool.conn, "export", file, "Scheduled days exported")?;
    }
    Ok(())
}
