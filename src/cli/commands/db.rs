use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Database maintenance: migrations, integrity check, vacuum, info.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date");
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                return Err(AppError::Migration(format!(
                    "Integrity check failed: {result}"
                )));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database optimized");
        }

        if *show_info {
            let days: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM scheduled_days", [], |r| r.get(0))?;
            let slots: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM time_slots", [], |r| r.get(0))?;

            info(format!("Database:       {}", cfg.database));
            info(format!("Scheduled days: {days}"));
            info(format!("Time slots:     {slots}"));
        }
    }
    Ok(())
}
