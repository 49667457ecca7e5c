use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::fetch_or_create_schedule;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create config and database files, run migrations and make sure the
/// active schedule row exists.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    let schedule = fetch_or_create_schedule(&pool.conn, &cfg.schedule_name)?;

    success(format!("Schedule ready: {}", schedule.name));
    Ok(())
}
