use crate::core::slots::SlotLogic;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::schedule::Schedule;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the scheduled days (and, for JSON, the time slots) to a
    /// file. `period` is the 1-based (month, year) filter; None exports
    /// every persisted month.
    pub fn run(
        pool: &mut DbPool,
        schedule: &Schedule,
        format: &ExportFormat,
        file: &str,
        period: Option<(u32, i32)>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "File already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let days = queries::load_day_records(pool, schedule.id, period)?;

        match format {
            ExportFormat::Csv => csv::write_csv(file, &days)?,
            ExportFormat::Json => {
                let slots = SlotLogic::list(pool, schedule.id)?;
                json::write_json(file, schedule, &slots, &days)?;
            }
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
