use crate::db::queries::DayRecord;
use crate::errors::AppResult;
use crate::models::schedule::Schedule;
use crate::models::slot::ScheduleSlot;
use serde::Serialize;
use std::fs::File;

#[derive(Serialize)]
struct ScheduleExport<'a> {
    schedule: &'a str,
    slots: &'a [ScheduleSlot],
    days: &'a [DayRecord],
}

/// Write the full schedule (slots included) as pretty JSON.
pub fn write_json(
    path: &str,
    schedule: &Schedule,
    slots: &[ScheduleSlot],
    days: &[DayRecord],
) -> AppResult<()> {
    let file = File::create(path)?;

    let export = ScheduleExport {
        schedule: &schedule.name,
        slots,
        days,
    };

    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| crate::errors::AppError::Export(e.to_string()))?;

    Ok(())
}
