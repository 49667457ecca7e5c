use crate::core::planner::SelectionStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::Schedule;
use crate::models::slot::ScheduleSlot;
use crate::utils::date;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};
use std::collections::BTreeSet;

/// Return the active schedule, creating it on first use.
/// Mirrors the original fetch-or-create behavior: there is exactly one
/// active schedule and everything else hangs off its id.
pub fn fetch_or_create_schedule(conn: &Connection, name: &str) -> AppResult<Schedule> {
    let existing = conn
        .query_row(
            "SELECT id, name, is_active, created_at FROM schedules
             WHERE is_active = 1
             ORDER BY id LIMIT 1",
            [],
            map_schedule_row,
        )
        .optional()?;

    if let Some(schedule) = existing {
        return Ok(schedule);
    }

    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO schedules (name, is_active, created_at) VALUES (?1, 1, ?2)",
        params![name, created_at],
    )?;

    Ok(Schedule {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
        active: true,
        created_at,
    })
}

fn map_schedule_row(row: &Row) -> Result<Schedule> {
    Ok(Schedule {
        id: row.get("id")?,
        name: row.get("name")?,
        active: row.get::<_, i32>("is_active")? == 1,
        created_at: row.get("created_at")?,
    })
}

fn map_slot_row(row: &Row) -> Result<ScheduleSlot> {
    Ok(ScheduleSlot {
        id: row.get("id")?,
        time: row.get("time")?,
        enabled: row.get::<_, i32>("enabled")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// All time slots of a schedule. SQL orders by the raw label; the caller
/// re-sorts by clock time since "10:00 AM" sorts after "08:00 PM" as text.
pub fn load_slots(pool: &mut DbPool, schedule_id: i64) -> AppResult<Vec<ScheduleSlot>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, time, enabled, created_at FROM time_slots
         WHERE schedule_id = ?1
         ORDER BY time ASC",
    )?;

    let rows = stmt.query_map([schedule_id], map_slot_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_slot(conn: &Connection, schedule_id: i64, label: &str) -> AppResult<ScheduleSlot> {
    let created_at = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO time_slots (schedule_id, time, enabled, created_at)
         VALUES (?1, ?2, 1, ?3)",
        params![schedule_id, label, created_at],
    )?;

    Ok(ScheduleSlot {
        id: conn.last_insert_rowid(),
        time: label.to_string(),
        enabled: true,
        created_at,
    })
}

pub fn set_slot_enabled(conn: &Connection, slot_id: i64, enabled: bool) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE time_slots SET enabled = ?1 WHERE id = ?2",
        params![if enabled { 1 } else { 0 }, slot_id],
    )?;

    if changed == 0 {
        return Err(AppError::UnknownSlot(slot_id));
    }
    Ok(())
}

pub fn delete_slot(conn: &Connection, slot_id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM time_slots WHERE id = ?1", [slot_id])?;

    if changed == 0 {
        return Err(AppError::UnknownSlot(slot_id));
    }
    Ok(())
}

/// A persisted scheduled-day row, as exported.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DayRecord {
    pub scheduled_date: String,
    pub year: i32,
    pub month: u32, // 1-based, as stored
    pub day: u32,
}

/// Scheduled days of a schedule, optionally narrowed to one 1-based
/// month/year period, ordered by date.
pub fn load_day_records(
    pool: &mut DbPool,
    schedule_id: i64,
    period: Option<(u32, i32)>,
) -> AppResult<Vec<DayRecord>> {
    let map = |row: &Row| -> Result<DayRecord> {
        Ok(DayRecord {
            scheduled_date: row.get("scheduled_date")?,
            year: row.get("year")?,
            month: row.get("month")?,
            day: row.get("day")?,
        })
    };

    let mut out = Vec::new();
    match period {
        Some((month1, year)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT scheduled_date, year, month, day FROM scheduled_days
                 WHERE schedule_id = ?1 AND month = ?2 AND year = ?3
                 ORDER BY scheduled_date ASC",
            )?;
            let rows = stmt.query_map(params![schedule_id, month1, year], map)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = pool.conn.prepare(
                "SELECT scheduled_date, year, month, day FROM scheduled_days
                 WHERE schedule_id = ?1
                 ORDER BY scheduled_date ASC",
            )?;
            let rows = stmt.query_map([schedule_id], map)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// SQLite-backed persistence collaborator for the month planner.
/// Translates the model's 0-based month into the 1-based stored form.
pub struct SqliteStore<'a> {
    pool: &'a mut DbPool,
    schedule_id: i64,
}

impl<'a> SqliteStore<'a> {
    pub fn new(pool: &'a mut DbPool, schedule_id: i64) -> Self {
        Self { pool, schedule_id }
    }
}

impl SelectionStore for SqliteStore<'_> {
    fn list_selected_days(&mut self, month: u32, year: i32) -> AppResult<BTreeSet<u32>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT day FROM scheduled_days
             WHERE schedule_id = ?1 AND month = ?2 AND year = ?3",
        )?;

        let rows = stmt.query_map(params![self.schedule_id, month + 1, year], |row| {
            row.get::<_, u32>(0)
        })?;

        let mut days = BTreeSet::new();
        for r in rows {
            days.insert(r?);
        }
        Ok(days)
    }

    fn add_selected_day(&mut self, month: u32, year: i32, day: u32) -> AppResult<()> {
        let scheduled_date = date::iso_date(day, month, year)?;
        self.pool.conn.execute(
            "INSERT OR IGNORE INTO scheduled_days
                 (schedule_id, scheduled_date, year, month, day, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                self.schedule_id,
                scheduled_date,
                year,
                month + 1,
                day,
                Local::now().to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn remove_selected_day(&mut self, month: u32, year: i32, day: u32) -> AppResult<()> {
        self.pool.conn.execute(
            "DELETE FROM scheduled_days
             WHERE schedule_id = ?1 AND year = ?2 AND month = ?3 AND day = ?4",
            params![self.schedule_id, year, month + 1, day],
        )?;
        Ok(())
    }
}
