use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `time_slots` table has an `enabled` column.
fn time_slots_has_enabled_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('time_slots')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "enabled" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the schedule tables with the modern schema.
///
/// `month` is stored 1-based (January = 1) while the in-memory calendar
/// model uses 0-based indexes; every scheduled day also carries its
/// absolute `scheduled_date` string.
fn create_schedule_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schedules (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            is_active  INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS scheduled_days (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            schedule_id    INTEGER NOT NULL REFERENCES schedules(id),
            scheduled_date TEXT NOT NULL,
            year           INTEGER NOT NULL,
            month          INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            day            INTEGER NOT NULL CHECK(day BETWEEN 1 AND 31),
            created_at     TEXT NOT NULL,
            UNIQUE(schedule_id, year, month, day)
        );

        CREATE TABLE IF NOT EXISTS time_slots (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            schedule_id INTEGER NOT NULL REFERENCES schedules(id),
            time        TEXT NOT NULL,
            enabled     INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_scheduled_days_period
            ON scheduled_days(schedule_id, year, month);
        CREATE INDEX IF NOT EXISTS idx_time_slots_schedule
            ON time_slots(schedule_id, time);
        "#,
    )?;
    Ok(())
}

/// Early databases shipped `time_slots` without the `enabled` toggle.
fn migrate_add_slot_enabled_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250630_0001_add_slot_enabled_flag";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    if time_slots_has_enabled_column(conn)? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE time_slots ADD COLUMN enabled INTEGER NOT NULL DEFAULT 1;",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'enabled' column: {}", e)),
        )
    })?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added enabled flag to time_slots')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'enabled' to time_slots table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create schedule tables if missing
    if !table_exists(conn, "scheduled_days")? {
        create_schedule_tables(conn)?;
        success("Created schedule tables (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_scheduled_days_period
                ON scheduled_days(schedule_id, year, month);
            CREATE INDEX IF NOT EXISTS idx_time_slots_schedule
                ON time_slots(schedule_id, time);
            "#,
        )?;

        migrate_add_slot_enabled_column(conn)?;
    }

    Ok(())
}
