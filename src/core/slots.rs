//! Watering-time slot lifecycle: add, enable/disable, delete, ordering.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::slot::ScheduleSlot;
use crate::utils::time;

pub struct SlotLogic;

impl SlotLogic {
    /// Create a slot from a 12-hour clock string and an AM/PM period.
    /// New slots start enabled, like the original add action.
    pub fn add(
        pool: &mut DbPool,
        schedule_id: i64,
        clock: &str,
        period: &str,
    ) -> AppResult<ScheduleSlot> {
        let label = time::slot_label(clock, period)?;
        queries::insert_slot(&pool.conn, schedule_id, &label)
    }

    /// Slots of a schedule ordered by clock time, not label text.
    pub fn list(pool: &mut DbPool, schedule_id: i64) -> AppResult<Vec<ScheduleSlot>> {
        let mut slots = queries::load_slots(pool, schedule_id)?;
        slots.sort_by_key(|s| s.minutes());
        Ok(slots)
    }

    pub fn set_enabled(pool: &mut DbPool, slot_id: i64, enabled: bool) -> AppResult<()> {
        queries::set_slot_enabled(&pool.conn, slot_id, enabled)
    }

    pub fn delete(pool: &mut DbPool, slot_id: i64) -> AppResult<()> {
        queries::delete_slot(&pool.conn, slot_id)
    }

    /// "Next watering": the earliest enabled slot by clock time.
    /// Expects `slots` already ordered by `list`.
    pub fn next_watering(slots: &[ScheduleSlot]) -> Option<&ScheduleSlot> {
        slots.iter().find(|s| s.enabled)
    }

    /// A schedule is actionable only with at least one selected day and
    /// at least one enabled slot.
    pub fn ready(selected_days: usize, slots: &[ScheduleSlot]) -> bool {
        selected_days > 0 && slots.iter().any(|s| s.enabled)
    }
}
