use crate::utils::time;
use serde::Serialize;

/// A watering time entry attached to the schedule.
/// Created via an explicit add, toggled on/off, deleted; no expiry.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSlot {
    pub id: i64,
    pub time: String, // label, e.g. "08:00 AM"
    pub enabled: bool,
    pub created_at: String, // ISO8601
}

impl ScheduleSlot {
    /// Minutes past midnight, used to order slots by clock time.
    /// Malformed labels sort last.
    pub fn minutes(&self) -> u32 {
        time::minutes_of(&self.time).unwrap_or(u32::MAX)
    }

    pub fn status_str(&self) -> &'static str {
        if self.enabled { "enabled" } else { "disabled" }
    }
}
