use serde::Serialize;

/// The single active irrigation schedule row. Fetched or created on
/// first use; scheduled days and time slots hang off its id.
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub created_at: String, // ISO8601
}
