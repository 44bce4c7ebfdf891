use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A reported event at a location and time. Never mutated or deleted by
/// this layer once written.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Incident {
    pub id: i32,
    pub r#type: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_label: Option<String>, // DDL says varchar(50) NULL
    pub occurred_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}
