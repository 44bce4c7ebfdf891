use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Status a report starts in; the column default carries this when a
/// submission path omits it.
pub const DEFAULT_STATUS: &str = "pending";

/// A user-submitted complaint or request with a workflow status. Status
/// transitions happen outside this layer and are not validated here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: i32,
    pub r#type: String,
    pub description: String,
    pub location: String, // free text, not geocoded
    pub status: String,
    pub created_at: NaiveDateTime,
}
