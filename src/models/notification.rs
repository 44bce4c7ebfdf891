use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// A message shown to a user about system or incident activity. Starts
/// unread; the "mark read" action lives in the outer application.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub unread: bool,
    pub created_at: NaiveDateTime,
}
