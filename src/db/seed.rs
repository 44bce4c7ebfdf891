use anyhow::Result;
use chrono::{Duration, NaiveDateTime, Utc};
use tracing::{debug, info};

use crate::db::{queries, DbPool};

// "CIVI" in ASCII; any fixed key works as long as every seeder agrees on it.
const SEED_LOCK_KEY: i64 = 0x4349_5649;

/// Creates the tables if they are missing, then seeds demo content where
/// tables are empty. Safe to call on every application start.
pub async fn init_db(pool: &DbPool) -> Result<()> {
    sqlx::query(queries::CREATE_INCIDENTS_TABLE)
        .execute(pool)
        .await?;
    sqlx::query(queries::CREATE_REPORTS_TABLE)
        .execute(pool)
        .await?;
    sqlx::query(queries::CREATE_NOTIFICATIONS_TABLE)
        .execute(pool)
        .await?;

    seed_initial_data(pool).await
}

/// Populates the database with demo content when tables are empty.
///
/// Each table is checked independently; a table with any rows keeps them
/// untouched. The whole pass runs in one transaction under an advisory
/// lock, so two concurrent first runs cannot both insert, and a failure
/// mid-pass leaves no partial seed behind.
pub async fn seed_initial_data(pool: &DbPool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query(queries::SEED_ADVISORY_LOCK)
        .bind(SEED_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let incident_count: i64 = sqlx::query_scalar(queries::COUNT_INCIDENTS)
        .fetch_one(&mut *tx)
        .await?;
    let report_count: i64 = sqlx::query_scalar(queries::COUNT_REPORTS)
        .fetch_one(&mut *tx)
        .await?;
    let notification_count: i64 = sqlx::query_scalar(queries::COUNT_NOTIFICATIONS)
        .fetch_one(&mut *tx)
        .await?;

    // One instant for the whole pass so all relative offsets agree.
    let now = Utc::now().naive_utc();

    if incident_count == 0 {
        for (kind, description, latitude, longitude, distance_label, occurred_at) in
            demo_incidents(now)
        {
            sqlx::query(queries::INSERT_INCIDENT)
                .bind(kind)
                .bind(description)
                .bind(latitude)
                .bind(longitude)
                .bind(distance_label)
                .bind(occurred_at)
                .bind(now)
                .execute(&mut *tx)
                .await?;
        }
        info!("Seeded demo incidents");
    } else {
        debug!("incidents table already populated, skipping seed");
    }

    if report_count == 0 {
        for (kind, description, location, status, created_at) in demo_reports(now) {
            sqlx::query(queries::INSERT_REPORT)
                .bind(kind)
                .bind(description)
                .bind(location)
                .bind(status)
                .bind(created_at)
                .execute(&mut *tx)
                .await?;
        }
        info!("Seeded demo reports");
    } else {
        debug!("reports table already populated, skipping seed");
    }

    if notification_count == 0 {
        for (title, description, unread, created_at) in demo_notifications(now) {
            sqlx::query(queries::INSERT_NOTIFICATION)
                .bind(title)
                .bind(description)
                .bind(unread)
                .bind(created_at)
                .execute(&mut *tx)
                .await?;
        }
        info!("Seeded demo notifications");
    } else {
        debug!("notifications table already populated, skipping seed");
    }

    // Dropping `tx` without this rolls the whole pass back.
    tx.commit().await?;
    Ok(())
}

type IncidentRow = (&'static str, &'static str, f64, f64, &'static str, NaiveDateTime);
type ReportRow = (&'static str, &'static str, &'static str, &'static str, NaiveDateTime);
type NotificationRow = (&'static str, &'static str, bool, NaiveDateTime);

fn demo_incidents(now: NaiveDateTime) -> Vec<IncidentRow> {
    vec![
        (
            "theft",
            "Car break-in",
            40.7128,
            -74.0060,
            "0.5 miles",
            now - Duration::minutes(15),
        ),
        (
            "vandalism",
            "Graffiti on building",
            40.7180,
            -74.0100,
            "0.8 miles",
            now - Duration::hours(2),
        ),
        (
            "accident",
            "Two-car collision",
            40.7080,
            -74.0050,
            "1.2 miles",
            now - Duration::hours(5),
        ),
        (
            "suspicious",
            "Suspicious person spotted",
            40.7150,
            -74.0150,
            "0.3 miles",
            now - Duration::days(1),
        ),
        (
            "hazard",
            "Fallen tree blocking road",
            40.7100,
            -74.0080,
            "0.7 miles",
            now - Duration::days(2),
        ),
    ]
}

fn demo_reports(now: NaiveDateTime) -> Vec<ReportRow> {
    vec![
        (
            "theft",
            "Bike stolen from parking area.",
            "Main St & 3rd Ave",
            "resolved",
            now - Duration::days(1),
        ),
        (
            "accident",
            "Minor collision at the intersection.",
            "5th Avenue",
            "pending",
            now - Duration::hours(6),
        ),
    ]
}

fn demo_notifications(now: NaiveDateTime) -> Vec<NotificationRow> {
    vec![
        (
            "New Incident Near You",
            "A traffic accident was reported 0.3 miles from your location.",
            true,
            now - Duration::minutes(2),
        ),
        (
            "Report Resolved",
            "Your report #1256 has been resolved by local authorities.",
            false,
            now - Duration::hours(1),
        ),
        (
            "App Update Available",
            "Update to version 2.1.0 is now available with new features.",
            false,
            now - Duration::hours(3),
        ),
    ]
}
