use sqlx::PgPool;

use civicguardian_data::db::{self, queries};
use civicguardian_data::models::{Incident, Notification, Report};

async fn table_counts(pool: &PgPool) -> (i64, i64, i64) {
    let incidents: i64 = sqlx::query_scalar(queries::COUNT_INCIDENTS)
        .fetch_one(pool)
        .await
        .unwrap();
    let reports: i64 = sqlx::query_scalar(queries::COUNT_REPORTS)
        .fetch_one(pool)
        .await
        .unwrap();
    let notifications: i64 = sqlx::query_scalar(queries::COUNT_NOTIFICATIONS)
        .fetch_one(pool)
        .await
        .unwrap();
    (incidents, reports, notifications)
}

async fn create_tables(pool: &PgPool) {
    sqlx::query(queries::CREATE_INCIDENTS_TABLE)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(queries::CREATE_REPORTS_TABLE)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(queries::CREATE_NOTIFICATIONS_TABLE)
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test]
async fn fresh_database_gets_full_seed(pool: PgPool) {
    db::init_db(&pool).await.unwrap();

    assert_eq!(table_counts(&pool).await, (5, 2, 3));

    let incidents: Vec<Incident> =
        sqlx::query_as("SELECT * FROM incidents ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(incidents[0].r#type, "theft");
    assert_eq!(incidents[0].distance_label.as_deref(), Some("0.5 miles"));
    for incident in &incidents {
        assert!(incident.occurred_at <= incident.created_at);
    }

    let reports: Vec<Report> = sqlx::query_as("SELECT * FROM reports ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(reports[0].status, "resolved");
    assert_eq!(reports[1].status, "pending");

    let notifications: Vec<Notification> =
        sqlx::query_as("SELECT * FROM notifications ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert!(notifications[0].unread);
    assert!(!notifications[1].unread);
}

#[sqlx::test]
async fn second_run_changes_nothing(pool: PgPool) {
    db::init_db(&pool).await.unwrap();
    let before = table_counts(&pool).await;

    db::init_db(&pool).await.unwrap();
    assert_eq!(table_counts(&pool).await, before);
}

#[sqlx::test]
async fn prepopulated_table_is_skipped(pool: PgPool) {
    create_tables(&pool).await;
    sqlx::query("INSERT INTO notifications (title, description) VALUES ('existing', 'already here')")
        .execute(&pool)
        .await
        .unwrap();

    db::init_db(&pool).await.unwrap();

    // Only the two empty tables get their batches.
    assert_eq!(table_counts(&pool).await, (5, 2, 1));
}

#[sqlx::test]
async fn failed_pass_persists_nothing(pool: PgPool) {
    create_tables(&pool).await;
    // Force the reports batch to violate a constraint; incidents are
    // inserted earlier in the same pass and must roll back with it.
    sqlx::query(
        "ALTER TABLE reports ADD CONSTRAINT reports_location_short CHECK (char_length(location) <= 5)",
    )
    .execute(&pool)
    .await
    .unwrap();

    let result = db::seed_initial_data(&pool).await;
    assert!(result.is_err());

    assert_eq!(table_counts(&pool).await, (0, 0, 0));
}

#[sqlx::test]
async fn dropped_sessions_return_to_the_pool(pool: PgPool) {
    create_tables(&pool).await;

    for _ in 0..20 {
        let mut session = db::session(&pool).await.unwrap();
        let one: i32 = sqlx::query_scalar("SELECT 1")
            .fetch_one(&mut *session)
            .await
            .unwrap();
        assert_eq!(one, 1);
        // Dropped here without any commit.
    }

    // Uncommitted transactions release their connection on drop too.
    for _ in 0..20 {
        let mut tx = pool.begin().await.unwrap();
        sqlx::query("INSERT INTO reports (type, description, location) VALUES ('t', 'd', 'l')")
            .execute(&mut *tx)
            .await
            .unwrap();
    }

    let count: i64 = sqlx::query_scalar(queries::COUNT_REPORTS)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn column_defaults_apply(pool: PgPool) {
    create_tables(&pool).await;

    sqlx::query("INSERT INTO reports (type, description, location) VALUES ('noise', 'Loud music', 'Elm St')")
        .execute(&pool)
        .await
        .unwrap();
    let status: String = sqlx::query_scalar("SELECT status FROM reports")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(status, "pending");

    sqlx::query("INSERT INTO notifications (title, description) VALUES ('hi', 'there')")
        .execute(&pool)
        .await
        .unwrap();
    let unread: bool = sqlx::query_scalar("SELECT unread FROM notifications")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(unread);
}
