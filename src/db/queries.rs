pub const CREATE_INCIDENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS incidents (
    id SERIAL PRIMARY KEY,
    type VARCHAR(50) NOT NULL,
    description TEXT NOT NULL,
    latitude FLOAT8 NOT NULL,
    longitude FLOAT8 NOT NULL,
    distance_label VARCHAR(50),
    occurred_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc'),
    created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc')
);
"#;

pub const CREATE_REPORTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS reports (
    id SERIAL PRIMARY KEY,
    type VARCHAR(50) NOT NULL,
    description TEXT NOT NULL,
    location VARCHAR(255) NOT NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'pending',
    created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc')
);
"#;

pub const CREATE_NOTIFICATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notifications (
    id SERIAL PRIMARY KEY,
    title VARCHAR(255) NOT NULL,
    description TEXT NOT NULL,
    unread BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMP NOT NULL DEFAULT (NOW() AT TIME ZONE 'utc')
);
"#;

pub const COUNT_INCIDENTS: &str = r#"
SELECT COUNT(*) FROM incidents;
"#;

pub const COUNT_REPORTS: &str = r#"
SELECT COUNT(*) FROM reports;
"#;

pub const COUNT_NOTIFICATIONS: &str = r#"
SELECT COUNT(*) FROM notifications;
"#;

pub const INSERT_INCIDENT: &str = r#"
INSERT INTO incidents (type, description, latitude, longitude, distance_label, occurred_at, created_at)
VALUES ($1, $2, $3, $4, $5, $6, $7);
"#;

pub const INSERT_REPORT: &str = r#"
INSERT INTO reports (type, description, location, status, created_at)
VALUES ($1, $2, $3, $4, $5);
"#;

pub const INSERT_NOTIFICATION: &str = r#"
INSERT INTO notifications (title, description, unread, created_at)
VALUES ($1, $2, $3, $4);
"#;

// Serializes concurrent seeding passes; released at commit or rollback.
pub const SEED_ADVISORY_LOCK: &str = r#"
SELECT pg_advisory_xact_lock($1);
"#;
