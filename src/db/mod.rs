use anyhow::Result;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub mod queries;
pub mod seed;

pub use seed::{init_db, seed_initial_data};

pub type DbPool = Pool<Postgres>;
pub type DbSession = PoolConnection<Postgres>;

/// Opens the process-wide connection pool. `test_before_acquire` pings a
/// pooled connection before handing it out, so stale connections are
/// replaced transparently.
pub async fn init_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .test_before_acquire(true)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Checks out one connection for a unit of work. Dropping the returned
/// session returns the connection to the pool on every exit path; it never
/// commits anything. Use `pool.begin()` for transactional writes.
pub async fn session(pool: &DbPool) -> Result<DbSession> {
    let conn = pool.acquire().await?;
    Ok(conn)
}
