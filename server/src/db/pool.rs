//! Database connection pool management.

use crate::config::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Type alias for the database pool.
pub type Pool = PgPool;

/// Upper bound on concurrent connections. Mutations serialize behind the
/// write lock, so the pool mostly serves reads.
const MAX_CONNECTIONS: u32 = 10;

/// Create a new database connection pool.
pub async fn create_pool(config: &Config) -> Result<Pool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(&config.database_url)
        .await
}

/// Run database migrations.
pub async fn run_migrations(pool: &Pool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
