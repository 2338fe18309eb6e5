//! Database connection pool and migration runner

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use super::config::ServiceConfig;

/// Create a PostgreSQL connection pool
///
/// Connects via `DATABASE_URL` when set, otherwise via the `DB_*` parameters.
/// Checkout is bounded by `pool_max_connections` and waits at most
/// `acquire_timeout_secs`; every connection carries a server-side
/// `statement_timeout`.
pub async fn create_pool(config: &ServiceConfig) -> Result<PgPool, sqlx::Error> {
    let options = config
        .connect_options()?
        .application_name("well-api")
        .options([("statement_timeout", config.statement_timeout_ms.to_string())]);

    let pool = PgPoolOptions::new()
        .max_connections(config.pool_max_connections)
        .min_connections(config.pool_min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    info!(
        max_connections = config.pool_max_connections,
        statement_timeout_ms = config.statement_timeout_ms,
        "Connected to PostgreSQL"
    );
    Ok(pool)
}

/// Run database migrations from the migrations/ directory
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations complete");
    Ok(())
}

/// Close the pool, waiting for checked-out connections to be returned
pub async fn close_pool(pool: PgPool) {
    pool.close().await;
    info!("Database pool closed");
}
