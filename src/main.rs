//! Well API: HTTP service binary
//!
//! ## Environment variables
//!
//! | Variable                        | Required | Description                                   |
//! |---------------------------------|----------|-----------------------------------------------|
//! | `DATABASE_URL`                  | Yes*     | PostgreSQL connection string                  |
//! | `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASS` / `DB_NAME` | Yes* | Used when `DATABASE_URL` is unset |
//! | `WELL_API_BIND`                 | No       | Bind address (default: 127.0.0.1:8070)        |
//! | `WELL_API_POOL_SIZE`            | No       | Max pooled connections (default: 10)          |
//! | `WELL_API_ACQUIRE_TIMEOUT_SECS` | No       | Pool checkout timeout (default: 10)           |
//! | `WELL_API_STATEMENT_TIMEOUT_MS` | No       | Per-statement timeout (default: 30000)        |
//! | `WELL_API_MAX_BODY_BYTES`       | No       | Request body limit (default: 64 MiB)          |
//! | `WELL_API_LOG_JSON`             | No       | `1`/`true` for JSON log lines                 |
//!
//! *Not needed with `--in-memory`.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use well_api::server::config::{self, ServiceConfig};
use well_api::server::{api, db, AppState};
use well_api::store::{InMemoryWellStore, PgWellStore};

#[derive(Parser, Debug)]
#[command(name = "well-api", about = "Well registry with trajectory depth queries")]
#[command(version)]
struct CliArgs {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Port to listen on (default: 8070)
    #[arg(long, short)]
    port: Option<u16>,

    /// Bind address (overrides --port)
    #[arg(long)]
    bind_address: Option<String>,

    /// Serve from a process-local store instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,

    /// Do not run migrations at start-up
    #[arg(long)]
    skip_migrations: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,well_api=debug"));

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();

    // Tracing first so configuration warnings are visible
    let log_json = args.log_json || config::env_flag("WELL_API_LOG_JSON");
    init_tracing(log_json);

    let config = ServiceConfig::from_env(args.database_url, args.bind_address, args.port);

    info!(bind = %config.bind_address, in_memory = args.in_memory, "Starting Well API");

    // ── Store ─────────────────────────────────────────────────────────────────
    let (state, pool) = if args.in_memory {
        info!("Using in-memory store, data is not persisted");
        let state = AppState::new(Arc::new(InMemoryWellStore::new()), config.clone());
        (state, None)
    } else {
        if !config.has_database() {
            anyhow::bail!(
                "DATABASE_URL must be set via --database-url, DATABASE_URL or DB_HOST/DB_NAME env vars"
            );
        }

        let pool = db::create_pool(&config)
            .await
            .context("Failed to connect to PostgreSQL")?;

        if args.skip_migrations {
            info!("Skipping migrations");
        } else {
            db::run_migrations(&pool).await?;
        }

        let store = PgWellStore::new(pool.clone());
        (AppState::new(Arc::new(store), config.clone()), Some(pool))
    };

    // ── HTTP Server ───────────────────────────────────────────────────────────
    let app = api::build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!(address = %config.bind_address, "Well API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        db::close_pool(pool).await;
    }

    info!("Well API shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
