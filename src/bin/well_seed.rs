//! Synthetic well seeding
//!
//! Inserts randomly generated wells through the PostgreSQL store, then
//! times a full read and a depth query for each one.
//!
//! # Usage
//! ```bash
//! DATABASE_URL=postgres://localhost/wells ./well-seed --count 10 --nodes 100000
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use well_api::server::config::ServiceConfig;
use well_api::server::db;
use well_api::synthetic::generate_random_well;
use well_api::{PgWellStore, WellError, WellService};

#[derive(Parser, Debug)]
#[command(name = "well-seed")]
#[command(about = "Seed the well database with synthetic trajectories")]
#[command(version = "1.0")]
struct Args {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Number of wells to create
    #[arg(short, long, default_value = "1")]
    count: usize,

    /// Trajectory stations per well
    #[arg(short, long, default_value = "1000", value_parser = clap::value_parser!(u32).range(1..))]
    nodes: u32,

    /// RNG seed for reproducible wells
    #[arg(long)]
    seed: Option<u64>,

    /// Remove the wells again after timing
    #[arg(long)]
    cleanup: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = ServiceConfig::from_env(args.database_url, None, None);
    if !config.has_database() {
        anyhow::bail!("DATABASE_URL must be set via --database-url, DATABASE_URL or DB_HOST/DB_NAME env vars");
    }

    let pool = db::create_pool(&config)
        .await
        .context("Failed to connect to PostgreSQL")?;
    db::run_migrations(&pool).await?;

    let service = WellService::new(Arc::new(PgWellStore::new(pool.clone())));
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let nodes = args.nodes as usize;
    let mut created = Vec::with_capacity(args.count);

    for _ in 0..args.count {
        let well = generate_random_well(nodes, &mut rng);

        let started = Instant::now();
        let id = match service.create(&well.name, well.head, &well.trajectory).await {
            Ok(id) => id,
            Err(WellError::WellAlreadyExists) => {
                warn!(name = %well.name, "Name collision, skipping");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let create_ms = started.elapsed().as_secs_f64() * 1e3;

        let started = Instant::now();
        service.get(id, true).await?;
        let get_ms = started.elapsed().as_secs_f64() * 1e3;

        let last_md = well.trajectory.md.last().copied().unwrap_or_default();
        let query_md = rng.gen_range(0.0..=last_md.max(f64::MIN_POSITIVE));
        let started = Instant::now();
        let point = service.at(id, query_md).await?;
        let at_ms = started.elapsed().as_secs_f64() * 1e3;

        info!(
            well_id = %id,
            name = %well.name,
            nodes,
            create_ms,
            get_ms,
            at_ms,
            md = query_md,
            x = point.x,
            y = point.y,
            z = point.z,
            "Seeded well"
        );
        created.push(id);
    }

    if args.cleanup {
        for id in &created {
            service.remove(*id).await?;
        }
        info!(removed = created.len(), "Seeded wells removed");
    }

    db::close_pool(pool).await;
    info!(created = created.len(), "Seeding complete");
    Ok(())
}
