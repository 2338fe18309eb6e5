//! PostgreSQL well store
//!
//! ## Schema
//!
//! - `well(id, name UNIQUE, head POINT)`
//! - `trajectory(id, well_id → well.id ON DELETE CASCADE, seq, md, x, y, z)`
//!   indexed on `(well_id, md)`
//!
//! `seq` is the 1-based input position of a sample. Reads order by
//! `(md, seq)` so samples at a repeated depth keep their input order.
//!
//! Writes run in one transaction each; an early return drops the
//! transaction, which rolls it back.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use super::WellStore;
use crate::error::WellError;
use crate::types::{Head, TrajectorySample, TrajectoryColumns, Well, WellId, WellSummary};

/// PostgreSQL-backed store. Cloning shares the underlying pool.
#[derive(Clone)]
pub struct PgWellStore {
    pool: PgPool,
}

impl PgWellStore {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Map a unique-constraint violation to `WellAlreadyExists`.
fn map_insert_error(err: sqlx::Error) -> WellError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => WellError::WellAlreadyExists,
        _ => WellError::Database(err),
    }
}

#[async_trait]
impl WellStore for PgWellStore {
    async fn create(
        &self,
        name: &str,
        head: Head,
        samples: &[TrajectorySample],
    ) -> Result<WellId, WellError> {
        let columns = TrajectoryColumns::from(samples);

        let mut tx = self.pool.begin().await?;

        let (id,): (WellId,) = sqlx::query_as(
            "INSERT INTO well (name, head) VALUES ($1, point($2, $3)) RETURNING id",
        )
        .bind(name)
        .bind(head.x)
        .bind(head.y)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        let inserted = sqlx::query(
            r#"INSERT INTO trajectory (well_id, seq, md, x, y, z)
               SELECT $1, t.seq::INTEGER, t.md, t.x, t.y, t.z
               FROM UNNEST($2::DOUBLE PRECISION[], $3::DOUBLE PRECISION[],
                           $4::DOUBLE PRECISION[], $5::DOUBLE PRECISION[])
                    WITH ORDINALITY AS t(md, x, y, z, seq)"#,
        )
        .bind(id)
        .bind(&columns.md)
        .bind(&columns.x)
        .bind(&columns.y)
        .bind(&columns.z)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;

        info!(well_id = %id, name, samples = inserted, "Well created");
        Ok(id)
    }

    async fn remove(&self, id: WellId) -> Result<(), WellError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM well WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(WellError::WellNotFound);
        }

        tx.commit().await?;

        info!(well_id = %id, "Well removed");
        Ok(())
    }

    async fn fetch_summary(&self, id: WellId) -> Result<WellSummary, WellError> {
        let row: Option<(String, f64, f64)> =
            sqlx::query_as("SELECT name, head[0], head[1] FROM well WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let (name, x, y) = row.ok_or(WellError::WellNotFound)?;
        Ok(WellSummary {
            name,
            head: Head::new(x, y),
        })
    }

    async fn fetch_full(&self, id: WellId) -> Result<Well, WellError> {
        let mut tx = self.pool.begin().await?;

        // Both reads see one snapshot, so a concurrent remove cannot leave
        // a well row without its samples.
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await?;

        let row: Option<(String, f64, f64)> =
            sqlx::query_as("SELECT name, head[0], head[1] FROM well WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let (name, x, y) = row.ok_or(WellError::WellNotFound)?;

        let rows: Vec<(f64, f64, f64, f64)> = sqlx::query_as(
            "SELECT md, x, y, z FROM trajectory WHERE well_id = $1 ORDER BY md, seq",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(well_id = %id, samples = rows.len(), "Well trajectory fetched");

        Ok(Well {
            name,
            head: Head::new(x, y),
            samples: rows
                .into_iter()
                .map(|(md, x, y, z)| TrajectorySample { md, x, y, z })
                .collect(),
        })
    }

    async fn ping(&self) -> Result<(), WellError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
