//! WellStore trait: persistence backend for wells and trajectories
//!
//! - `PgWellStore`: PostgreSQL, normalized `well` + `trajectory` tables
//! - `InMemoryWellStore`: process-local store for tests and demos
//!
//! Every implementation translates its low-level failures into
//! [`WellError`] at this boundary: uniqueness violations become
//! `WellAlreadyExists`, missing rows become `WellNotFound`.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryWellStore;
pub use postgres::PgWellStore;

use async_trait::async_trait;

use crate::error::WellError;
use crate::types::{Head, TrajectorySample, Well, WellId, WellSummary};

/// Persistence backend for wells.
///
/// Implementations must be thread-safe (Send + Sync) for shared access
/// across request handlers. `create` and `remove` are atomic: either the
/// well and all of its samples are written/deleted, or nothing is.
#[async_trait]
pub trait WellStore: Send + Sync {
    /// Insert a well and its samples, returning the new id.
    ///
    /// Samples are stored in the given order, which must be ascending by `md`.
    async fn create(
        &self,
        name: &str,
        head: Head,
        samples: &[TrajectorySample],
    ) -> Result<WellId, WellError>;

    /// Delete a well and, by cascade, its samples.
    async fn remove(&self, id: WellId) -> Result<(), WellError>;

    /// Name and head of a well.
    async fn fetch_summary(&self, id: WellId) -> Result<WellSummary, WellError>;

    /// Name, head and samples ordered by `md` ascending.
    async fn fetch_full(&self, id: WellId) -> Result<Well, WellError>;

    /// Round-trip to the backend, used by the health endpoint.
    async fn ping(&self) -> Result<(), WellError>;

    /// Backend name for logging
    fn backend_name(&self) -> &'static str;
}
