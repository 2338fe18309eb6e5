//! Well service: validation, persistence and interpolation behind one API
//!
//! The four caller-facing operations:
//!
//! - `create`: validate, then persist atomically
//! - `get`: summary or full well
//! - `remove`: atomic delete including the trajectory
//! - `at`: position at a measured depth
//!
//! Errors from the validator and the store pass through unchanged; nothing
//! here retries.

use std::sync::Arc;

use tracing::debug;

use crate::error::WellError;
use crate::store::WellStore;
use crate::trajectory;
use crate::types::{Head, Point3, TrajectoryColumns, WellId, WellView};

/// Cheaply cloneable handle over a shared [`WellStore`].
#[derive(Clone)]
pub struct WellService {
    store: Arc<dyn WellStore>,
}

impl WellService {
    pub fn new(store: Arc<dyn WellStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn WellStore {
        self.store.as_ref()
    }

    /// Create a well from column-oriented trajectory data.
    ///
    /// Fails with `ArraySizeMismatch`, `HeadInconsistent`,
    /// `DepthNotMonotonic` or `WellAlreadyExists`. Nothing is persisted on
    /// failure.
    pub async fn create(
        &self,
        name: &str,
        head: Head,
        trajectory: &TrajectoryColumns,
    ) -> Result<WellId, WellError> {
        trajectory::validate(head, &trajectory.md, &trajectory.x, &trajectory.y, &trajectory.z)?;

        let samples = trajectory.to_samples();
        self.store.create(name, head, &samples).await
    }

    /// Fetch a well, with its trajectory when `include_trajectory` is set.
    pub async fn get(&self, id: WellId, include_trajectory: bool) -> Result<WellView, WellError> {
        if include_trajectory {
            self.store.fetch_full(id).await.map(WellView::from)
        } else {
            self.store.fetch_summary(id).await.map(WellView::from)
        }
    }

    /// Delete a well and its trajectory.
    pub async fn remove(&self, id: WellId) -> Result<(), WellError> {
        self.store.remove(id).await
    }

    /// Position of well `id` at measured depth `md`, clamped to the
    /// sampled range.
    pub async fn at(&self, id: WellId, md: f64) -> Result<Point3, WellError> {
        let well = self.store.fetch_full(id).await?;
        let point = trajectory::interpolate(&well.samples, md)?;
        debug!(well_id = %id, md, x = point.x, y = point.y, z = point.z, "Depth query");
        Ok(point)
    }
}
