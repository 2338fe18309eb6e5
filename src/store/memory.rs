//! In-memory well store
//!
//! Thread-safe via `RwLock`. Not durable: data lost on restart. Holds the
//! same invariants as the PostgreSQL store: unique names, ids never reused,
//! samples returned in `md` order.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::WellStore;
use crate::error::WellError;
use crate::types::{Head, TrajectorySample, Well, WellId, WellSummary};

#[derive(Default)]
struct Inner {
    wells: HashMap<WellId, Well>,
    names: HashSet<String>,
}

/// In-memory store for tests and database-less runs
#[derive(Default)]
pub struct InMemoryWellStore {
    inner: RwLock<Inner>,
}

impl InMemoryWellStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of wells currently stored
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.wells.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn poisoned() -> WellError {
        WellError::Storage("in-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl WellStore for InMemoryWellStore {
    async fn create(
        &self,
        name: &str,
        head: Head,
        samples: &[TrajectorySample],
    ) -> Result<WellId, WellError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;

        if inner.names.contains(name) {
            return Err(WellError::WellAlreadyExists);
        }

        // v4 collisions are not a practical concern, but ids are never reused
        let mut id = Uuid::new_v4();
        while inner.wells.contains_key(&id) {
            id = Uuid::new_v4();
        }

        inner.names.insert(name.to_string());
        inner.wells.insert(
            id,
            Well {
                name: name.to_string(),
                head,
                samples: samples.to_vec(),
            },
        );
        Ok(id)
    }

    async fn remove(&self, id: WellId) -> Result<(), WellError> {
        let mut inner = self.inner.write().map_err(|_| Self::poisoned())?;
        let well = inner.wells.remove(&id).ok_or(WellError::WellNotFound)?;
        inner.names.remove(&well.name);
        Ok(())
    }

    async fn fetch_summary(&self, id: WellId) -> Result<WellSummary, WellError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        inner
            .wells
            .get(&id)
            .map(Well::summary)
            .ok_or(WellError::WellNotFound)
    }

    async fn fetch_full(&self, id: WellId) -> Result<Well, WellError> {
        let inner = self.inner.read().map_err(|_| Self::poisoned())?;
        inner.wells.get(&id).cloned().ok_or(WellError::WellNotFound)
    }

    async fn ping(&self) -> Result<(), WellError> {
        self.inner.read().map(|_| ()).map_err(|_| Self::poisoned())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
