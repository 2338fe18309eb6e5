//! Well API server: configuration, database lifecycle and HTTP surface
//!
//! ## Modules
//!
//! - `config`: Service configuration (env vars, CLI args)
//! - `db`: Connection pool, migration runner, shutdown
//! - `api`: HTTP route handlers and response envelope

pub mod api;
pub mod config;
pub mod db;

use std::sync::Arc;

use crate::service::WellService;
use crate::store::WellStore;

/// Shared application state
pub struct AppState {
    /// Well operations over the configured store
    pub wells: WellService,
    /// Service configuration
    pub config: config::ServiceConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn WellStore>, config: config::ServiceConfig) -> Arc<Self> {
        Arc::new(Self {
            wells: WellService::new(store),
            config,
        })
    }
}
