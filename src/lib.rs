//! Well API: well registry with trajectory persistence and depth queries
//!
//! ## Architecture
//!
//! - **Trajectory**: pure validation and clamped linear interpolation
//! - **Store**: atomic create/read/delete of wells and trajectories
//!   (PostgreSQL, or in-memory for tests)
//! - **Service**: `create` / `get` / `remove` / `at` over a store
//! - **Server**: Axum RPC endpoints with a uniform `{data, error}` envelope

pub mod error;
pub mod server;
pub mod service;
pub mod store;
pub mod synthetic;
pub mod trajectory;
pub mod types;

pub use error::WellError;
pub use service::WellService;
pub use store::{InMemoryWellStore, PgWellStore, WellStore};
pub use types::{Head, Point3, TrajectoryColumns, TrajectorySample, Well, WellId, WellSummary, WellView};
