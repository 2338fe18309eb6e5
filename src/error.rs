//! Error taxonomy for well operations
//!
//! Domain errors are recoverable and caller-facing. `Database` and `Storage`
//! are internal failures and never carry a domain meaning.

/// Errors returned by the validator, the stores and the service.
#[derive(Debug, thiserror::Error)]
pub enum WellError {
    #[error("Sizes of MD, X, Y and Z must be equal and non-zero!")]
    ArraySizeMismatch,
    #[error("Well head and trajectory are inconsistent!")]
    HeadInconsistent,
    #[error("MD values must be non-decreasing (MD[{index}] = {md} is below the previous value)")]
    DepthNotMonotonic { index: usize, md: f64 },
    #[error("Well already exists!")]
    WellAlreadyExists,
    #[error("Well not found!")]
    WellNotFound,
    #[error("Well trajectory is empty!")]
    EmptyTrajectory,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage error: {0}")]
    Storage(String),
}

impl WellError {
    /// True for the caller-facing kinds, false for internal failures.
    pub const fn is_domain(&self) -> bool {
        !matches!(self, Self::Database(_) | Self::Storage(_))
    }

    /// Stable machine-readable kind, used in logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ArraySizeMismatch => "array_size_mismatch",
            Self::HeadInconsistent => "head_inconsistent",
            Self::DepthNotMonotonic { .. } => "depth_not_monotonic",
            Self::WellAlreadyExists => "well_already_exists",
            Self::WellNotFound => "well_not_found",
            Self::EmptyTrajectory => "empty_trajectory",
            Self::Database(_) => "database",
            Self::Storage(_) => "storage",
        }
    }
}
