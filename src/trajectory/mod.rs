//! Trajectory Module
//!
//! Pure geometry over well trajectories, no I/O.
//!
//! - `validate()` - array and head invariants checked before persistence
//! - `interpolate()` - clamped piecewise-linear position at a measured depth

pub mod interpolation;
pub mod validation;

pub use interpolation::interpolate;
pub use validation::validate;
