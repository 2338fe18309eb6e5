//! Trajectory validation run before a well is persisted

use crate::error::WellError;
use crate::types::Head;

/// Check the geometric invariants of a new well trajectory.
///
/// ## Rules
/// - `md`, `x`, `y`, `z` have the same, non-zero length
///   (otherwise `ArraySizeMismatch`)
/// - the first station sits exactly on the well head
///   (otherwise `HeadInconsistent`)
/// - `md` never decreases (otherwise `DepthNotMonotonic`); equal
///   neighbours are allowed
///
/// Head comparison is exact floating-point equality.
#[allow(clippy::float_cmp)]
pub fn validate(head: Head, md: &[f64], x: &[f64], y: &[f64], z: &[f64]) -> Result<(), WellError> {
    if md.len() != x.len() || x.len() != y.len() || y.len() != z.len() || md.is_empty() {
        return Err(WellError::ArraySizeMismatch);
    }

    if x[0] != head.x || y[0] != head.y {
        return Err(WellError::HeadInconsistent);
    }

    if let Some(index) = md.windows(2).position(|w| w[1] < w[0]) {
        return Err(WellError::DepthNotMonotonic {
            index: index + 1,
            md: md[index + 1],
        });
    }

    Ok(())
}
