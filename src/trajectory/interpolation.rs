//! Position lookup along a trajectory by measured depth

use crate::error::WellError;
use crate::types::{Point3, TrajectorySample};

/// Position of the well at measured depth `md`.
///
/// Piecewise-linear in each of `x`, `y`, `z` independently, evaluated as
/// `v[i] + (md - md[i]) * (v[i+1] - v[i]) / (md[i+1] - md[i])`, with the same
/// boundary policy as one-dimensional linear interpolation:
/// - `md` below the first station returns the first station (no extrapolation)
/// - `md` above the last station returns the last station
/// - on a repeated depth the last sample at that depth wins
///
/// ## Precondition
/// `samples` is sorted ascending by `md`. The store returns samples in this
/// order and the validator rejects decreasing depths on write; the input is
/// never re-sorted here.
pub fn interpolate(samples: &[TrajectorySample], md: f64) -> Result<Point3, WellError> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(WellError::EmptyTrajectory),
    };

    if md < first.md {
        return Ok(first.position());
    }

    // Index of the first station strictly deeper than `md`
    let upper = samples.partition_point(|s| s.md <= md);
    if upper == samples.len() {
        return Ok(last.position());
    }
    if upper == 0 {
        // NaN depth
        return Ok(first.position());
    }

    // lo.md <= md < hi.md, so the span is strictly positive
    let lo = &samples[upper - 1];
    let hi = &samples[upper];
    let lerp = |a: f64, b: f64| a + (md - lo.md) * (b - a) / (hi.md - lo.md);

    Ok(Point3 {
        x: lerp(lo.x, hi.x),
        y: lerp(lo.y, hi.y),
        z: lerp(lo.z, hi.z),
    })
}
