//! Shared data structures for the well registry
//!
//! - `Head`: surface entry point of a well
//! - `TrajectorySample`: one `(md, x, y, z)` station along the well path
//! - `WellSummary` / `Well`: the two read shapes returned by the store
//! - `WellView`: wire shape of a `well.get` result
//! - `Point3`: result of a depth query

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-generated well identifier. Never reused.
pub type WellId = Uuid;

/// Surface entry coordinate `(x0, y0)` of a well.
///
/// Serialized as a two-element array `[x, y]` to match the RPC wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Head {
    pub x: f64,
    pub y: f64,
}

impl Head {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Head {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Head> for [f64; 2] {
    fn from(head: Head) -> Self {
        [head.x, head.y]
    }
}

/// One trajectory station at measured depth `md`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub md: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl TrajectorySample {
    pub const fn new(md: f64, x: f64, y: f64, z: f64) -> Self {
        Self { md, x, y, z }
    }

    pub const fn position(&self) -> Point3 {
        Point3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

/// 3-D position returned by a depth query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Z")]
    pub z: f64,
}

/// Well without its trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellSummary {
    pub name: String,
    pub head: Head,
}

/// Well with its full trajectory, samples ordered by `md` ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    pub name: String,
    pub head: Head,
    pub samples: Vec<TrajectorySample>,
}

impl Well {
    pub fn summary(&self) -> WellSummary {
        WellSummary {
            name: self.name.clone(),
            head: self.head,
        }
    }
}

/// Read shape returned by `WellService::get`.
///
/// Serializes to `{name, head}` or, with a trajectory, to
/// `{name, head, MD, X, Y, Z}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellView {
    pub name: String,
    pub head: Head,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<TrajectoryColumns>,
}

impl From<WellSummary> for WellView {
    fn from(summary: WellSummary) -> Self {
        Self {
            name: summary.name,
            head: summary.head,
            trajectory: None,
        }
    }
}

impl From<Well> for WellView {
    fn from(well: Well) -> Self {
        let trajectory = TrajectoryColumns::from(well.samples.as_slice());
        Self {
            name: well.name,
            head: well.head,
            trajectory: Some(trajectory),
        }
    }
}

/// Column-oriented trajectory, the shape used on the wire (`MD`, `X`, `Y`, `Z`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrajectoryColumns {
    #[serde(rename = "MD")]
    pub md: Vec<f64>,
    #[serde(rename = "X")]
    pub x: Vec<f64>,
    #[serde(rename = "Y")]
    pub y: Vec<f64>,
    #[serde(rename = "Z")]
    pub z: Vec<f64>,
}

impl TrajectoryColumns {
    /// Zip the four columns into samples. Callers validate lengths first;
    /// surplus entries in longer columns are dropped.
    pub fn to_samples(&self) -> Vec<TrajectorySample> {
        self.md
            .iter()
            .zip(&self.x)
            .zip(&self.y)
            .zip(&self.z)
            .map(|(((&md, &x), &y), &z)| TrajectorySample { md, x, y, z })
            .collect()
    }
}

impl From<&[TrajectorySample]> for TrajectoryColumns {
    fn from(samples: &[TrajectorySample]) -> Self {
        let mut columns = Self {
            md: Vec::with_capacity(samples.len()),
            x: Vec::with_capacity(samples.len()),
            y: Vec::with_capacity(samples.len()),
            z: Vec::with_capacity(samples.len()),
        };
        for s in samples {
            columns.md.push(s.md);
            columns.x.push(s.x);
            columns.y.push(s.y);
            columns.z.push(s.z);
        }
        columns
    }
}
