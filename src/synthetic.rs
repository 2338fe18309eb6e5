//! Synthetic well generator
//!
//! Produces an elliptical helix: `x = A cos φ`, `y = B sin φ`, `z = k · md`,
//! with `md_i = i · dMD` and `φ_i = i · 2π / 256`. The head is the first
//! station, so every generated well passes validation.

use std::f64::consts::PI;

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::types::{Head, TrajectoryColumns};

/// Angular step per station
const PHI_STEP: f64 = 2.0 * PI / 256.0;
/// Length of generated names
const NAME_LEN: usize = 8;

/// A generated well ready for `WellService::create`.
#[derive(Debug, Clone)]
pub struct SyntheticWell {
    pub name: String,
    pub head: Head,
    pub trajectory: TrajectoryColumns,
}

/// Random 8-character name from `[A-Z0-9]`.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .map(|b| char::from(b).to_ascii_uppercase())
        .take(NAME_LEN)
        .collect()
}

/// Generate a well with `nodes` stations.
///
/// `nodes == 0` yields an empty trajectory, which the validator rejects.
pub fn generate_random_well<R: Rng + ?Sized>(nodes: usize, rng: &mut R) -> SyntheticWell {
    let k: f64 = rng.gen_range(0.1..0.9);
    let a: f64 = 100.0 * rng.gen_range(0.05_f64..1.0) / 3.0;
    let b: f64 = 100.0 * rng.gen_range(0.05_f64..1.0) / 3.0;
    let perimeter = PI * (a + b);
    // Always positive: perimeter < 210 and 256 - k > 255
    let d_md = 1.0 - perimeter / (256.0 - k);

    let mut trajectory = TrajectoryColumns {
        md: Vec::with_capacity(nodes),
        x: Vec::with_capacity(nodes),
        y: Vec::with_capacity(nodes),
        z: Vec::with_capacity(nodes),
    };

    for i in 0..nodes {
        let md = i as f64 * d_md;
        let phi = i as f64 * PHI_STEP;
        trajectory.md.push(md);
        trajectory.x.push(a * phi.cos());
        trajectory.y.push(b * phi.sin());
        trajectory.z.push(k * md);
    }

    let head = match (trajectory.x.first(), trajectory.y.first()) {
        (Some(&x), Some(&y)) => Head::new(x, y),
        _ => Head::default(),
    };

    SyntheticWell {
        name: random_name(rng),
        head,
        trajectory,
    }
}
