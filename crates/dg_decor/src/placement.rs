//! Seeded placement around anchors.
//!
//! Every random draw is made from a generator seeded by the anchor's id and a
//! per-purpose salt, so the same anchor always gets the same props and two
//! purposes on one anchor never disturb each other's draws.

use bevy::math::DVec3;
use dg_core::{offset_along, ItemId, Offset};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::TAU;

use crate::anchor::Anchor;

/// Salt for gate markers.
pub const MARKER_SALT: u64 = 0;
/// Salt for patrols spawned around gates.
pub const GATE_PATROL_SALT: u64 = 0x6A7E_9A77;
/// Salt for patrols spawned around belts.
pub const BELT_PATROL_SALT: u64 = 0xB311_7B77;

/// Mixed into every seed so small ids do not produce low-entropy seeds.
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic generator owned by one anchor/purpose pair.
#[derive(Debug, Clone)]
pub struct PlacementRng {
    rng: ChaCha8Rng,
}

impl PlacementRng {
    pub fn seed(anchor: ItemId, salt: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(anchor.as_u64() ^ salt ^ SEED_MIX),
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform over the unit sphere (area-uniform, not per-axis).
    pub fn unit_direction(&mut self) -> DVec3 {
        let z = 2.0 * self.unit() - 1.0;
        let theta = TAU * self.unit();
        let s = (1.0 - z * z).max(0.0).sqrt();
        DVec3::new(s * theta.cos(), s * theta.sin(), z)
    }

    /// Uniform in `[low, high)`. Returns `low` without drawing when the range is
    /// empty or either bound is not finite.
    pub fn range(&mut self, low: f64, high: f64) -> f64 {
        if !(low.is_finite() && high.is_finite()) || high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}

/// Distance band a scattered prop is placed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRange {
    pub min: f64,
    pub max: f64,
}

impl OffsetRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A single distance; sampling it makes no draw.
    pub fn fixed(distance: f64) -> Self {
        Self::new(distance, distance)
    }

    pub fn sample(&self, rng: &mut PlacementRng) -> f64 {
        rng.range(self.min, self.max)
    }
}

/// How scattered props share directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spread {
    /// Each prop gets its own direction and distance.
    PerProp,
    /// One direction and distance per anchor; every prop starts there.
    Shared,
}

/// Where a category's props go relative to an anchor.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// Constant anchor-relative offsets, one prop per offset.
    Fixed { offsets: Vec<Offset> },
    /// `count` props in random directions at a distance drawn from `distance`.
    Scattered {
        distance: OffsetRange,
        count: usize,
        salt: u64,
        spread: Spread,
    },
}

impl Placement {
    /// Props per anchor.
    pub fn count(&self) -> usize {
        match self {
            Self::Fixed { offsets } => offsets.len(),
            Self::Scattered { count, .. } => *count,
        }
    }

    /// World positions for at most `limit` props around `anchor`.
    ///
    /// Draws only what those props need; `limit == 0` draws nothing.
    pub fn positions(&self, anchor: &Anchor, limit: usize) -> Vec<DVec3> {
        let n = self.count().min(limit);
        if n == 0 {
            return Vec::new();
        }

        match self {
            Self::Fixed { offsets } => offsets
                .iter()
                .take(n)
                .map(|offset| anchor.position + *offset)
                .collect(),
            Self::Scattered {
                distance,
                salt,
                spread,
                ..
            } => {
                let mut rng = PlacementRng::seed(anchor.id, *salt);
                match spread {
                    Spread::Shared => {
                        let direction = rng.unit_direction();
                        let start = offset_along(anchor.position, direction, distance.sample(&mut rng));
                        vec![start; n]
                    }
                    Spread::PerProp => (0..n)
                        .map(|_| {
                            let direction = rng.unit_direction();
                            offset_along(anchor.position, direction, distance.sample(&mut rng))
                        })
                        .collect(),
                }
            }
        }
    }
}
