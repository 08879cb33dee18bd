use serde::{Deserialize, Serialize};

use crate::ids::RegionId;

/// Classification of a solar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RegionClass {
    /// Regular, gate-connected space.
    #[default]
    KnownSpace,
    /// Unstable wormhole space with no gates.
    Wormhole,
}

impl RegionClass {
    /// Solar system ids in this block belong to wormhole space.
    const WORMHOLE_IDS: std::ops::Range<u32> = 31_000_000..32_000_000;

    /// Classify a system from its id alone.
    pub fn of(id: RegionId) -> Self {
        if Self::WORMHOLE_IDS.contains(&id.0) {
            Self::Wormhole
        } else {
            Self::KnownSpace
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::KnownSpace => "Known Space",
            Self::Wormhole => "Wormhole",
        }
    }
}

/// What kind of thing a world entity is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum EntityClass {
    /// Inter-system gate.
    Stargate,
    /// Resource belt.
    AsteroidBelt,
    /// Planets, moons, suns.
    Celestial,
    /// Static props (billboards, sentries, parked ships).
    #[default]
    Static,
    /// Anything piloted.
    Ship,
}
