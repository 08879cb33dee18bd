use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an inventory item, and of the world entity wrapping it.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Widen to the 64-bit form used for seeding.
    pub const fn as_u64(&self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Item type identifier.
///
/// Signed on purpose: configuration treats any value `<= 0` as "disabled",
/// and dedup queries treat it as "match any type".
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct ItemTypeId(pub i32);

impl ItemTypeId {
    pub const NONE: ItemTypeId = ItemTypeId(0);

    /// True when this id names a real, spawnable type.
    pub const fn is_valid(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ItemTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owner of an item (corporation, faction, or the system owner).
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct OwnerId(pub u32);

impl OwnerId {
    /// Generic NPC/system owner.
    pub const SYSTEM: OwnerId = OwnerId(1);
}

impl Default for OwnerId {
    fn default() -> Self {
        Self::SYSTEM
    }
}

/// Identity of a solar system (a region).
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Debug, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
