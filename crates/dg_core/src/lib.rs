use bevy::prelude::*;

pub mod class;
pub mod coords;
pub mod ids;

pub use class::{EntityClass, RegionClass};
pub use coords::{distance_squared, offset_along, Offset};
pub use ids::{ItemId, ItemTypeId, OwnerId, RegionId};

/// Core plugin providing foundational types for Driftgate.
pub struct DgCorePlugin;

impl Plugin for DgCorePlugin {
    fn build(&self, _app: &mut App) {
        // Core types are used by other crates; no systems to register here.
    }
}
