use bevy::prelude::*;

pub mod definition;
pub mod entity;
pub mod grid;
pub mod item;
pub mod region;
pub mod system;
pub mod universe;

pub use definition::{EntityDefinition, SystemDefinition, UniverseDefinition};
pub use entity::SystemEntity;
pub use grid::{BubbleCoord, BubbleGrid};
pub use item::{InventoryFlag, InventoryItem, ItemData, ItemFactory};
pub use region::Region;
pub use system::SolarSystem;
pub use universe::Universe;

/// World plugin for Driftgate.
/// Owns the universe of live solar systems and their entity registries.
pub struct DgWorldPlugin;

impl Plugin for DgWorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Universe>();
    }
}
