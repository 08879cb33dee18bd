use dg_core::{ItemId, RegionClass, RegionId};

use crate::entity::SystemEntity;
use crate::item::{InventoryItem, ItemData};

/// Public surface of a live solar system.
///
/// Subsystems that decorate or inspect a system go through this trait and
/// never hold on to the system's internals between calls.
pub trait Region {
    fn id(&self) -> RegionId;

    fn name(&self) -> &str;

    /// Security rating in `[-1.0, 1.0]`.
    fn security(&self) -> f64;

    fn class(&self) -> RegionClass;

    /// Copy of every entity currently registered, in registry order.
    fn entities(&self) -> Vec<SystemEntity>;

    /// Copy of the system's gate index.
    fn gates(&self) -> Vec<SystemEntity>;

    /// Ask the item factory for a new item. `None` on failure.
    fn spawn_item(&mut self, data: ItemData) -> Option<InventoryItem>;

    /// Wrap a created item as a static world entity (not yet registered).
    fn wrap_static(&self, item: &InventoryItem) -> SystemEntity;

    /// Put an entity on the spatial grid.
    fn add_to_grid(&mut self, entity: &SystemEntity);

    /// Register an entity. `signal` raises an anomaly signal for it.
    fn add_entity(&mut self, entity: SystemEntity, signal: bool);

    /// Tell observers in range about a new static entity.
    fn send_static(&mut self, id: ItemId);
}
