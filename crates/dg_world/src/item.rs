//! Inventory items and the factory that creates them.
//!
//! Every world entity is backed by an inventory item. The factory is the only
//! place item ids are allocated; creation can fail, and callers are expected
//! to cope with `None`.

use bevy::math::DVec3;
use dg_core::{ItemId, ItemTypeId, OwnerId, RegionId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// First id handed out to dynamically created items.
pub const FIRST_DYNAMIC_ITEM_ID: u32 = 140_000_000;

/// Where inside its location an item sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InventoryFlag {
    /// Floating in space, not inside any container.
    #[default]
    None,
}

/// Descriptor for an item that should be created.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub type_id: ItemTypeId,
    pub owner: OwnerId,
    /// System the item is created in.
    pub location: RegionId,
    pub flag: InventoryFlag,
    pub name: String,
    pub position: DVec3,
}

impl ItemData {
    /// Descriptor for an item floating in space at `position`.
    pub fn in_space(
        type_id: ItemTypeId,
        owner: OwnerId,
        location: RegionId,
        name: impl Into<String>,
        position: DVec3,
    ) -> Self {
        Self {
            type_id,
            owner,
            location,
            flag: InventoryFlag::None,
            name: name.into(),
            position,
        }
    }
}

/// A created item.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: ItemId,
    pub type_id: ItemTypeId,
    pub owner: OwnerId,
    pub location: RegionId,
    pub flag: InventoryFlag,
    pub name: String,
    pub position: DVec3,
}

/// Allocates items for a solar system.
#[derive(Debug, Clone)]
pub struct ItemFactory {
    next_id: u32,
    /// Types this factory refuses to create.
    rejected_types: HashSet<ItemTypeId>,
    /// Number of creation requests seen, successful or not.
    requests: usize,
}

impl Default for ItemFactory {
    fn default() -> Self {
        Self::new(FIRST_DYNAMIC_ITEM_ID)
    }
}

impl ItemFactory {
    pub fn new(first_id: u32) -> Self {
        Self {
            next_id: first_id,
            rejected_types: HashSet::new(),
            requests: 0,
        }
    }

    /// Make every future request for `type_id` fail.
    pub fn reject_type(&mut self, type_id: ItemTypeId) {
        self.rejected_types.insert(type_id);
    }

    /// Number of creation requests made so far.
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Create an item from a descriptor.
    ///
    /// Returns `None` for non-positive type ids and rejected types.
    pub fn spawn_item(&mut self, data: ItemData) -> Option<InventoryItem> {
        self.requests += 1;

        if !data.type_id.is_valid() || self.rejected_types.contains(&data.type_id) {
            return None;
        }

        let id = ItemId(self.next_id);
        self.next_id += 1;

        Some(InventoryItem {
            id,
            type_id: data.type_id,
            owner: data.owner,
            location: data.location,
            flag: data.flag,
            name: data.name,
            position: data.position,
        })
    }
}
