use bevy::math::DVec3;
use dg_core::{EntityClass, ItemId, ItemTypeId, OwnerId};

/// A live entity registered in a solar system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemEntity {
    /// Item id; also the entity's identity in the registry.
    pub id: ItemId,
    pub type_id: ItemTypeId,
    pub owner: OwnerId,
    /// Display name, if the backing item carries one.
    pub name: Option<String>,
    /// Position in system coordinates (metres).
    pub position: DVec3,
    pub class: EntityClass,
}

impl SystemEntity {
    pub fn new(id: ItemId, type_id: ItemTypeId, class: EntityClass, position: DVec3) -> Self {
        Self {
            id,
            type_id,
            owner: OwnerId::SYSTEM,
            name: None,
            position,
            class,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_owner(mut self, owner: OwnerId) -> Self {
        self.owner = owner;
        self
    }

    pub fn is_gate(&self) -> bool {
        self.class == EntityClass::Stargate
    }
}
