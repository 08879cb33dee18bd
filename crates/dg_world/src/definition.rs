use bevy::math::DVec3;
use dg_core::{EntityClass, ItemId, ItemTypeId, OwnerId, RegionClass, RegionId};
use serde::{Deserialize, Serialize};

use crate::entity::SystemEntity;
use crate::system::SolarSystem;

/// Serializable description of a universe of solar systems.
///
/// This is the static-data side of the world: systems, their gates and belts,
/// and any statics already placed. Decoration runs against the live
/// [`SolarSystem`]s built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniverseDefinition {
    /// Human-readable name for this universe.
    pub name: String,
    /// Solar systems.
    pub systems: Vec<SystemDefinition>,
}

impl Default for UniverseDefinition {
    fn default() -> Self {
        Self {
            name: "New Universe".to_string(),
            systems: Vec::new(),
        }
    }
}

impl UniverseDefinition {
    /// A small universe with one high-sec hub, one low-sec system and one
    /// wormhole.
    pub fn demo() -> Self {
        let mut jita = SystemDefinition::new(RegionId(30000142), "Jita", 0.9);
        jita.entities.push(EntityDefinition::gate(50001248, "Stargate (Perimeter)", DVec3::ZERO));
        jita.entities.push(EntityDefinition::gate(
            50001249,
            "Stargate (Maurasi)",
            DVec3::new(100_000.0, 0.0, 0.0),
        ));
        jita.entities.push(EntityDefinition::belt(
            40009081,
            "Jita IV - Asteroid Belt 1",
            DVec3::new(-2.5e9, 1.0e7, 4.0e8),
        ));
        jita.entities.push(EntityDefinition {
            id: ItemId(40009990),
            type_id: ItemTypeId(11136),
            class: EntityClass::Static,
            name: Some("Billboard @ Stargate (Perimeter)".to_string()),
            position: DVec3::new(20_000.0, 0.0, 0.0),
            owner: OwnerId::SYSTEM,
        });

        let mut amamake = SystemDefinition::new(RegionId(30002537), "Amamake", 0.4);
        amamake.entities.push(EntityDefinition::gate(50013913, "Stargate (Osoggur)", DVec3::new(3.1e9, 0.0, -7.0e8)));
        for (i, x) in [1.0e9, 2.0e9, 3.0e9].into_iter().enumerate() {
            amamake.entities.push(EntityDefinition::belt(
                40160001 + i as u32,
                &format!("Amamake III - Asteroid Belt {}", i + 1),
                DVec3::new(x, 0.0, 0.0),
            ));
        }

        let mut wormhole = SystemDefinition::new(RegionId(31000005), "J100820", -1.0);
        wormhole.entities.push(EntityDefinition::belt(40300001, "J100820 I - Asteroid Belt 1", DVec3::ZERO));

        Self {
            name: "Demo".to_string(),
            systems: vec![jita, amamake, wormhole],
        }
    }
}

/// A solar system and its static contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemDefinition {
    pub id: RegionId,
    pub name: String,
    /// Security rating in `[-1.0, 1.0]`.
    pub security: f64,
    /// Explicit class; derived from the id when absent.
    #[serde(default)]
    pub class: Option<RegionClass>,
    #[serde(default)]
    pub entities: Vec<EntityDefinition>,
}

impl SystemDefinition {
    pub fn new(id: RegionId, name: &str, security: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            security,
            class: None,
            entities: Vec::new(),
        }
    }

    /// Build the live system.
    pub fn build(&self) -> SolarSystem {
        let mut system = SolarSystem::new(self.id, self.name.clone(), self.security);
        if let Some(class) = self.class {
            system = system.with_class(class);
        }
        for def in &self.entities {
            system.insert(def.to_entity());
        }
        system
    }
}

/// A pre-existing entity inside a system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub id: ItemId,
    pub type_id: ItemTypeId,
    pub class: EntityClass,
    #[serde(default)]
    pub name: Option<String>,
    pub position: DVec3,
    #[serde(default)]
    pub owner: OwnerId,
}

impl EntityDefinition {
    pub fn gate(id: u32, name: &str, position: DVec3) -> Self {
        Self {
            id: ItemId(id),
            type_id: ItemTypeId(16),
            class: EntityClass::Stargate,
            name: Some(name.to_string()),
            position,
            owner: OwnerId::SYSTEM,
        }
    }

    pub fn belt(id: u32, name: &str, position: DVec3) -> Self {
        Self {
            id: ItemId(id),
            type_id: ItemTypeId(15),
            class: EntityClass::AsteroidBelt,
            name: Some(name.to_string()),
            position,
            owner: OwnerId::SYSTEM,
        }
    }

    pub fn to_entity(&self) -> SystemEntity {
        SystemEntity {
            id: self.id,
            type_id: self.type_id,
            owner: self.owner,
            name: self.name.clone(),
            position: self.position,
            class: self.class,
        }
    }
}
