use bevy::prelude::*;
use dg_core::RegionId;
use std::collections::BTreeMap;

use crate::definition::UniverseDefinition;
use crate::region::Region;
use crate::system::SolarSystem;

/// Every live solar system, keyed by id.
#[derive(Resource, Debug, Clone, Default)]
pub struct Universe {
    systems: BTreeMap<RegionId, SolarSystem>,
}

impl Universe {
    pub fn from_definition(definition: &UniverseDefinition) -> Self {
        let mut universe = Self::default();
        for system in &definition.systems {
            universe.insert(system.build());
        }
        universe
    }

    /// Add or replace a system.
    pub fn insert(&mut self, system: SolarSystem) {
        self.systems.insert(system.id(), system);
    }

    pub fn get(&self, id: RegionId) -> Option<&SolarSystem> {
        self.systems.get(&id)
    }

    pub fn get_mut(&mut self, id: RegionId) -> Option<&mut SolarSystem> {
        self.systems.get_mut(&id)
    }

    /// System ids in ascending order.
    pub fn ids(&self) -> Vec<RegionId> {
        self.systems.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}
