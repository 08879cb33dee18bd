//! In-memory solar system: entity registry, gate index, grid, item factory.

use bevy::math::DVec3;
use dg_core::{EntityClass, ItemId, ItemTypeId, RegionClass, RegionId};
use std::collections::{BTreeMap, BTreeSet};

use crate::entity::SystemEntity;
use crate::grid::BubbleGrid;
use crate::item::{InventoryItem, ItemData, ItemFactory};
use crate::region::Region;

/// A live solar system.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    id: RegionId,
    name: String,
    security: f64,
    class: RegionClass,
    /// Entity registry, iterated in ascending id order.
    entities: BTreeMap<ItemId, SystemEntity>,
    gate_index: BTreeSet<ItemId>,
    grid: BubbleGrid,
    factory: ItemFactory,
    /// Entities that raised an anomaly signal on registration.
    signals: Vec<ItemId>,
    /// Static entities announced to observers.
    broadcasts: Vec<ItemId>,
}

impl SolarSystem {
    pub fn new(id: RegionId, name: impl Into<String>, security: f64) -> Self {
        Self {
            id,
            name: name.into(),
            security,
            class: RegionClass::of(id),
            entities: BTreeMap::new(),
            gate_index: BTreeSet::new(),
            grid: BubbleGrid::default(),
            factory: ItemFactory::default(),
            signals: Vec::new(),
            broadcasts: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: RegionClass) -> Self {
        self.class = class;
        self
    }

    /// Register a pre-existing entity (loaded from static data).
    pub fn insert(&mut self, entity: SystemEntity) {
        self.grid.add(entity.id, entity.position);
        if entity.is_gate() {
            self.gate_index.insert(entity.id);
        }
        self.entities.insert(entity.id, entity);
    }

    pub fn add_gate(&mut self, id: u32, name: &str, position: DVec3) {
        self.insert(
            SystemEntity::new(ItemId(id), ItemTypeId(16), EntityClass::Stargate, position)
                .with_name(name),
        );
    }

    pub fn add_belt(&mut self, id: u32, name: &str, position: DVec3) {
        self.insert(
            SystemEntity::new(ItemId(id), ItemTypeId(15), EntityClass::AsteroidBelt, position)
                .with_name(name),
        );
    }

    pub fn add_static(&mut self, id: u32, type_id: ItemTypeId, position: DVec3) {
        self.insert(SystemEntity::new(ItemId(id), type_id, EntityClass::Static, position));
    }

    pub fn entity(&self, id: ItemId) -> Option<&SystemEntity> {
        self.entities.get(&id)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// All registered entities of one type, in registry order.
    pub fn entities_of_type(&self, type_id: ItemTypeId) -> Vec<&SystemEntity> {
        self.entities.values().filter(|e| e.type_id == type_id).collect()
    }

    pub fn grid(&self) -> &BubbleGrid {
        &self.grid
    }

    pub fn factory(&self) -> &ItemFactory {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut ItemFactory {
        &mut self.factory
    }

    pub fn signals(&self) -> &[ItemId] {
        &self.signals
    }

    pub fn broadcasts(&self) -> &[ItemId] {
        &self.broadcasts
    }
}

impl Region for SolarSystem {
    fn id(&self) -> RegionId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn security(&self) -> f64 {
        self.security
    }

    fn class(&self) -> RegionClass {
        self.class
    }

    fn entities(&self) -> Vec<SystemEntity> {
        self.entities.values().cloned().collect()
    }

    fn gates(&self) -> Vec<SystemEntity> {
        self.gate_index
            .iter()
            .filter_map(|id| self.entities.get(id))
            .cloned()
            .collect()
    }

    fn spawn_item(&mut self, data: ItemData) -> Option<InventoryItem> {
        self.factory.spawn_item(data)
    }

    fn wrap_static(&self, item: &InventoryItem) -> SystemEntity {
        let entity = SystemEntity::new(item.id, item.type_id, EntityClass::Static, item.position)
            .with_owner(item.owner);
        if item.name.is_empty() {
            entity
        } else {
            entity.with_name(item.name.clone())
        }
    }

    fn add_to_grid(&mut self, entity: &SystemEntity) {
        self.grid.add(entity.id, entity.position);
    }

    fn add_entity(&mut self, entity: SystemEntity, signal: bool) {
        if signal {
            self.signals.push(entity.id);
        }
        if entity.is_gate() {
            self.gate_index.insert(entity.id);
        }
        self.entities.insert(entity.id, entity);
    }

    fn send_static(&mut self, id: ItemId) {
        if self.entities.contains_key(&id) {
            self.broadcasts.push(id);
        }
    }
}
