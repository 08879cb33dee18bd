//! Anchor discovery: finds the gates and belts decoration is placed around.

use bevy::math::DVec3;
use dg_core::{EntityClass, ItemId};
use dg_world::{Region, SystemEntity};

/// What an anchor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorKind {
    Gate,
    Belt,
}

impl AnchorKind {
    /// Classify a world entity. `None` for anything that is not an anchor.
    pub fn of(class: EntityClass) -> Option<Self> {
        match class {
            EntityClass::Stargate => Some(Self::Gate),
            EntityClass::AsteroidBelt => Some(Self::Belt),
            _ => None,
        }
    }

    /// Name used when the backing item has none.
    pub fn fallback_name(&self) -> &'static str {
        match self {
            Self::Gate => "Stargate",
            Self::Belt => "Asteroid Belt",
        }
    }
}

/// Read-only view of a gate or belt.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub id: ItemId,
    pub name: String,
    pub position: DVec3,
    pub kind: AnchorKind,
}

impl Anchor {
    pub fn from_entity(entity: &SystemEntity) -> Option<Self> {
        let kind = AnchorKind::of(entity.class)?;
        Some(Self {
            id: entity.id,
            name: entity
                .name
                .clone()
                .unwrap_or_else(|| kind.fallback_name().to_string()),
            position: entity.position,
            kind,
        })
    }
}

/// All anchors of one kind in the system, in registry order.
pub fn find_anchors<R: Region + ?Sized>(region: &R, kind: AnchorKind) -> Vec<Anchor> {
    region
        .entities()
        .iter()
        .filter_map(Anchor::from_entity)
        .filter(|anchor| anchor.kind == kind)
        .collect()
}

/// Gates listed in the system's gate index.
pub fn indexed_gates<R: Region + ?Sized>(region: &R) -> Vec<Anchor> {
    region
        .gates()
        .iter()
        .filter_map(Anchor::from_entity)
        .filter(|anchor| anchor.kind == AnchorKind::Gate)
        .collect()
}
