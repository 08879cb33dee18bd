use bevy::prelude::*;
use dg_core::{ItemTypeId, OwnerId};
use serde::{Deserialize, Serialize};

/// CONCORD billboard.
pub const BILLBOARD_TYPE: ItemTypeId = ItemTypeId(11136);
/// Gate sentry gun.
pub const SENTRY_GUN_TYPE: ItemTypeId = ItemTypeId(3742);
/// CONCORD Police Commander.
pub const CONCORD_POLICE_TYPE: ItemTypeId = ItemTypeId(11125);

/// How gates are decorated on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GateLayout {
    /// One marker at a seeded random offset plus optional patrols.
    #[default]
    Scattered,
    /// The fixed environment template.
    Template,
}

/// What a dedup check looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DedupScope {
    /// Only the snapshot taken when the pass started.
    #[default]
    PassStart,
    /// The snapshot plus everything spawned earlier in the same pass.
    Cumulative,
}

/// Tunables for region decoration.
///
/// Every field has a default, so a config file only needs to name what it
/// changes. Type ids `<= 0` disable the matching category.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorConfig {
    /// Owner given to every decoration prop.
    pub owner: OwnerId,

    /// Gate marker type.
    pub marker_type: ItemTypeId,
    /// Closest a marker may be placed to its gate (metres).
    pub marker_min_offset: f64,
    /// Farthest a marker may be placed from its gate (metres).
    pub marker_max_offset: f64,
    /// A gate with a marker of the same type this close already gets no new one.
    pub marker_dedup_radius: f64,

    pub enable_patrols: bool,
    pub patrol_type: ItemTypeId,
    pub patrols_per_gate: u32,
    /// Distance from the gate patrols start at.
    pub patrol_spawn_offset: f64,

    pub enable_belt_patrols: bool,
    pub belt_patrol_type: ItemTypeId,
    pub patrols_per_belt: u32,
    pub belt_spawn_offset: f64,
    /// Cap on belt patrols for a whole system, not per belt.
    pub max_belt_patrols_per_system: u32,
    pub belt_patrol_dedup_radius: f64,

    /// Leave wormhole systems untouched.
    pub skip_wormholes: bool,
    /// Only place belt patrols where security is at least `min_sec_for_belts`.
    pub only_high_sec: bool,
    pub min_sec_for_belts: f64,

    pub gate_layout: GateLayout,
    pub dedup_scope: DedupScope,
}

impl Default for DecorConfig {
    fn default() -> Self {
        Self {
            owner: OwnerId::SYSTEM,

            marker_type: BILLBOARD_TYPE,
            marker_min_offset: 15_000.0,
            marker_max_offset: 30_000.0,
            marker_dedup_radius: 40_000.0,

            enable_patrols: true,
            patrol_type: CONCORD_POLICE_TYPE,
            patrols_per_gate: 1,
            patrol_spawn_offset: 22_000.0,

            enable_belt_patrols: true,
            belt_patrol_type: CONCORD_POLICE_TYPE,
            patrols_per_belt: 1,
            belt_spawn_offset: 18_000.0,
            max_belt_patrols_per_system: 8,
            belt_patrol_dedup_radius: 30_000.0,

            skip_wormholes: true,
            only_high_sec: false,
            min_sec_for_belts: 0.5,

            gate_layout: GateLayout::Scattered,
            dedup_scope: DedupScope::PassStart,
        }
    }
}

impl DecorConfig {
    pub fn markers_enabled(&self) -> bool {
        self.marker_type.is_valid()
            && distances_usable(
                "marker",
                &[
                    self.marker_min_offset,
                    self.marker_max_offset,
                    self.marker_dedup_radius,
                ],
            )
    }

    pub fn gate_patrols_enabled(&self) -> bool {
        self.enable_patrols
            && self.patrol_type.is_valid()
            && distances_usable("gate patrol", &[self.patrol_spawn_offset])
    }

    pub fn belt_patrols_enabled(&self) -> bool {
        self.enable_belt_patrols
            && self.belt_patrol_type.is_valid()
            && distances_usable(
                "belt patrol",
                &[self.belt_spawn_offset, self.belt_patrol_dedup_radius],
            )
    }
}

/// Offsets and radii must be finite and non-negative. A category with a bad
/// one is switched off.
fn distances_usable(category: &str, distances: &[f64]) -> bool {
    let usable = distances.iter().all(|d| d.is_finite() && *d >= 0.0);
    if !usable {
        warn!(
            "Decoration config has a negative or non-finite {} distance {:?}; {} props disabled.",
            category, distances, category
        );
    }
    usable
}
