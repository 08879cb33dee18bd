use bevy::math::DVec3;
use dg_core::{ItemTypeId, OwnerId};

use crate::anchor::Anchor;
use crate::config::DecorConfig;
use crate::placement::{
    OffsetRange, Placement, Spread, BELT_PATROL_SALT, GATE_PATROL_SALT, MARKER_SALT,
};

/// Point a dedup check is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupOrigin {
    /// The anchor: one check per anchor, and a hit skips the whole category there.
    Anchor,
    /// Each prop's own target position: a hit skips only that prop.
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dedup {
    pub radius: f64,
    pub around: DedupOrigin,
}

/// One kind of prop placed around anchors.
#[derive(Debug, Clone, PartialEq)]
pub struct PropCategory {
    /// Used in logs, and as the prop name when there is no prefix.
    pub label: String,
    pub type_id: ItemTypeId,
    pub owner: OwnerId,
    pub placement: Placement,
    pub dedup: Option<Dedup>,
    /// Most props of this category one pass may place in a system.
    pub cap: Option<usize>,
    /// Prop name is this prefix followed by the anchor name.
    pub name_prefix: Option<String>,
}

impl PropCategory {
    /// Disabled categories are skipped without any work.
    pub fn is_enabled(&self) -> bool {
        self.type_id.is_valid() && self.cap != Some(0) && self.placement.count() > 0
    }

    pub fn prop_name(&self, anchor: &Anchor) -> String {
        match &self.name_prefix {
            Some(prefix) => format!("{}{}", prefix, anchor.name),
            None => self.label.clone(),
        }
    }

    /// Check made once per anchor, before any prop is placed there.
    pub fn anchor_dedup(&self, anchor: &Anchor) -> Option<(DVec3, f64)> {
        match self.dedup {
            Some(Dedup {
                radius,
                around: DedupOrigin::Anchor,
            }) => Some((anchor.position, radius)),
            _ => None,
        }
    }

    /// Check made for each prop at its own target position.
    pub fn target_dedup(&self, target: DVec3) -> Option<(DVec3, f64)> {
        match self.dedup {
            Some(Dedup {
                radius,
                around: DedupOrigin::Target,
            }) => Some((target, radius)),
            _ => None,
        }
    }
}

/// Enabled categories for the scattered gate layout: marker first, then patrols.
pub fn gate_categories(config: &DecorConfig) -> Vec<PropCategory> {
    let mut categories = Vec::new();

    if config.markers_enabled() {
        categories.push(PropCategory {
            label: "Billboard".to_string(),
            type_id: config.marker_type,
            owner: config.owner,
            placement: Placement::Scattered {
                distance: OffsetRange::new(config.marker_min_offset, config.marker_max_offset),
                count: 1,
                salt: MARKER_SALT,
                spread: Spread::PerProp,
            },
            dedup: Some(Dedup {
                radius: config.marker_dedup_radius,
                around: DedupOrigin::Anchor,
            }),
            cap: None,
            name_prefix: Some("Billboard @ ".to_string()),
        });
    }

    // Patrols carry no persistent identity, so they are never deduplicated.
    if config.gate_patrols_enabled() {
        categories.push(PropCategory {
            label: "Gate Patrol".to_string(),
            type_id: config.patrol_type,
            owner: config.owner,
            placement: Placement::Scattered {
                distance: OffsetRange::fixed(config.patrol_spawn_offset),
                count: config.patrols_per_gate as usize,
                salt: GATE_PATROL_SALT,
                spread: Spread::PerProp,
            },
            dedup: None,
            cap: None,
            name_prefix: Some("CONCORD Police ".to_string()),
        });
    }

    categories.retain(PropCategory::is_enabled);
    categories
}

/// Enabled categories for belts.
pub fn belt_categories(config: &DecorConfig) -> Vec<PropCategory> {
    if !config.belt_patrols_enabled() {
        return Vec::new();
    }

    let mut categories = vec![PropCategory {
        label: "Belt Patrol".to_string(),
        type_id: config.belt_patrol_type,
        owner: config.owner,
        placement: Placement::Scattered {
            distance: OffsetRange::fixed(config.belt_spawn_offset),
            count: config.patrols_per_belt as usize,
            salt: BELT_PATROL_SALT,
            spread: Spread::Shared,
        },
        dedup: Some(Dedup {
            radius: config.belt_patrol_dedup_radius,
            around: DedupOrigin::Anchor,
        }),
        cap: Some(config.max_belt_patrols_per_system as usize),
        name_prefix: Some("CONCORD Belt Patrol @ ".to_string()),
    }];
    categories.retain(PropCategory::is_enabled);
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::AnchorKind;
    use dg_core::ItemId;

    fn gate() -> Anchor {
        Anchor {
            id: ItemId(50001248),
            name: "Stargate (Perimeter)".to_string(),
            position: DVec3::new(5.0, 0.0, 0.0),
            kind: AnchorKind::Gate,
        }
    }

    #[test]
    fn default_gate_categories_are_marker_then_patrol() {
        let categories = gate_categories(&DecorConfig::default());
        let labels: Vec<_> = categories.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Billboard", "Gate Patrol"]);
        assert!(categories.iter().all(PropCategory::is_enabled));
    }

    #[test]
    fn disabled_marker_leaves_only_patrols() {
        let config = DecorConfig {
            marker_type: ItemTypeId(0),
            ..Default::default()
        };
        let categories = gate_categories(&config);
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].type_id, config.patrol_type);
    }

    #[test]
    fn names_follow_prefix_or_label() {
        let categories = gate_categories(&DecorConfig::default());
        assert_eq!(categories[0].prop_name(&gate()), "Billboard @ Stargate (Perimeter)");
        assert_eq!(categories[1].prop_name(&gate()), "CONCORD Police Stargate (Perimeter)");

        let mut unnamed = categories[0].clone();
        unnamed.name_prefix = None;
        assert_eq!(unnamed.prop_name(&gate()), "Billboard");
    }

    #[test]
    fn dedup_checks_follow_origin() {
        let target = DVec3::new(0.0, 9.0, 0.0);
        let belt = &belt_categories(&DecorConfig::default())[0];
        assert_eq!(belt.anchor_dedup(&gate()), Some((gate().position, 30_000.0)));
        assert_eq!(belt.target_dedup(target), None);

        let mut per_prop = belt.clone();
        per_prop.dedup = Some(Dedup {
            radius: 1.0,
            around: DedupOrigin::Target,
        });
        assert_eq!(per_prop.anchor_dedup(&gate()), None);
        assert_eq!(per_prop.target_dedup(target), Some((target, 1.0)));

        let gate_patrol = &gate_categories(&DecorConfig::default())[1];
        assert_eq!(gate_patrol.anchor_dedup(&gate()), None);
        assert_eq!(gate_patrol.target_dedup(target), None);
    }

    #[test]
    fn zero_cap_category_is_disabled() {
        let mut belt = belt_categories(&DecorConfig::default()).remove(0);
        assert!(belt.is_enabled());
        belt.cap = Some(0);
        assert!(!belt.is_enabled());
    }

    #[test]
    fn zero_counts_and_caps_drop_the_category() {
        let config = DecorConfig {
            patrols_per_gate: 0,
            max_belt_patrols_per_system: 0,
            ..Default::default()
        };
        let labels: Vec<_> = gate_categories(&config).into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["Billboard".to_string()]);
        assert!(belt_categories(&config).is_empty());
    }
}
