use bevy::math::DVec3;
use bevy::prelude::*;
use dg_core::{ItemTypeId, Offset, OwnerId};
use serde::{Deserialize, Serialize};

use crate::category::{Dedup, DedupOrigin, PropCategory};
use crate::config::{BILLBOARD_TYPE, SENTRY_GUN_TYPE};
use crate::placement::Placement;

/// Default radius around each template slot inside which an existing prop
/// of the same type counts as already placed.
pub const TEMPLATE_SLOT_RADIUS: f64 = 1_000.0;

/// Fixed layout of props applied around every gate.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentTemplate {
    /// Applied in order around each gate.
    pub categories: Vec<TemplateCategory>,
}

/// One group of identical props in a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateCategory {
    pub label: String,
    /// `0` disables the category.
    pub type_id: ItemTypeId,
    #[serde(default)]
    pub owner: OwnerId,
    /// Gate-relative offsets, one prop each.
    pub offsets: Vec<Offset>,
    /// Skip a slot if a prop of this type is already within this radius of it.
    #[serde(default)]
    pub dedup_radius: Option<f64>,
}

impl Default for EnvironmentTemplate {
    fn default() -> Self {
        Self::default_gate()
    }
}

impl EnvironmentTemplate {
    /// Billboard in front of the gate, a box of eight sentries, and two
    /// civilian slots that stay empty until a civilian type is configured.
    pub fn default_gate() -> Self {
        const D: f64 = 10_000.0;
        const H: f64 = 8_000.0;

        let billboard = TemplateCategory {
            label: "Billboard".to_string(),
            type_id: BILLBOARD_TYPE,
            owner: OwnerId::SYSTEM,
            offsets: vec![DVec3::new(15_000.0, 0.0, 0.0)],
            dedup_radius: Some(TEMPLATE_SLOT_RADIUS),
        };

        let sentries = TemplateCategory {
            label: "Sentry Gun".to_string(),
            type_id: SENTRY_GUN_TYPE,
            owner: OwnerId::SYSTEM,
            offsets: vec![
                // top ring
                DVec3::new(D, H, 0.0),
                DVec3::new(-D, H, 0.0),
                DVec3::new(0.0, H, D),
                DVec3::new(0.0, H, -D),
                // bottom ring
                DVec3::new(D, -H, 0.0),
                DVec3::new(-D, -H, 0.0),
                DVec3::new(0.0, -H, D),
                DVec3::new(0.0, -H, -D),
            ],
            dedup_radius: Some(TEMPLATE_SLOT_RADIUS),
        };

        let civilians = TemplateCategory {
            label: "Civilian Ship".to_string(),
            type_id: ItemTypeId::NONE,
            owner: OwnerId::SYSTEM,
            offsets: vec![
                DVec3::new(20_000.0, 5_000.0, 5_000.0),
                DVec3::new(-20_000.0, -5_000.0, -5_000.0),
            ],
            dedup_radius: Some(TEMPLATE_SLOT_RADIUS),
        };

        Self {
            categories: vec![billboard, sentries, civilians],
        }
    }

    /// True if at least one category would place something.
    pub fn is_enabled(&self) -> bool {
        self.categories.iter().any(TemplateCategory::is_enabled)
    }

    /// Props placed around one gate.
    pub fn props_per_gate(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| c.is_enabled())
            .map(|c| c.offsets.len())
            .sum()
    }

    /// Enabled categories as fixed-offset prop categories.
    pub fn prop_categories(&self) -> Vec<PropCategory> {
        self.categories
            .iter()
            .filter(|c| c.is_enabled())
            .map(TemplateCategory::to_prop_category)
            .collect()
    }
}

impl TemplateCategory {
    pub fn is_enabled(&self) -> bool {
        self.type_id.is_valid() && !self.offsets.is_empty()
    }

    fn to_prop_category(&self) -> PropCategory {
        PropCategory {
            label: self.label.clone(),
            type_id: self.type_id,
            owner: self.owner,
            placement: Placement::Fixed {
                offsets: self.offsets.clone(),
            },
            dedup: self.dedup_radius.map(|radius| Dedup {
                radius,
                around: DedupOrigin::Target,
            }),
            cap: None,
            name_prefix: None,
        }
    }
}
