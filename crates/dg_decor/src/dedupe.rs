//! Spatial deduplication against a snapshot.

use bevy::math::DVec3;
use dg_core::{distance_squared, ItemTypeId};

use crate::config::DedupScope;
use crate::snapshot::{EntitySnapshot, SnapshotRecord};

/// True if any record of `type_id` lies strictly within `radius` of `point`.
///
/// A non-positive `type_id` matches every type. A record exactly at `radius`
/// does not count.
pub fn exists(records: &[SnapshotRecord], type_id: ItemTypeId, point: DVec3, radius: f64) -> bool {
    let r2 = radius * radius;
    records.iter().any(|record| {
        (!type_id.is_valid() || record.type_id == type_id)
            && distance_squared(record.position, point) < r2
    })
}

/// Dedup checks for one pass: the pass-start snapshot, plus the pass's own
/// spawns when the scope is cumulative.
#[derive(Debug)]
pub struct DedupIndex<'a> {
    snapshot: &'a EntitySnapshot,
    scope: DedupScope,
    spawned: Vec<SnapshotRecord>,
}

impl<'a> DedupIndex<'a> {
    pub fn new(snapshot: &'a EntitySnapshot, scope: DedupScope) -> Self {
        Self {
            snapshot,
            scope,
            spawned: Vec::new(),
        }
    }

    pub fn is_duplicate(&self, type_id: ItemTypeId, point: DVec3, radius: f64) -> bool {
        self.snapshot.any_near(type_id, point, radius)
            || exists(&self.spawned, type_id, point, radius)
    }

    /// Note a prop spawned during this pass.
    pub fn record(&mut self, type_id: ItemTypeId, position: DVec3) {
        if self.scope == DedupScope::Cumulative {
            self.spawned.push(SnapshotRecord { type_id, position });
        }
    }
}
