use bevy::math::DVec3;
use dg_core::ItemTypeId;
use dg_world::Region;

use crate::dedupe;

/// Type and position of one entity at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotRecord {
    pub type_id: ItemTypeId,
    pub position: DVec3,
}

/// Point-in-time copy of what a system contains, used for dedup checks.
///
/// Taken once per pass. Later changes to the live system are not reflected.
#[derive(Debug, Clone, Default)]
pub struct EntitySnapshot {
    records: Vec<SnapshotRecord>,
}

impl EntitySnapshot {
    pub fn capture<R: Region + ?Sized>(region: &R) -> Self {
        Self {
            records: region
                .entities()
                .iter()
                .map(|e| SnapshotRecord {
                    type_id: e.type_id,
                    position: e.position,
                })
                .collect(),
        }
    }

    pub fn from_records(records: Vec<SnapshotRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// See [`dedupe::exists`].
    pub fn any_near(&self, type_id: ItemTypeId, point: DVec3, radius: f64) -> bool {
        dedupe::exists(&self.records, type_id, point, radius)
    }
}
