//! Spatial partition of a solar system into cubic bubbles.

use bevy::math::DVec3;
use dg_core::ItemId;
use std::collections::HashMap;

/// Default bubble edge length in metres.
pub const DEFAULT_BUBBLE_SIZE: f64 = 300_000.0;

/// Integer coordinate of a bubble.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub struct BubbleCoord {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl BubbleCoord {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

/// Tracks which entities sit in which bubble for proximity and visibility queries.
#[derive(Debug, Clone)]
pub struct BubbleGrid {
    bubble_size: f64,
    bubbles: HashMap<BubbleCoord, Vec<ItemId>>,
    positions: HashMap<ItemId, DVec3>,
}

impl Default for BubbleGrid {
    fn default() -> Self {
        Self::new(DEFAULT_BUBBLE_SIZE)
    }
}

impl BubbleGrid {
    pub fn new(bubble_size: f64) -> Self {
        Self {
            bubble_size,
            bubbles: HashMap::new(),
            positions: HashMap::new(),
        }
    }

    /// Bubble containing a position.
    pub fn bubble_of(&self, position: DVec3) -> BubbleCoord {
        let cell = (position / self.bubble_size).floor();
        BubbleCoord::new(cell.x as i64, cell.y as i64, cell.z as i64)
    }

    /// Put an entity on grid. Re-adding moves it.
    pub fn add(&mut self, id: ItemId, position: DVec3) {
        self.remove(id);
        let coord = self.bubble_of(position);
        self.bubbles.entry(coord).or_default().push(id);
        self.positions.insert(id, position);
    }

    /// Take an entity off grid. Returns false if it was not on grid.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(position) = self.positions.remove(&id) else {
            return false;
        };
        let coord = self.bubble_of(position);
        if let Some(members) = self.bubbles.get_mut(&coord) {
            members.retain(|m| *m != id);
            if members.is_empty() {
                self.bubbles.remove(&coord);
            }
        }
        true
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
