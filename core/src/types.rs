//! Shared primitive types used across the entire world model.

use serde::{Deserialize, Serialize};

/// A simulation tick. One tick = one scheduler step of the world.
pub type Tick = u64;

/// A process-unique entity identifier. Assigned by the registry at
/// registration time and never reused while the entity stays registered.
pub type EntityId = u32;

/// An addressable coordinate in the grid. Signed so that neighbour
/// arithmetic at the borders stays in range; the grid itself rejects
/// anything outside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub y: i32,
}

impl CellCoord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}|{})", self.x, self.y)
    }
}
