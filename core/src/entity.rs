//! Entities — uniquely identified simulation objects.
//!
//! An entity's id is assigned by the registry and is the only handle the
//! protocol layer ever sees. Spatial truth lives in the cells' occupant
//! lists; the position recorded here is the entity's own bookkeeping and
//! is kept consistent by the movement logic.

use crate::types::{CellCoord, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id:       EntityId,
    pub name:     String,
    pub position: CellCoord,
    pub kind:     EntityKind,
}

/// Kind payload. Variants added as the bestiary grows — never reordered,
/// the wire views key off the serde tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    Player {
        hitpoints:     i32,
        max_hitpoints: i32,
        level:         u32,
    },
    Dragon {
        hitpoints:     i32,
        max_hitpoints: i32,
        hoard:         u32,
    },
}

impl Entity {
    /// Stable lowercase kind name, also the leading wire token.
    pub const fn kind_name(&self) -> &'static str {
        match self.kind {
            EntityKind::Player { .. } => "player",
            EntityKind::Dragon { .. } => "dragon",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} #{} {:?}", self.kind_name(), self.id, self.name)
    }
}
