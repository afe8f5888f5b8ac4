//! One addressable unit of the spatial grid.
//!
//! RULE: the ordered tag list and the `TagSet` index are always in sync.
//! Every tag mutation goes through `add_tag`/`remove_tag`, which touch
//! both structures. Occupancy is membership only — entities are owned by
//! the registry, a cell just lists who stands on it.

use crate::tag::{Tag, TagSet};
use crate::types::{CellCoord, EntityId, Tick};

#[derive(Debug, Clone)]
pub struct Cell {
    coord:     CellCoord,
    entities:  Vec<EntityId>,
    tags:      Vec<Tag>,
    tag_index: TagSet,
    tick_accu: Tick,
}

impl Cell {
    pub fn new(coord: CellCoord) -> Self {
        Self {
            coord,
            entities:  Vec::new(),
            tags:      Vec::new(),
            tag_index: TagSet::new(),
            tick_accu: 0,
        }
    }

    pub const fn coord(&self) -> CellCoord {
        self.coord
    }

    pub const fn x(&self) -> i32 {
        self.coord.x
    }

    pub const fn y(&self) -> i32 {
        self.coord.y
    }

    /// Entities currently occupying this cell, in arrival order.
    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }

    /// Add an occupant. Duplicate ids are not filtered — an entity listed
    /// twice is a bookkeeping error of the movement logic, not ours.
    pub fn add_entity(&mut self, id: EntityId) {
        self.entities.push(id);
    }

    /// Remove one occurrence of an occupant. No-op if absent.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        match self.entities.iter().position(|e| *e == id) {
            Some(pos) => {
                let _ = self.entities.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Tags carried by this cell, in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Attach a tag. Duplicates are rejected through the index, not by
    /// scanning the list. Returns true if the tag was newly added.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tag_index.contains(tag) {
            return false;
        }
        self.tags.push(tag);
        let _ = self.tag_index.add(tag);
        true
    }

    /// Attach every tag in the slice. An empty slice is a no-op.
    pub fn add_tags(&mut self, tags: &[Tag]) {
        for tag in tags {
            let _ = self.add_tag(*tag);
        }
    }

    /// Detach a tag from both the ordered list and the index.
    /// Returns true if a removal occurred.
    pub fn remove_tag(&mut self, tag: Tag) -> bool {
        let removed = match self.tags.iter().position(|t| *t == tag) {
            Some(pos) => {
                let _ = self.tags.remove(pos);
                true
            }
            None => false,
        };
        if removed {
            let _ = self.tag_index.remove(tag);
        }
        removed
    }

    /// Membership test by tag value, delegated to the index.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tag_index.contains(tag)
    }

    /// Simulation-time bookkeeping, opaque to the protocol layer.
    /// The accumulator only ever grows.
    pub fn accumulate(&mut self, ticks: Tick) {
        self.tick_accu += ticks;
    }

    pub const fn tick_accu(&self) -> Tick {
        self.tick_accu
    }

    /// Pairwise-mismatch similarity scan inherited from the original
    /// map code. The inner cursor `j` carries over between outer passes,
    /// so once the other cell's tags are exhausted the remaining outer
    /// tags contribute nothing to the count.
    ///
    /// TODO: confirm with the map owners whether the non-resetting inner
    /// cursor is intended; tests/tags.rs pins the current behaviour so a
    /// change here will be caught.
    pub fn is_similar(&self, other: &Cell, threshold: usize) -> bool {
        let mut i = 0;
        let mut j = 0;
        let mut counter = 0;
        while counter < threshold && i < self.tags.len() {
            while counter < threshold && j < other.tags.len() {
                if self.tags[i] != other.tags[j] {
                    counter += 1;
                }
                j += 1;
            }
            i += 1;
        }
        counter < threshold
    }
}

/// Two cells are the same cell iff they share coordinates. Tags and
/// occupants never enter the comparison.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl std::hash::Hash for Cell {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell{}", self.coord)
    }
}
