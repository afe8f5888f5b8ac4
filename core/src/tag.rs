//! Cell tags and the fast-membership index over them.
//!
//! RULE: tag values form a bounded, known domain. The `TagSet` bit index
//! is addressed by `Tag::value()`, so every tag must fit in the fixed
//! range below. Adding a variant is fine; renumbering existing ones is
//! a wire-visible change and is not.

use serde::{Deserialize, Serialize};

/// A value-identified marker attachable to any number of cells.
/// Tags are shared, immutable value objects; equality is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Tag {
    Blocked  = 0,
    Water    = 1,
    Forest   = 2,
    Mountain = 3,
    Road     = 4,
    Spawn    = 5,
    Lair     = 6,
    Shelter  = 7,
}

impl Tag {
    /// Every tag in the domain, in value order.
    pub const ALL: [Tag; 8] = [
        Tag::Blocked,
        Tag::Water,
        Tag::Forest,
        Tag::Mountain,
        Tag::Road,
        Tag::Spawn,
        Tag::Lair,
        Tag::Shelter,
    ];

    /// The bit-index value of this tag. Stable across the process.
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Bit-vector membership index over the tag domain.
///
/// `contains` is a single mask test — O(1) no matter how many tags are
/// stored. The set itself carries no ordering; ordered traversal lives
/// with the cell's tag list, which mirrors this index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagSet {
    bits: u64,
}

impl TagSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Insert the tag if absent. Returns true if an insertion occurred.
    pub fn add(&mut self, tag: Tag) -> bool {
        let mask = 1u64 << tag.value();
        let newly = self.bits & mask == 0;
        self.bits |= mask;
        newly
    }

    /// Remove the tag if present. Returns true if a removal occurred.
    pub fn remove(&mut self, tag: Tag) -> bool {
        let mask = 1u64 << tag.value();
        let present = self.bits & mask != 0;
        self.bits &= !mask;
        present
    }

    /// O(1) membership test by tag value.
    pub const fn contains(&self, tag: Tag) -> bool {
        self.bits & (1u64 << tag.value()) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}
