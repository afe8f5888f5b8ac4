//! The entity registry — single authority over entity identity.
//!
//! RULE: the command layer looks entities up only through a registry
//! passed to it explicitly. There is no ambient global table; tests
//! inject their own fixtures.

use crate::entity::{Entity, EntityKind};
use crate::types::{CellCoord, EntityId};
use std::collections::HashMap;

#[derive(Debug)]
pub struct EntityRegistry {
    next_id:  EntityId,
    entities: HashMap<EntityId, Entity>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            next_id:  1,
            entities: HashMap::new(),
        }
    }

    /// Mint a fresh id and register the entity under it. The counter is
    /// monotone, so an id is never reused while the process lives.
    pub fn register(&mut self, name: String, position: CellCoord, kind: EntityKind) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        let previous = self.entities.insert(
            id,
            Entity {
                id,
                name,
                position,
                kind,
            },
        );
        debug_assert!(previous.is_none(), "entity id {id} minted twice");
        id
    }

    pub fn lookup(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn lookup_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    /// Unregister and hand the entity back, if it was registered.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
