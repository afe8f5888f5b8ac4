//! The authoritative world — grid and entity registry wired together.
//!
//! RULE: spawning and despawning are the only places occupancy and
//! registry change together; everything else touches one or the other.
//! Callers that share a `World` across sessions serialize access
//! themselves (the server wraps it in a mutex) — a lookup here returns
//! a consistent snapshot at the moment of call.

use crate::config::WorldConfig;
use crate::entity::EntityKind;
use crate::error::{WorldError, WorldResult};
use crate::grid::Grid;
use crate::mapgen;
use crate::registry::EntityRegistry;
use crate::rng::{RngStream, StreamSlot};
use crate::tag::Tag;
use crate::types::{CellCoord, EntityId, Tick};
use crate::wire::WireContext;

const DRAGON_NAMES: &[&str] = &[
    "Vessarax", "Korrheth", "Ilmyra", "Drostan", "Phaelwyrm", "Aurvang",
];

const PLAYER_BASE_HITPOINTS: i32 = 20;
const DRAGON_BASE_HITPOINTS: i32 = 120;
const DRAGON_MAX_HOARD: u64 = 1000;

pub struct World {
    grid:      Grid,
    registry:  EntityRegistry,
    tick:      Tick,
    spawn_rng: RngStream,
}

impl World {
    /// Build the world described by the config: grid, terrain scatter,
    /// and the initial dragon population on lair cells.
    pub fn new(config: &WorldConfig) -> WorldResult<Self> {
        let mut grid = Grid::new(config.grid_width, config.grid_height)?;
        mapgen::scatter_tags(&mut grid, config.master_seed, &config.terrain);

        let mut world = Self {
            grid,
            registry: EntityRegistry::new(),
            tick: 0,
            spawn_rng: RngStream::new(config.master_seed, StreamSlot::Spawn),
        };

        let lairs: Vec<CellCoord> = world
            .grid
            .cells()
            .filter(|c| c.has_tag(Tag::Lair))
            .map(|c| c.coord())
            .collect();
        for (i, at) in lairs.iter().take(config.initial_dragons as usize).enumerate() {
            let id = world.spawn_dragon(*at)?;
            log::info!("seeded dragon {id} in lair {i} at {at}");
        }

        log::info!(
            "world ready: {}x{} cells, {} entities, seed {}",
            config.grid_width,
            config.grid_height,
            world.registry.len(),
            config.master_seed
        );
        Ok(world)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    pub const fn tick(&self) -> Tick {
        self.tick
    }

    /// Context handed to wire views: a snapshot of the world clock.
    pub const fn wire_context(&self) -> WireContext {
        WireContext { tick: self.tick }
    }

    /// Advance the world clock and every cell's accumulator by one tick.
    pub fn advance_tick(&mut self) -> Tick {
        self.tick += 1;
        for cell in self.grid.cells_mut() {
            cell.accumulate(1);
        }
        self.tick
    }

    /// Register a player and place them on the occupying cell.
    pub fn spawn_player(&mut self, name: &str, at: CellCoord) -> WorldResult<EntityId> {
        self.spawn(
            name.to_string(),
            at,
            EntityKind::Player {
                hitpoints:     PLAYER_BASE_HITPOINTS,
                max_hitpoints: PLAYER_BASE_HITPOINTS,
                level:         1,
            },
        )
    }

    /// Register a dragon with a rolled name and hoard.
    pub fn spawn_dragon(&mut self, at: CellCoord) -> WorldResult<EntityId> {
        let name = DRAGON_NAMES
            [self.spawn_rng.next_u64_below(DRAGON_NAMES.len() as u64) as usize]
            .to_string();
        let hoard = self.spawn_rng.next_u64_below(DRAGON_MAX_HOARD) as u32;
        self.spawn(
            name,
            at,
            EntityKind::Dragon {
                hitpoints:     DRAGON_BASE_HITPOINTS,
                max_hitpoints: DRAGON_BASE_HITPOINTS,
                hoard,
            },
        )
    }

    fn spawn(&mut self, name: String, at: CellCoord, kind: EntityKind) -> WorldResult<EntityId> {
        if !self.grid.contains(at) {
            return Err(WorldError::OutOfBounds {
                x:      at.x,
                y:      at.y,
                width:  self.grid.width(),
                height: self.grid.height(),
            });
        }
        let id = self.registry.register(name, at, kind);
        // contains() above guarantees the cell exists.
        if let Some(cell) = self.grid.cell_mut(at) {
            cell.add_entity(id);
        }
        Ok(id)
    }

    /// Unregister an entity and clear its occupancy.
    pub fn despawn(&mut self, id: EntityId) -> WorldResult<()> {
        match self.registry.remove(id) {
            Some(entity) => {
                if let Some(cell) = self.grid.cell_mut(entity.position) {
                    let _ = cell.remove_entity(id);
                }
                Ok(())
            }
            None => Err(WorldError::EntityNotRegistered { id }),
        }
    }
}
