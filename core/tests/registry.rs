//! Entity registry and spawn-wiring tests — id assignment, lookup, and
//! the registry/occupancy consistency kept by the world aggregate.

use wyrmgrid_core::config::WorldConfig;
use wyrmgrid_core::entity::EntityKind;
use wyrmgrid_core::registry::EntityRegistry;
use wyrmgrid_core::types::CellCoord;
use wyrmgrid_core::world::World;

fn flat_config() -> WorldConfig {
    let mut config = WorldConfig::default();
    config.grid_width = 8;
    config.grid_height = 8;
    config.initial_dragons = 0;
    config.terrain.water_density = 0.0;
    config.terrain.forest_density = 0.0;
    config.terrain.mountain_density = 0.0;
    config.terrain.lair_count = 0;
    config
}

fn player_kind() -> EntityKind {
    EntityKind::Player {
        hitpoints:     20,
        max_hitpoints: 20,
        level:         1,
    }
}

#[test]
fn ids_are_unique_and_monotone() {
    let mut registry = EntityRegistry::new();
    let a = registry.register("Aldra".into(), CellCoord::new(0, 0), player_kind());
    let b = registry.register("Berin".into(), CellCoord::new(1, 0), player_kind());
    assert_ne!(a, b);
    assert!(b > a, "ids grow monotonically");
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut registry = EntityRegistry::new();
    let a = registry.register("Aldra".into(), CellCoord::new(0, 0), player_kind());
    assert!(registry.remove(a).is_some());
    let b = registry.register("Berin".into(), CellCoord::new(0, 0), player_kind());
    assert_ne!(a, b, "a removed id must never come back");
}

#[test]
fn lookup_answers_hit_and_miss() {
    let mut registry = EntityRegistry::new();
    let id = registry.register("Aldra".into(), CellCoord::new(2, 3), player_kind());

    let entity = registry.lookup(id).expect("registered entity");
    assert_eq!(entity.id, id);
    assert_eq!(entity.name, "Aldra");
    assert_eq!(entity.position, CellCoord::new(2, 3));

    assert!(registry.lookup(9999).is_none());
}

#[test]
fn spawn_registers_and_occupies_the_cell() {
    let mut world = World::new(&flat_config()).expect("build world");
    let at = CellCoord::new(4, 4);
    let id = world.spawn_player("Aldra", at).expect("spawn player");

    assert!(world.registry().lookup(id).is_some());
    let cell = world.grid().cell(at).expect("spawn cell");
    assert_eq!(cell.entities(), &[id]);
}

#[test]
fn spawn_outside_the_grid_is_an_error() {
    let mut world = World::new(&flat_config()).expect("build world");
    let before = world.registry().len();
    let result = world.spawn_player("Aldra", CellCoord::new(99, 0));
    assert!(result.is_err());
    assert_eq!(world.registry().len(), before, "failed spawn registers nothing");
}

#[test]
fn despawn_clears_registry_and_occupancy() {
    let mut world = World::new(&flat_config()).expect("build world");
    let at = CellCoord::new(1, 1);
    let id = world.spawn_player("Aldra", at).expect("spawn player");

    world.despawn(id).expect("despawn");
    assert!(world.registry().lookup(id).is_none());
    let cell = world.grid().cell(at).expect("spawn cell");
    assert!(cell.entities().is_empty());

    assert!(world.despawn(id).is_err(), "second despawn reports the miss");
}

#[test]
fn dragons_seed_into_lairs_at_build() {
    let mut config = flat_config();
    config.terrain.lair_count = 3;
    config.initial_dragons = 3;
    let world = World::new(&config).expect("build world");

    let dragons = world
        .registry()
        .entities()
        .filter(|e| matches!(e.kind, EntityKind::Dragon { .. }))
        .count();
    assert_eq!(dragons, 3, "one dragon per requested lair");
}
