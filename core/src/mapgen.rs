//! Deterministic terrain generation over a fresh grid.
//!
//! Terrain is a per-cell tag scatter driven by the terrain RNG stream.
//! Same master seed and profile, same map — tests rely on this.

use crate::grid::Grid;
use crate::rng::{RngStream, StreamSlot};
use crate::tag::Tag;
use serde::{Deserialize, Serialize};

/// Densities of the tag scatter. Probabilities are per cell and checked
/// in declaration order; the first hit wins, so a cell carries at most
/// one terrain kind (plus `Blocked` where impassable).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainProfile {
    pub water_density:    f64,
    pub forest_density:   f64,
    pub mountain_density: f64,
    /// Number of dragon lairs scattered over open terrain.
    pub lair_count:       u32,
}

impl Default for TerrainProfile {
    fn default() -> Self {
        Self {
            water_density:    0.12,
            forest_density:   0.20,
            mountain_density: 0.08,
            lair_count:       4,
        }
    }
}

/// Scatter terrain tags over every cell of the grid, then place lairs
/// and the spawn marker. The grid is expected to be freshly built.
pub fn scatter_tags(grid: &mut Grid, master_seed: u64, profile: &TerrainProfile) {
    let mut rng = RngStream::new(master_seed, StreamSlot::Terrain);

    for cell in grid.cells_mut() {
        if rng.chance(profile.water_density) {
            cell.add_tags(&[Tag::Water, Tag::Blocked]);
        } else if rng.chance(profile.forest_density) {
            let _ = cell.add_tag(Tag::Forest);
        } else if rng.chance(profile.mountain_density) {
            cell.add_tags(&[Tag::Mountain, Tag::Blocked]);
        }
    }

    place_lairs(grid, &mut rng, profile.lair_count);

    // Spawn marker goes on the central cell; pushed east until the cell
    // is passable. Wraps around the row, so a fully blocked row still
    // terminates.
    let cy = grid.height() / 2;
    let width = grid.width();
    for step in 0..width {
        let cx = (width / 2 + step) % width;
        if let Some(cell) = grid.cell_at_mut(cx, cy) {
            if !cell.has_tag(Tag::Blocked) {
                let _ = cell.add_tag(Tag::Spawn);
                break;
            }
        }
    }
}

fn place_lairs(grid: &mut Grid, rng: &mut RngStream, count: u32) {
    let width = grid.width() as u64;
    let height = grid.height() as u64;
    let mut placed = 0;
    // Bounded retry budget; a map dense enough to exhaust it simply gets
    // fewer lairs.
    let mut attempts = 0;
    while placed < count && attempts < count * 16 {
        attempts += 1;
        let x = rng.next_u64_below(width) as i32;
        let y = rng.next_u64_below(height) as i32;
        if let Some(cell) = grid.cell_at_mut(x, y) {
            if !cell.has_tag(Tag::Blocked) && cell.add_tag(Tag::Lair) {
                placed += 1;
            }
        }
    }
    if placed < count {
        log::warn!("placed {placed} of {count} lairs before the retry budget ran out");
    }
}
