//! Grid model tests — cell lookup, neighbour resolution, and the
//! coordinate-only equality contract.

use wyrmgrid_core::cell::Cell;
use wyrmgrid_core::grid::Grid;
use wyrmgrid_core::tag::Tag;
use wyrmgrid_core::types::CellCoord;

fn build(width: i32, height: i32) -> Grid {
    Grid::new(width, height).expect("build grid")
}

#[test]
fn every_coordinate_has_a_cell() {
    let grid = build(4, 3);
    for y in 0..3 {
        for x in 0..4 {
            let cell = grid.cell_at(x, y).expect("in-bounds cell");
            assert_eq!(cell.coord(), CellCoord::new(x, y));
        }
    }
}

#[test]
fn out_of_bounds_lookup_is_none_not_an_error() {
    let grid = build(4, 3);
    assert!(grid.cell_at(-1, 0).is_none());
    assert!(grid.cell_at(0, -1).is_none());
    assert!(grid.cell_at(4, 0).is_none());
    assert!(grid.cell_at(0, 3).is_none());
}

#[test]
fn invalid_dimensions_are_rejected() {
    assert!(Grid::new(0, 5).is_err());
    assert!(Grid::new(5, -1).is_err());
}

#[test]
fn interior_neighbours_in_west_north_east_south_order() {
    let grid = build(3, 3);
    let n = grid.neighbours(CellCoord::new(1, 1));
    let coords: Vec<_> = n.iter().map(|c| c.expect("interior neighbour").coord()).collect();
    assert_eq!(
        coords,
        vec![
            CellCoord::new(0, 1), // west
            CellCoord::new(1, 0), // north
            CellCoord::new(2, 1), // east
            CellCoord::new(1, 2), // south
        ]
    );
}

#[test]
fn border_neighbours_are_absent_markers() {
    let grid = build(3, 3);
    let n = grid.neighbours(CellCoord::new(0, 0));
    assert!(n[0].is_none(), "west of the left edge must be absent");
    assert!(n[1].is_none(), "north of the top edge must be absent");
    assert_eq!(n[2].expect("east neighbour").coord(), CellCoord::new(1, 0));
    assert_eq!(n[3].expect("south neighbour").coord(), CellCoord::new(0, 1));
}

/// Every in-bounds coordinate gets exactly 4 slots, and each present
/// neighbour differs by exactly one unit along exactly one axis.
#[test]
fn neighbours_are_axis_adjacent_everywhere() {
    let grid = build(5, 4);
    for y in 0..4 {
        for x in 0..5 {
            let at = CellCoord::new(x, y);
            let n = grid.neighbours(at);
            assert_eq!(n.len(), 4);
            for cell in n.into_iter().flatten() {
                let dx = (cell.x() - x).abs();
                let dy = (cell.y() - y).abs();
                assert_eq!(
                    dx + dy,
                    1,
                    "neighbour {} of {at} is not axis-adjacent",
                    cell.coord()
                );
            }
        }
    }
}

#[test]
fn equality_is_coordinate_only() {
    let mut a = Cell::new(CellCoord::new(3, 4));
    let mut b = Cell::new(CellCoord::new(3, 4));
    // Disjoint tag sets must not break equality.
    assert!(a.add_tag(Tag::Water));
    assert!(b.add_tag(Tag::Forest));
    assert_eq!(a, b);

    let c = Cell::new(CellCoord::new(4, 3));
    assert_ne!(a, c, "transposed coordinates are a different cell");
}

#[test]
fn equality_is_an_equivalence_relation() {
    let a = Cell::new(CellCoord::new(2, 7));
    let b = Cell::new(CellCoord::new(2, 7));
    let c = Cell::new(CellCoord::new(2, 7));
    assert_eq!(a, a, "reflexive");
    assert_eq!(a, b);
    assert_eq!(b, a, "symmetric");
    assert_eq!(b, c);
    assert_eq!(a, c, "transitive");
}
