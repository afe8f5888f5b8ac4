//! Cell tag and occupancy tests — list/index sync, duplicate handling,
//! and the pinned legacy similarity scan.

use wyrmgrid_core::cell::Cell;
use wyrmgrid_core::tag::Tag;
use wyrmgrid_core::types::CellCoord;

fn cell() -> Cell {
    Cell::new(CellCoord::new(0, 0))
}

fn cell_with(tags: &[Tag]) -> Cell {
    let mut c = cell();
    c.add_tags(tags);
    c
}

#[test]
fn added_tag_is_visible_and_not_duplicated() {
    let mut c = cell();
    assert!(c.add_tag(Tag::Water), "first add must succeed");
    assert!(c.has_tag(Tag::Water));
    assert!(!c.add_tag(Tag::Water), "second add must report a duplicate");
    assert_eq!(c.tags(), &[Tag::Water], "the list must hold one copy");
}

#[test]
fn removed_tag_is_gone_from_list_and_index() {
    let mut c = cell_with(&[Tag::Water, Tag::Forest, Tag::Road]);
    assert!(c.remove_tag(Tag::Forest));
    assert!(!c.has_tag(Tag::Forest));
    assert_eq!(c.tags(), &[Tag::Water, Tag::Road]);
    assert!(!c.remove_tag(Tag::Forest), "second removal is a no-op");
}

#[test]
fn add_tags_applies_each_and_tolerates_empty() {
    let mut c = cell();
    c.add_tags(&[Tag::Water, Tag::Water, Tag::Lair]);
    assert_eq!(c.tags(), &[Tag::Water, Tag::Lair]);
    c.add_tags(&[]);
    assert_eq!(c.tags(), &[Tag::Water, Tag::Lair]);
}

#[test]
fn removing_readding_keeps_index_in_sync() {
    let mut c = cell_with(&[Tag::Blocked, Tag::Mountain]);
    assert!(c.remove_tag(Tag::Blocked));
    assert!(c.add_tag(Tag::Blocked), "re-add after removal must succeed");
    assert!(c.has_tag(Tag::Blocked));
    assert_eq!(c.tags(), &[Tag::Mountain, Tag::Blocked]);
}

// ── Occupancy — deliberately different semantics from tags ──────────

#[test]
fn occupant_duplicates_are_not_filtered() {
    let mut c = cell();
    c.add_entity(9);
    c.add_entity(9);
    assert_eq!(c.entities(), &[9, 9]);
}

#[test]
fn occupant_removal_takes_one_occurrence_and_is_idempotent() {
    let mut c = cell();
    c.add_entity(9);
    c.add_entity(9);
    assert!(c.remove_entity(9));
    assert_eq!(c.entities(), &[9]);
    assert!(c.remove_entity(9));
    assert!(!c.remove_entity(9), "removing an absent occupant is a no-op");
    assert!(c.entities().is_empty());
}

// ── Similarity — the legacy scan, pinned exactly ────────────────────
//
// The inner cursor does not reset between outer passes, so the count is
// NOT a symmetric-difference count. These vectors pin the behaviour as
// shipped; do not "fix" the scan without updating the map owners.

#[test]
fn similarity_counts_first_tag_against_the_other_list() {
    // A = [water, forest, road], B = [water, mountain, lair].
    // Scan: water vs water (match), water vs mountain (+1),
    // water vs lair (+1) => counter 2, inner cursor exhausted.
    let a = cell_with(&[Tag::Water, Tag::Forest, Tag::Road]);
    let b = cell_with(&[Tag::Water, Tag::Mountain, Tag::Lair]);

    // threshold 2: counter reaches 2, 2 < 2 is false.
    assert!(!a.is_similar(&b, 2));

    // threshold 3: counter ends at 2 because forest and road are never
    // compared once the inner cursor is spent. A resetting scan would
    // count 4 mismatches and answer false here.
    assert!(a.is_similar(&b, 3));
}

#[test]
fn later_tags_contribute_nothing_once_the_inner_cursor_is_spent() {
    // A = [forest, road], B = [water]. Only forest-vs-water is ever
    // compared; road is never looked at. counter = 1.
    let a = cell_with(&[Tag::Forest, Tag::Road]);
    let b = cell_with(&[Tag::Water]);
    assert!(a.is_similar(&b, 2), "counter stays at 1, below threshold 2");
    assert!(!a.is_similar(&b, 1));
}

#[test]
fn empty_cells_are_always_similar() {
    let a = cell();
    let b = cell();
    assert!(a.is_similar(&b, 1), "no tags, no mismatches");
}

#[test]
fn identical_prefix_keeps_the_counter_low() {
    let a = cell_with(&[Tag::Water]);
    let b = cell_with(&[Tag::Water, Tag::Forest]);
    // water vs water matches, water vs forest mismatches: counter = 1.
    assert!(a.is_similar(&b, 2));
}

#[test]
fn tick_accumulator_never_decreases() {
    let mut c = cell();
    c.accumulate(3);
    c.accumulate(0);
    c.accumulate(5);
    assert_eq!(c.tick_accu(), 8);
}
