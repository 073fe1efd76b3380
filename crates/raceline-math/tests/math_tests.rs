//! Integration tests for raceline-math.

use raceline_math::{Aabb2, PlaneGrid, Vec2};

// ─── Aabb2 ────────────────────────────────────────────────────

#[test]
fn bounds_from_points() {
    let aabb = Aabb2::from_points([
        Vec2::new(1.0, -2.0),
        Vec2::new(-3.0, 4.0),
        Vec2::new(0.0, 0.0),
    ]);
    assert_eq!(aabb.min, Vec2::new(-3.0, -2.0));
    assert_eq!(aabb.max, Vec2::new(1.0, 4.0));
    assert_eq!(aabb.extent(), Vec2::new(4.0, 6.0));
    assert_eq!(aabb.center(), Vec2::new(-1.0, 1.0));
}

#[test]
fn empty_bounds() {
    let aabb = Aabb2::empty();
    assert!(aabb.is_empty());
    assert_eq!(aabb.extent(), Vec2::ZERO);
    assert!(!aabb.contains(Vec2::ZERO));
}

#[test]
fn containment_includes_boundary() {
    let aabb = Aabb2::from_points([Vec2::ZERO, Vec2::new(2.0, 2.0)]);
    assert!(aabb.contains(Vec2::new(1.0, 1.0)));
    assert!(aabb.contains(Vec2::new(2.0, 2.0)));
    assert!(!aabb.contains(Vec2::new(2.1, 1.0)));
}

// ─── PlaneGrid ────────────────────────────────────────────────

#[test]
fn grid_finds_overlapping_footprints() {
    let mut grid = PlaneGrid::new(4.0);
    grid.insert(Vec2::new(0.0, 0.0), Vec2::new(2.0, 2.0), 0);
    grid.insert(Vec2::new(10.0, 10.0), Vec2::new(12.0, 12.0), 1);

    assert_eq!(grid.candidates(1.0, 1.0), &[0]);
    assert_eq!(grid.candidates(11.0, 11.0), &[1]);
    assert!(grid.candidates(-20.0, -20.0).is_empty());
}

#[test]
fn footprint_spanning_cells_is_found_from_each() {
    let mut grid = PlaneGrid::new(2.0);
    grid.insert(Vec2::new(-3.0, -3.0), Vec2::new(3.0, 3.0), 5);

    assert_eq!(grid.candidates(-2.5, 2.5), &[5]);
    assert_eq!(grid.candidates(2.5, -2.5), &[5]);
    assert!(grid.cell_count() >= 9);
}

#[test]
fn negative_coordinates_bin_correctly() {
    let mut grid = PlaneGrid::new(5.0);
    grid.insert(Vec2::new(-1.0, -1.0), Vec2::new(-0.5, -0.5), 3);
    // The footprint lies in the cell just below the origin, not the
    // one above it.
    assert_eq!(grid.candidates(-0.7, -0.7), &[3]);
    assert!(grid.candidates(0.5, 0.5).is_empty());
}
