//! Integration tests for the quad graph.

use raceline_graph::{Chaining, QuadGraph};
use raceline_math::{heading_between, Vec3};
use raceline_mesh::generators::ring_quads;

/// A straight row of `n` unit-length quads advancing along +z.
fn straight_quads(n: usize) -> Vec<[Vec3; 4]> {
    (0..n)
        .map(|i| {
            let z = i as f32;
            [
                Vec3::new(-1.0, 0.0, z),
                Vec3::new(1.0, 0.0, z),
                Vec3::new(1.0, 0.0, z + 1.0),
                Vec3::new(-1.0, 0.0, z + 1.0),
            ]
        })
        .collect()
}

/// Four quads arranged in a square loop around the origin.
fn square_loop() -> Vec<[Vec3; 4]> {
    let corner = |x: f32, z: f32| Vec3::new(x, 0.0, z);
    vec![
        [corner(-2.0, -2.0), corner(0.0, -2.0), corner(0.0, 0.0), corner(-2.0, 0.0)],
        [corner(0.0, -2.0), corner(2.0, -2.0), corner(2.0, 0.0), corner(0.0, 0.0)],
        [corner(0.0, 0.0), corner(2.0, 0.0), corner(2.0, 2.0), corner(0.0, 2.0)],
        [corner(-2.0, 0.0), corner(0.0, 0.0), corner(0.0, 2.0), corner(-2.0, 2.0)],
    ]
}

// ─── Construction & Validation ────────────────────────────────

#[test]
fn empty_graph_fails() {
    assert!(QuadGraph::build(Vec::new(), &[], Chaining::Looped).is_err());
}

#[test]
fn edge_to_missing_quad_fails() {
    let err = QuadGraph::build(straight_quads(3), &[(1, 7)], Chaining::Open);
    assert!(err.is_err());
}

#[test]
fn unreachable_quad_fails() {
    // Explicit topology 0→1→0 never reaches quad 2.
    let err = QuadGraph::build(straight_quads(3), &[(0, 1), (1, 0)], Chaining::Explicit);
    assert!(err.is_err());
}

#[test]
fn explicit_topology_builds_when_connected() {
    let graph =
        QuadGraph::build(straight_quads(3), &[(0, 1), (1, 2), (2, 0)], Chaining::Explicit)
            .unwrap();
    assert_eq!(graph.successors(2), &[0]);
}

#[test]
fn looped_graph_closes_cycle() {
    let graph = QuadGraph::build(square_loop(), &[], Chaining::Looped).unwrap();
    assert_eq!(graph.successors(3), &[0]);
    assert!(graph.is_looped());
}

#[test]
fn arena_last_quad_is_terminal() {
    let graph = QuadGraph::build(straight_quads(4), &[], Chaining::Open).unwrap();
    assert!(graph.successors(3).is_empty());
    assert!(!graph.is_looped());
}

// ─── Cycle Closure ────────────────────────────────────────────

#[test]
fn default_successor_chain_returns_to_start() {
    let graph = QuadGraph::build(square_loop(), &[], Chaining::Looped).unwrap();
    let mut current = 0u32;
    for _ in 0..graph.len() {
        current = graph.successors(current)[0];
    }
    assert_eq!(current, 0);
}

#[test]
fn angle_to_next_points_at_successor_center() {
    let graph = QuadGraph::build(square_loop(), &[], Chaining::Looped).unwrap();
    let expected = heading_between(
        graph.quad(3).center_2d(),
        graph.quad(0).center_2d(),
    );
    assert!((graph.angle_to_next(3, 0) - expected).abs() < 1e-6);
}

#[test]
fn straight_track_heads_forward() {
    let graph = QuadGraph::build(straight_quads(4), &[], Chaining::Open).unwrap();
    // Advancing along +z means heading 0.
    assert!(graph.angle_to_next(0, 0).abs() < 1e-6);
    // Terminal quad inherits the arrival direction.
    assert!(graph.angle_to_next(3, 0).abs() < 1e-6);
}

// ─── Branching ────────────────────────────────────────────────

#[test]
fn branch_slots_are_ordered() {
    // Shortcut from quad 0 straight to quad 2.
    let graph = QuadGraph::build(straight_quads(4), &[(0, 2)], Chaining::Open).unwrap();
    assert_eq!(graph.successors(0), &[1, 2]);
    assert_eq!(graph.predecessors(2), &[1, 0]);

    // Slot 1 aims at the shortcut target, not the main line.
    let shortcut = graph.angle_to_next(0, 1);
    let expected = heading_between(
        graph.quad(0).center_2d(),
        graph.quad(2).center_2d(),
    );
    assert!((shortcut - expected).abs() < 1e-6);
}

// ─── Sector Lookup ────────────────────────────────────────────

#[test]
fn sector_for_position_finds_containing_quad() {
    let graph = QuadGraph::build(straight_quads(4), &[], Chaining::Open).unwrap();
    let sector = graph.sector_for_position(Vec3::new(0.0, 0.0, 2.5));
    assert_eq!(sector, Some(2));
}

#[test]
fn sector_for_position_is_idempotent() {
    let graph = QuadGraph::build(square_loop(), &[], Chaining::Looped).unwrap();
    let pos = Vec3::new(1.0, 0.0, -1.0);
    let first = graph.sector_for_position(pos);
    assert!(first.is_some());
    for _ in 0..10 {
        assert_eq!(graph.sector_for_position(pos), first);
    }
}

#[test]
fn sector_for_position_off_track_is_none() {
    let graph = QuadGraph::build(straight_quads(4), &[], Chaining::Open).unwrap();
    assert!(graph.sector_for_position(Vec3::new(100.0, 0.0, 100.0)).is_none());
}

#[test]
fn stacked_quads_resolve_by_height() {
    // A bridge quad directly above a road quad.
    let road = [
        Vec3::new(-1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 2.0),
        Vec3::new(-1.0, 0.0, 2.0),
    ];
    let bridge = [
        Vec3::new(-1.0, 8.0, 0.0),
        Vec3::new(1.0, 8.0, 0.0),
        Vec3::new(1.0, 8.0, 2.0),
        Vec3::new(-1.0, 8.0, 2.0),
    ];
    let graph = QuadGraph::build(vec![road, bridge], &[], Chaining::Looped).unwrap();

    let on_road = graph.sector_for_position(Vec3::new(0.0, 0.5, 1.0));
    let on_bridge = graph.sector_for_position(Vec3::new(0.0, 8.5, 1.0));
    assert_eq!(on_road, Some(0));
    assert_eq!(on_bridge, Some(1));
}

// ─── Spatial Mapping ──────────────────────────────────────────

#[test]
fn track_to_spatial_returns_quad_center() {
    let graph = QuadGraph::build(straight_quads(3), &[], Chaining::Open).unwrap();
    let p = graph.track_to_spatial(1);
    assert!((p - Vec3::new(0.0, 0.0, 1.5)).length() < 1e-6);
}

#[test]
fn ring_quads_form_valid_circuit() {
    let graph = QuadGraph::build(ring_quads(30.0, 4.0, 16), &[], Chaining::Looped).unwrap();
    assert_eq!(graph.len(), 16);

    // Walking the main line visits every quad once.
    let mut current = 0u32;
    let mut visited = vec![false; 16];
    for _ in 0..16 {
        assert!(!visited[current as usize]);
        visited[current as usize] = true;
        current = graph.successors(current)[0];
    }
    assert_eq!(current, 0);

    // A point on the band maps to a sector.
    assert!(graph.sector_for_position(Vec3::new(0.0, 0.0, 30.0)).is_some());
}
