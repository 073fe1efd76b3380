//! Procedural track-piece generators for tests and benchmarks.
//!
//! These generators produce deterministic, resolution-configurable
//! geometry: a flat ground plane and a circular ring circuit. The ring
//! generator can also emit its cells as quad corner lists so the same
//! geometry can seed a quad graph.

use raceline_math::Vec3;
use raceline_types::MaterialId;

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular plane in the XZ plane at `y = height`.
///
/// The plane spans `[-width/2, width/2]` in X and `[-depth/2, depth/2]`
/// in Z, centered at the origin.
///
/// # Example
/// ```
/// use raceline_mesh::generators::flat_plane;
/// use raceline_types::MaterialId;
/// let mesh = flat_plane(2, 2, 10.0, 10.0, 0.0, MaterialId(0));
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 cells × 2 tris each
/// ```
pub fn flat_plane(
    cols: usize,
    rows: usize,
    width: f32,
    depth: f32,
    height: f32,
    material: MaterialId,
) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_z = rows + 1;
    let vertex_count = verts_x * verts_z;
    let tri_count = cols * rows * 2;

    let mut mesh = TriangleMesh::with_capacity(vertex_count, tri_count);

    let half_w = width / 2.0;
    let half_d = depth / 2.0;

    for j in 0..verts_z {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            mesh.push_vertex(Vec3::new(
                -half_w + u * width,
                height,
                -half_d + v * depth,
            ));
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let near_left = (j * verts_x + i) as u32;
            let near_right = near_left + 1;
            let far_left = near_left + verts_x as u32;
            let far_right = far_left + 1;

            // Counter-clockwise seen from above (+y face normal).
            mesh.push_triangle([near_left, far_left, near_right], material, true);
            mesh.push_triangle([near_right, far_left, far_right], material, true);
        }
    }

    mesh
}

/// Generates a flat circular ring circuit in the XZ plane at `y = 0`.
///
/// The ring is a band of `segments` cells between `radius - half_width`
/// and `radius + half_width`, traversed counter-clockwise seen from
/// above. Cell `i` spans angles `i/segments` to `(i+1)/segments` of a
/// full turn.
pub fn ring_track(radius: f32, half_width: f32, segments: usize, material: MaterialId) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(segments * 2, segments * 2);

    // Two vertices (inner, outer) per spoke.
    for i in 0..segments {
        let theta = std::f32::consts::TAU * i as f32 / segments as f32;
        let dir = Vec3::new(theta.sin(), 0.0, theta.cos());
        mesh.push_vertex(dir * (radius - half_width));
        mesh.push_vertex(dir * (radius + half_width));
    }

    for i in 0..segments {
        let inner = (i * 2) as u32;
        let outer = inner + 1;
        let next_inner = ((i + 1) % segments * 2) as u32;
        let next_outer = next_inner + 1;

        mesh.push_triangle([inner, outer, next_inner], material, true);
        mesh.push_triangle([next_inner, outer, next_outer], material, true);
    }

    mesh
}

/// Returns the cells of [`ring_track`] as quad corner lists, ordered
/// `[near-left, near-right, far-right, far-left]` along the direction
/// of travel. Feeding these into a quad graph yields a circuit whose
/// cells sit exactly on the generated collision geometry.
pub fn ring_quads(radius: f32, half_width: f32, segments: usize) -> Vec<[Vec3; 4]> {
    let spoke = |i: usize| {
        let theta = std::f32::consts::TAU * (i % segments) as f32 / segments as f32;
        let dir = Vec3::new(theta.sin(), 0.0, theta.cos());
        (dir * (radius - half_width), dir * (radius + half_width))
    };

    (0..segments)
        .map(|i| {
            let (near_inner, near_outer) = spoke(i);
            let (far_inner, far_outer) = spoke(i + 1);
            [near_inner, near_outer, far_outer, far_inner]
        })
        .collect()
}
