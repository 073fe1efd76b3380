//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Triangles are annotated with a surface material and a collidable
//! flag. Collision construction consumes only the collidable subset;
//! decoration triangles are carried through to rendering untouched.

use raceline_math::Vec3;
use raceline_types::{MaterialId, RacelineError, RacelineResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh stored in Structure-of-Arrays layout.
///
/// Triangle indices reference into the per-channel vertex arrays.
/// Each triangle carries the id of the surface material it is made of
/// and whether it participates in terrain collision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices — each triangle is [v0, v1, v2].
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,

    /// Per-triangle surface material assignment.
    pub material_ids: Vec<MaterialId>,

    /// Per-triangle collision participation. `false` marks decoration
    /// geometry that karts drive through (plants, banners).
    pub collidable: Vec<bool>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Returns the three corner positions of triangle `t`.
    #[inline]
    pub fn triangle_corners(&self, t: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangle(t);
        [
            self.position_vec3(a as usize),
            self.position_vec3(b as usize),
            self.position_vec3(c as usize),
        ]
    }

    /// Returns the (unnormalized) face normal of triangle `t`.
    ///
    /// The winding order determines the direction; terrain triangles
    /// wind counter-clockwise seen from above, so the normal has a
    /// positive y component.
    #[inline]
    pub fn face_normal(&self, t: usize) -> Vec3 {
        let [a, b, c] = self.triangle_corners(t);
        (b - a).cross(c - a)
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            material_ids: Vec::with_capacity(triangle_capacity),
            collidable: Vec::with_capacity(triangle_capacity),
        }
    }

    /// Appends a vertex, returning its index.
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        self.pos_x.push(p.x);
        self.pos_y.push(p.y);
        self.pos_z.push(p.z);
        (self.pos_x.len() - 1) as u32
    }

    /// Appends a triangle with its material and collidable flag.
    pub fn push_triangle(&mut self, v: [u32; 3], material: MaterialId, collidable: bool) {
        self.indices.extend_from_slice(&v);
        self.material_ids.push(material);
        self.collidable.push(collidable);
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Triangle indices are within bounds
    /// - Per-triangle annotation arrays match the triangle count
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> RacelineResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(RacelineError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(RacelineError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        let tri_count = self.triangle_count();
        if self.material_ids.len() != tri_count {
            return Err(RacelineError::InvalidMesh(format!(
                "Material IDs count ({}) != triangle count ({})",
                self.material_ids.len(),
                tri_count
            )));
        }
        if self.collidable.len() != tri_count {
            return Err(RacelineError::InvalidMesh(format!(
                "Collidable flag count ({}) != triangle count ({})",
                self.collidable.len(),
                tri_count
            )));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(RacelineError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..tri_count {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(RacelineError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data.
    ///
    /// Converts from `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout.
    /// All triangles receive the same material and collidable flag;
    /// this is how single-material mesh asset documents are imported.
    pub fn from_interleaved(
        positions: &[f32],
        indices: &[u32],
        material: MaterialId,
        collidable: bool,
    ) -> RacelineResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(RacelineError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);

        for i in 0..n {
            mesh.pos_x.push(positions[i * 3]);
            mesh.pos_y.push(positions[i * 3 + 1]);
            mesh.pos_z.push(positions[i * 3 + 2]);
        }

        mesh.indices = indices.to_vec();
        mesh.material_ids = vec![material; indices.len() / 3];
        mesh.collidable = vec![collidable; indices.len() / 3];

        mesh.validate()?;
        Ok(mesh)
    }

    /// Appends all vertices and triangles of `other` to this mesh,
    /// remapping the incoming indices.
    pub fn append(&mut self, other: &TriangleMesh) {
        let base = self.vertex_count() as u32;
        self.pos_x.extend_from_slice(&other.pos_x);
        self.pos_y.extend_from_slice(&other.pos_y);
        self.pos_z.extend_from_slice(&other.pos_z);
        self.indices.extend(other.indices.iter().map(|&i| i + base));
        self.material_ids.extend_from_slice(&other.material_ids);
        self.collidable.extend_from_slice(&other.collidable);
    }
}
