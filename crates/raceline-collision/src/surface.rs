//! The immutable collision surface and its terrain queries.

use raceline_math::{Aabb2, PlaneGrid, Vec2, Vec3};
use raceline_mesh::TriangleMesh;
use raceline_types::constants::{DEFAULT_GRID_CELL, TERRAIN_PROBE_DOWN, TERRAIN_PROBE_UP};
use raceline_types::{MaterialId, RacelineError, RacelineResult};
use tracing::debug;

use crate::raycast::vertical_hit;

/// Result of a successful terrain query.
#[derive(Debug, Clone, Copy)]
pub struct TerrainInfo {
    /// Height of the terrain under the query point.
    pub height: f32,
    /// Unit surface normal at the hit, pointing away from the ground.
    pub normal: Vec3,
    /// Material of the hit triangle.
    pub material: MaterialId,
}

/// Triangle-set acceleration structure answering height/normal/material
/// queries from above.
///
/// Built exactly once per track load from the collidable subset of the
/// imported geometry. All queries are read-only; concurrent callers
/// (one terrain query per kart per frame) need no synchronization.
#[derive(Debug, Clone)]
pub struct CollisionSurface {
    /// Corner positions per collidable triangle.
    triangles: Vec<[Vec3; 3]>,
    /// Material per collidable triangle (parallel to `triangles`).
    materials: Vec<MaterialId>,
    /// Track-plane index over `triangles`.
    grid: PlaneGrid,
    /// 2D footprint bounds of the collidable set.
    bounds: Aabb2,
}

impl CollisionSurface {
    /// Builds the surface from a mesh using the default grid cell size.
    pub fn build(mesh: &TriangleMesh) -> RacelineResult<Self> {
        Self::build_with_cell_size(mesh, DEFAULT_GRID_CELL)
    }

    /// Builds the surface, binning triangles into cells of `cell_size`.
    ///
    /// Only triangles tagged collidable are kept; decoration triangles
    /// never participate in terrain queries. A mesh with no collidable
    /// triangle is a structural error, since the track would have no
    /// ground.
    pub fn build_with_cell_size(mesh: &TriangleMesh, cell_size: f32) -> RacelineResult<Self> {
        mesh.validate()?;

        let mut triangles = Vec::new();
        let mut materials = Vec::new();
        let mut grid = PlaneGrid::new(cell_size);
        let mut bounds = Aabb2::empty();

        for t in 0..mesh.triangle_count() {
            if !mesh.collidable[t] {
                continue;
            }
            let corners = mesh.triangle_corners(t);
            let index = triangles.len() as u32;

            let mut min = Vec2::new(corners[0].x, corners[0].z);
            let mut max = min;
            for corner in &corners[1..] {
                let p = Vec2::new(corner.x, corner.z);
                min = min.min(p);
                max = max.max(p);
            }
            grid.insert(min, max, index);
            bounds.grow(min);
            bounds.grow(max);

            triangles.push(corners);
            materials.push(mesh.material_ids[t]);
        }

        if triangles.is_empty() {
            return Err(RacelineError::InvalidMesh(
                "Mesh contains no collidable triangles".into(),
            ));
        }

        debug!(
            triangles = triangles.len(),
            cells = grid.cell_count(),
            "collision surface built"
        );

        Ok(Self {
            triangles,
            materials,
            grid,
            bounds,
        })
    }

    /// Number of collidable triangles in the surface.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// 2D footprint bounds of the collidable geometry.
    pub fn bounds(&self) -> Aabb2 {
        self.bounds
    }

    /// Queries the terrain under `pos`.
    ///
    /// Casts a vertical ray from slightly above `pos` (tolerating steep
    /// terrain rising under the caller) down through the triangle set
    /// and returns the highest intersection within the probe range.
    /// `None` means there is no terrain under the point; the caller is
    /// off track and should be treated as falling.
    pub fn query_terrain(&self, pos: Vec3) -> Option<TerrainInfo> {
        let ceiling = pos.y + TERRAIN_PROBE_UP;
        let lowest = pos.y - TERRAIN_PROBE_DOWN;

        let mut best: Option<TerrainInfo> = None;
        for &index in self.grid.candidates(pos.x, pos.z) {
            let [a, b, c] = self.triangles[index as usize];
            if let Some(hit) = vertical_hit(pos.x, pos.z, a, b, c) {
                if hit.y > ceiling || hit.y < lowest {
                    continue;
                }
                if best.map_or(true, |current| hit.y > current.height) {
                    best = Some(TerrainInfo {
                        height: hit.y,
                        normal: hit.normal,
                        material: self.materials[index as usize],
                    });
                }
            }
        }
        best
    }

    /// Convenience wrapper around [`query_terrain`](Self::query_terrain)
    /// returning only the height.
    pub fn terrain_height(&self, pos: Vec3) -> Option<f32> {
        self.query_terrain(pos).map(|info| info.height)
    }
}
