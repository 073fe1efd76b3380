//! Uniform track-plane grid for spatial indexing.
//!
//! Partitions the (x, z) plane into square cells and bins item indices
//! into every cell their 2D footprint overlaps. Point queries then
//! only consider the items of the single cell containing the point.
//! Used to index collision triangles and graph quads.

use std::collections::HashMap;

use glam::Vec2;

/// Uniform grid over the track plane.
///
/// Cell size should be on the order of a track-section width; much
/// smaller cells waste memory on duplicated bins, much larger cells
/// degrade queries toward a full scan.
#[derive(Debug, Clone)]
pub struct PlaneGrid {
    /// Inverse cell size (cached for performance).
    inv_cell_size: f32,
    /// Hash map from cell key to list of item indices.
    grid: HashMap<(i32, i32), Vec<u32>>,
}

impl PlaneGrid {
    /// Create an empty grid with the given cell size.
    pub fn new(cell_size: f32) -> Self {
        let cell_size = cell_size.max(1e-6);
        Self {
            inv_cell_size: 1.0 / cell_size,
            grid: HashMap::new(),
        }
    }

    /// Hash a track-plane position to a cell key.
    fn cell_key(&self, x: f32, z: f32) -> (i32, i32) {
        let cx = (x * self.inv_cell_size).floor() as i32;
        let cz = (z * self.inv_cell_size).floor() as i32;
        (cx, cz)
    }

    /// Bin an item into every cell overlapped by its 2D footprint,
    /// given the footprint's bounds.
    pub fn insert(&mut self, min: Vec2, max: Vec2, index: u32) {
        let (cx0, cz0) = self.cell_key(min.x, min.y);
        let (cx1, cz1) = self.cell_key(max.x, max.y);
        for cx in cx0..=cx1 {
            for cz in cz0..=cz1 {
                self.grid.entry((cx, cz)).or_default().push(index);
            }
        }
    }

    /// Returns the item indices binned in the cell containing `(x, z)`.
    /// Empty for a cell no footprint overlaps.
    pub fn candidates(&self, x: f32, z: f32) -> &[u32] {
        self.grid
            .get(&self.cell_key(x, z))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.grid.len()
    }
}
