//! The directed quad graph.
//!
//! Nodes are dense `u32` indices into a quad array; edges are
//! adjacency lists. The main line of the track is the chain of
//! slot-0 successors; extra edges model shortcuts and forks. The
//! graph itself never picks a branch: AI and lap-progress logic
//! apply their own policies over the exposed successor sets.

use std::collections::VecDeque;

use raceline_math::{heading_between, PlaneGrid, Vec2, Vec3};
use raceline_types::constants::DEFAULT_GRID_CELL;
use raceline_types::{RacelineError, RacelineResult};
use tracing::debug;

use crate::quad::Quad;

/// How quads are chained into the main line before explicit edges
/// are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chaining {
    /// Quads chain `i → i+1` and the last closes back to 0 (circuit).
    Looped,
    /// Quads chain `i → i+1`; the last quad is terminal (linear arena).
    Open,
    /// No implicit chaining; the edge list carries the full topology.
    Explicit,
}

/// Directed graph of track-surface quads.
///
/// Immutable after [`build`](Self::build); sector queries index a
/// uniform track-plane grid rather than scanning all quads, since
/// they run at least once per active kart per frame.
#[derive(Debug, Clone)]
pub struct QuadGraph {
    quads: Vec<Quad>,
    successors: Vec<Vec<u32>>,
    predecessors: Vec<Vec<u32>>,
    grid: PlaneGrid,
    looped: bool,
}

impl QuadGraph {
    /// Builds the graph from ordered quad corner sets.
    ///
    /// With [`Chaining::Looped`] or [`Chaining::Open`] quads chain
    /// sequentially (`i → i+1`, slot 0); `extra_edges` then adds
    /// branch successors in the order given (slots 1..). With
    /// [`Chaining::Explicit`] the edge list carries the whole
    /// topology. Validation rejects, as load-fatal structural errors:
    /// - an empty quad list
    /// - an edge referencing a quad index that does not exist
    /// - any quad unreachable from quad 0
    pub fn build(
        corner_sets: Vec<[Vec3; 4]>,
        extra_edges: &[(u32, u32)],
        chaining: Chaining,
    ) -> RacelineResult<Self> {
        if corner_sets.is_empty() {
            return Err(RacelineError::InvalidGraph(
                "Track has no quads".into(),
            ));
        }

        let n = corner_sets.len();
        let mut quads: Vec<Quad> = corner_sets.into_iter().map(Quad::new).collect();

        let mut successors: Vec<Vec<u32>> = vec![Vec::new(); n];
        if chaining != Chaining::Explicit {
            for i in 0..n - 1 {
                successors[i].push((i + 1) as u32);
            }
            if chaining == Chaining::Looped && n > 1 {
                successors[n - 1].push(0);
            }
        }

        for &(from, to) in extra_edges {
            if from as usize >= n || to as usize >= n {
                return Err(RacelineError::InvalidGraph(format!(
                    "Edge {} -> {} references a quad outside 0..{}",
                    from, to, n
                )));
            }
            successors[from as usize].push(to);
        }

        let mut predecessors: Vec<Vec<u32>> = vec![Vec::new(); n];
        for (from, succs) in successors.iter().enumerate() {
            for &to in succs {
                predecessors[to as usize].push(from as u32);
            }
        }

        // Every quad must be reachable from the start-adjacent quad 0;
        // an orphan quad indicates a broken track file.
        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([0u32]);
        visited[0] = true;
        while let Some(i) = queue.pop_front() {
            for &next in &successors[i as usize] {
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    queue.push_back(next);
                }
            }
        }
        if let Some(orphan) = visited.iter().position(|&v| !v) {
            return Err(RacelineError::InvalidGraph(format!(
                "Quad {} is not reachable from the start",
                orphan
            )));
        }

        // Headings: toward the default successor; terminal quads (end
        // of an arena layout) inherit the direction of arrival.
        for i in 0..n {
            let heading = if let Some(&next) = successors[i].first() {
                heading_between(quads[i].center_2d(), quads[next as usize].center_2d())
            } else if let Some(&prev) = predecessors[i].first() {
                heading_between(quads[prev as usize].center_2d(), quads[i].center_2d())
            } else {
                0.0
            };
            quads[i].set_heading(heading);
        }

        let mut grid = PlaneGrid::new(DEFAULT_GRID_CELL);
        for (i, quad) in quads.iter().enumerate() {
            let (min, max) = quad.footprint();
            grid.insert(min, max, i as u32);
        }

        let looped = chaining == Chaining::Looped;
        debug!(quads = n, extra_edges = extra_edges.len(), looped, "quad graph built");

        Ok(Self {
            quads,
            successors,
            predecessors,
            grid,
            looped,
        })
    }

    /// Number of quads in the graph.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Returns true if the graph has no quads. Never true for a built
    /// graph; provided for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Whether the main line closes back on quad 0 (circuit vs. arena).
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// The quad at `index`.
    pub fn quad(&self, index: u32) -> &Quad {
        &self.quads[index as usize]
    }

    /// Successor quads of `index`; slot 0 is the main line.
    pub fn successors(&self, index: u32) -> &[u32] {
        &self.successors[index as usize]
    }

    /// Predecessor quads of `index`.
    pub fn predecessors(&self, index: u32) -> &[u32] {
        &self.predecessors[index as usize]
    }

    /// Locates the quad containing the track-plane projection of
    /// `pos`. Returns `None` when no quad contains it (off track).
    ///
    /// Where footprints overlap vertically (a bridge crossing the road
    /// below), the quad whose center height is closest to the query
    /// height wins.
    pub fn sector_for_position(&self, pos: Vec3) -> Option<u32> {
        let p = Vec2::new(pos.x, pos.z);
        let mut best: Option<(u32, f32)> = None;

        for &index in self.grid.candidates(pos.x, pos.z) {
            let quad = &self.quads[index as usize];
            if !quad.contains_2d(p) {
                continue;
            }
            let dy = (quad.center().y - pos.y).abs();
            if best.map_or(true, |(_, d)| dy < d) {
                best = Some((index, dy));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Heading from quad `index` toward the successor in `slot`.
    ///
    /// Slot 0 is the default main-line direction, used to orient a
    /// kart after a rescue and to detect wrong-way driving. Passing an
    /// index or slot that does not exist is a programming error and
    /// panics.
    pub fn angle_to_next(&self, index: u32, slot: usize) -> f32 {
        let quad = &self.quads[index as usize];
        if slot == 0 {
            return quad.heading();
        }
        let next = self.successors[index as usize][slot];
        heading_between(quad.center_2d(), self.quads[next as usize].center_2d())
    }

    /// Maps a sector index back to a representative 3D point (the quad
    /// center), used for rescue placement and opponent-position
    /// estimation.
    pub fn track_to_spatial(&self, sector: u32) -> Vec3 {
        self.quads[sector as usize].center()
    }
}
