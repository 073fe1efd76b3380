//! The track aggregate: collision surface, quad graph, driveline,
//! start positions, and descriptive metadata under one owner.

use raceline_collision::{CollisionSurface, TerrainInfo};
use raceline_graph::{Driveline, MiniMapPaths, QuadGraph};
use raceline_math::{Mat4, Quat, Vec2, Vec3};
use raceline_mesh::TriangleMesh;
use raceline_surface::SurfaceDatabase;
use raceline_types::{RacelineError, RacelineResult};
use tracing::info;

use crate::assets::AssetSource;
use crate::curve::BezierCurve;
use crate::importer::import_geometry;
use crate::loader::{parse_description, parse_driveline_points, TrackLoadOptions};
use crate::metadata::TrackMetadata;
use crate::objects::{ItemPlacement, PhysicalObject};

/// A kart starting slot: position plus heading.
#[derive(Debug, Clone, Copy)]
pub struct StartPosition {
    pub position: Vec3,
    /// Heading in radians.
    pub heading: f32,
}

/// Number of start slots generated for circuits without explicit
/// start positions.
const GENERATED_START_SLOTS: usize = 8;
/// Longitudinal spacing between generated start rows.
const START_ROW_SPACING: f32 = 2.5;
/// Lateral offset of the two start columns.
const START_COLUMN_OFFSET: f32 = 1.5;

/// The loaded track.
///
/// Populated once by [`load`](Self::load); afterwards the collision
/// surface, quad graph, and driveline are immutable and safe for
/// unsynchronized concurrent queries. The only per-race mutable state
/// is item consumption, cleared by [`reset`](Self::reset).
#[derive(Debug)]
pub struct TrackModel {
    metadata: TrackMetadata,
    surfaces: SurfaceDatabase,
    /// Per-model meshes for the rendering handoff.
    meshes: Vec<TriangleMesh>,
    collision: CollisionSurface,
    graph: QuadGraph,
    driveline: Driveline,
    start_positions: Vec<StartPosition>,
    curves: Vec<BezierCurve>,
    objects: Vec<PhysicalObject>,
    items: Vec<ItemPlacement>,
    item_consumed: Vec<bool>,
}

impl TrackModel {
    /// Loads a track from its description document.
    ///
    /// The sequence is strictly ordered: metadata, geometry import,
    /// collision surface, driveline, quad graph, then start data and
    /// placements. Any failure aborts the load; no partial track is
    /// ever returned.
    pub fn load(
        xml: &str,
        assets: &dyn AssetSource,
        options: &TrackLoadOptions,
    ) -> RacelineResult<Self> {
        let description = parse_description(xml)?;
        let metadata = description.metadata;

        let mut surfaces = SurfaceDatabase::with_defaults();
        for material in description.materials {
            surfaces.register(material)?;
        }

        let imported = import_geometry(&description.models, assets, &surfaces)?;
        let collision =
            CollisionSurface::build_with_cell_size(&imported.combined, options.grid_cell_size)?;

        let center = parse_driveline_points(&assets.read_to_string(&description.driveline.center)?)?;
        let left = match &description.driveline.left {
            Some(name) => parse_driveline_points(&assets.read_to_string(name)?)?,
            None => Vec::new(),
        };
        let right = match &description.driveline.right {
            Some(name) => parse_driveline_points(&assets.read_to_string(name)?)?,
            None => Vec::new(),
        };
        let driveline =
            Driveline::with_display(center, left, right, options.display_size, options.stretch)?;

        let graph = QuadGraph::build(description.quads, &description.edges, description.chaining)?;

        // Start data and placements are validated last so malformed
        // start positions never mask structural errors above.
        let start_positions = if !description.start_positions.is_empty() {
            description.start_positions
        } else if metadata.arena {
            return Err(RacelineError::InvalidTrack(
                "Arena tracks need explicit start positions".into(),
            ));
        } else {
            generate_start_positions(&graph)
        };

        let mut items = Vec::with_capacity(description.items.len());
        for item in &description.items {
            let mut position = item.position;
            if item.drop_to_ground {
                if let Some(height) = collision.terrain_height(position) {
                    position.y = height;
                }
            }
            items.push(ItemPlacement {
                kind: item.kind,
                position,
            });
        }

        info!(
            ident = metadata.ident.as_str(),
            quads = graph.len(),
            triangles = collision.triangle_count(),
            length = driveline.track_length(),
            starts = start_positions.len(),
            "track loaded"
        );

        let item_count = items.len();
        Ok(Self {
            metadata,
            surfaces,
            meshes: imported.meshes,
            collision,
            graph,
            driveline,
            start_positions,
            curves: description.curves,
            objects: description.objects,
            items,
            item_consumed: vec![false; item_count],
        })
    }

    // ─── Structure access ─────────────────────────────────────

    pub fn metadata(&self) -> &TrackMetadata {
        &self.metadata
    }

    pub fn surfaces(&self) -> &SurfaceDatabase {
        &self.surfaces
    }

    /// Meshes for the rendering handoff, in description order.
    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    pub fn collision(&self) -> &CollisionSurface {
        &self.collision
    }

    /// The quad graph, mainly for the AI.
    pub fn quad_graph(&self) -> &QuadGraph {
        &self.graph
    }

    pub fn driveline(&self) -> &Driveline {
        &self.driveline
    }

    pub fn curves(&self) -> &[BezierCurve] {
        &self.curves
    }

    pub fn objects(&self) -> &[PhysicalObject] {
        &self.objects
    }

    pub fn items(&self) -> &[ItemPlacement] {
        &self.items
    }

    // ─── Queries ──────────────────────────────────────────────

    /// Terrain under `pos`: height, normal, and surface material.
    /// `None` means off track.
    pub fn query_terrain(&self, pos: Vec3) -> Option<TerrainInfo> {
        self.collision.query_terrain(pos)
    }

    /// Terrain height under `pos`, if any.
    pub fn terrain_height(&self, pos: Vec3) -> Option<f32> {
        self.collision.terrain_height(pos)
    }

    /// The sector (quad index) containing `pos`, if any.
    pub fn sector_for_position(&self, pos: Vec3) -> Option<u32> {
        self.graph.sector_for_position(pos)
    }

    /// Main-line heading at quad `n`: the direction toward its first
    /// successor. Used to position a kart after a rescue and to detect
    /// wrong-way driving.
    pub fn angle(&self, n: u32) -> f32 {
        self.graph.angle_to_next(n, 0)
    }

    /// Representative 3D point of a sector, for rescue placement.
    pub fn track_to_spatial(&self, sector: u32) -> Vec3 {
        self.graph.track_to_spatial(sector)
    }

    /// Total arc length of the center driveline.
    pub fn track_length(&self) -> f32 {
        self.driveline.track_length()
    }

    /// Number of start slots.
    pub fn start_count(&self) -> usize {
        self.start_positions.len()
    }

    /// Placement transform for a start slot: yaw rotation by the slot
    /// heading composed with its translation.
    ///
    /// `slot` must be below [`start_count`](Self::start_count);
    /// passing an out-of-range slot is a programming error and panics.
    pub fn start_transform(&self, slot: usize) -> Mat4 {
        assert!(
            slot < self.start_positions.len(),
            "start slot {} out of range ({} slots)",
            slot,
            self.start_positions.len()
        );
        let start = self.start_positions[slot];
        Mat4::from_rotation_translation(Quat::from_rotation_y(start.heading), start.position)
    }

    /// The raw start slot data.
    pub fn start_positions(&self) -> &[StartPosition] {
        &self.start_positions
    }

    // ─── Minimap ──────────────────────────────────────────────

    /// Projects the driveline into display space at `offset` using the
    /// scale precomputed at load time.
    pub fn draw_2d_view(&self, offset_x: f32, offset_y: f32) -> MiniMapPaths {
        self.driveline.project_2d(Vec2::new(offset_x, offset_y))
    }

    /// Projects the driveline into an arbitrary display rectangle.
    pub fn draw_scaled_2d(&self, x: f32, y: f32, w: f32, h: f32) -> MiniMapPaths {
        self.driveline.project_scaled_2d(x, y, w, h)
    }

    // ─── Per-race state ───────────────────────────────────────

    /// Marks an item as picked up. Returns false if it was already
    /// consumed this race.
    pub fn consume_item(&mut self, index: usize) -> bool {
        if self.item_consumed[index] {
            return false;
        }
        self.item_consumed[index] = true;
        true
    }

    /// Whether an item is still available.
    pub fn item_available(&self, index: usize) -> bool {
        !self.item_consumed[index]
    }

    /// Advances time-varying track state. Structural data never
    /// changes per frame; prop animation and checklines live in the
    /// external managers driven alongside this call.
    pub fn update(&mut self, _dt: f32) {}

    /// Restores per-race mutable state (item availability) without
    /// re-running the load sequence.
    pub fn reset(&mut self) {
        for consumed in self.item_consumed.iter_mut() {
            *consumed = false;
        }
    }
}

/// Start slots for a circuit without explicit positions: a two-column
/// grid behind quad 0, facing the main-line direction.
fn generate_start_positions(graph: &QuadGraph) -> Vec<StartPosition> {
    let heading = graph.quad(0).heading();
    let origin = graph.quad(0).center();
    let forward = Vec3::new(heading.sin(), 0.0, heading.cos());
    let side = Vec3::new(forward.z, 0.0, -forward.x);

    (0..GENERATED_START_SLOTS)
        .map(|slot| {
            let row = (slot / 2) as f32;
            let column = if slot % 2 == 0 { -1.0 } else { 1.0 };
            StartPosition {
                position: origin - forward * (row + 1.0) * START_ROW_SPACING
                    + side * column * START_COLUMN_OFFSET,
                heading,
            }
        })
        .collect()
}
