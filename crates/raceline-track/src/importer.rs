//! Geometry import: mesh documents → triangle collections.
//!
//! The track description references mesh document assets and marks
//! which of them define terrain collision. The importer resolves each
//! reference, tags its triangles with a surface material, and merges
//! everything into one mesh whose collidable subset later feeds the
//! collision surface. An unreadable or malformed reference aborts the
//! whole track load; a track without its geometry is unusable.

use raceline_mesh::TriangleMesh;
use raceline_surface::SurfaceDatabase;
use raceline_types::{RacelineError, RacelineResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assets::AssetSource;

/// One `<model>` reference from the track description.
#[derive(Debug, Clone)]
pub struct ModelRef {
    /// Asset name of the mesh document.
    pub src: String,
    /// Surface material name; `None` falls back to the default.
    pub material: Option<String>,
    /// Whether this mesh defines terrain collision or is decoration.
    pub collidable: bool,
}

/// On-disk mesh document: interleaved positions plus a flat triangle
/// index list, serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshDocument {
    /// `[x0, y0, z0, x1, y1, z1, ...]`
    pub positions: Vec<f32>,
    /// `[t0v0, t0v1, t0v2, t1v0, ...]`
    pub triangles: Vec<u32>,
}

/// Result of the geometry import pass.
#[derive(Debug, Clone)]
pub struct ImportedGeometry {
    /// One mesh per model reference, in description order, for the
    /// rendering handoff.
    pub meshes: Vec<TriangleMesh>,
    /// All meshes merged; the collidable subset defines the terrain.
    pub combined: TriangleMesh,
}

/// Material assigned to models that name none.
const DEFAULT_MATERIAL: &str = "asphalt";

/// Imports all referenced models.
///
/// Material names must exist in `surfaces`; an unknown name is a
/// structural error rather than a silent default, since a typo would
/// otherwise change the driving physics of a whole mesh.
pub fn import_geometry(
    models: &[ModelRef],
    assets: &dyn AssetSource,
    surfaces: &SurfaceDatabase,
) -> RacelineResult<ImportedGeometry> {
    if models.is_empty() {
        return Err(RacelineError::InvalidTrack(
            "Track references no geometry".into(),
        ));
    }

    let mut meshes = Vec::with_capacity(models.len());
    let mut combined = TriangleMesh::default();

    for model in models {
        let material_name = model.material.as_deref().unwrap_or(DEFAULT_MATERIAL);
        let material = surfaces.id_of(material_name).ok_or_else(|| {
            RacelineError::InvalidTrack(format!(
                "Model '{}' uses unknown material '{}'",
                model.src, material_name
            ))
        })?;

        let text = assets.read_to_string(&model.src)?;
        let doc: MeshDocument = serde_json::from_str(&text).map_err(|e| {
            RacelineError::Serialization(format!("Mesh document '{}': {}", model.src, e))
        })?;

        let mesh =
            TriangleMesh::from_interleaved(&doc.positions, &doc.triangles, material, model.collidable)
                .map_err(|e| {
                    RacelineError::InvalidMesh(format!("Mesh document '{}': {}", model.src, e))
                })?;

        debug!(
            src = model.src.as_str(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            collidable = model.collidable,
            "imported model"
        );

        combined.append(&mesh);
        meshes.push(mesh);
    }

    Ok(ImportedGeometry { meshes, combined })
}
