//! Track description parsing.
//!
//! The description is an XML document with required header attributes
//! (`ident`, `name`, `version`) and nested sections for geometry,
//! driveline, quad graph, start positions, curves, objects, and items.
//! Parsing is strict about structure (fail fast, no partial track) and
//! lenient about presentation metadata (sky, fog, and lighting default
//! when absent).

use raceline_graph::Chaining;
use raceline_math::{Vec2, Vec3};
use raceline_surface::SurfaceProperties;
use raceline_types::constants::{
    DEFAULT_GRAVITY, DEFAULT_GRID_CELL, TRACK_2D_HEIGHT, TRACK_2D_WIDTH, TRACK_VERSION_MAX,
    TRACK_VERSION_MIN,
};
use raceline_types::{RacelineError, RacelineResult};

use crate::curve::BezierCurve;
use crate::importer::ModelRef;
use crate::metadata::{FogSettings, Rgb, SkySettings, TrackMetadata};
use crate::model::StartPosition;
use crate::objects::{ItemKind, PhysicalObject};

/// Host-side options for a track load.
#[derive(Debug, Clone)]
pub struct TrackLoadOptions {
    /// Size of the 2D minimap display area.
    pub display_size: Vec2,
    /// Stretch the minimap to fill both display axes instead of
    /// preserving the track's aspect ratio.
    pub stretch: bool,
    /// Cell size for the collision and sector lookup grids.
    pub grid_cell_size: f32,
}

impl Default for TrackLoadOptions {
    fn default() -> Self {
        Self {
            display_size: Vec2::new(TRACK_2D_WIDTH, TRACK_2D_HEIGHT),
            stretch: false,
            grid_cell_size: DEFAULT_GRID_CELL,
        }
    }
}

/// Driveline file references from the description.
#[derive(Debug, Clone)]
pub struct DrivelineRefs {
    pub center: String,
    pub left: Option<String>,
    pub right: Option<String>,
}

/// An item placement as described, before terrain snapping.
#[derive(Debug, Clone)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub position: Vec3,
    /// Snap the item's height onto the terrain below at load time.
    pub drop_to_ground: bool,
}

/// Fully parsed track description, ready for the load sequence.
#[derive(Debug, Clone)]
pub struct TrackDescription {
    pub metadata: TrackMetadata,
    /// Track-specific surface materials to register on top of the
    /// built-in presets.
    pub materials: Vec<SurfaceProperties>,
    pub models: Vec<ModelRef>,
    pub driveline: DrivelineRefs,
    pub quads: Vec<[Vec3; 4]>,
    pub edges: Vec<(u32, u32)>,
    pub chaining: Chaining,
    pub start_positions: Vec<StartPosition>,
    pub curves: Vec<BezierCurve>,
    pub objects: Vec<PhysicalObject>,
    pub items: Vec<ItemRef>,
}

/// Parses a track description document.
pub fn parse_description(xml: &str) -> RacelineResult<TrackDescription> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| RacelineError::InvalidTrack(format!("XML parse error: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "track" {
        return Err(RacelineError::InvalidTrack(
            "Root element must be <track>".into(),
        ));
    }

    let metadata = parse_metadata(&root)?;

    let mut materials = Vec::new();
    if let Some(section) = child(&root, "materials") {
        for node in section.children().filter(|n| n.has_tag_name("material")) {
            materials.push(SurfaceProperties {
                name: req_attr(&node, "name")?.to_string(),
                friction: f32_attr(&node, "friction", 1.0)?,
                max_speed_fraction: f32_attr(&node, "max-speed", 1.0)?,
                rolling_resistance: f32_attr(&node, "rolling-resistance", 0.01)?,
                reset: bool_attr(&node, "reset", false)?,
            });
        }
    }

    let mut models = Vec::new();
    if let Some(geometry) = child(&root, "geometry") {
        for node in geometry.children().filter(|n| n.has_tag_name("model")) {
            models.push(ModelRef {
                src: req_attr(&node, "src")?.to_string(),
                material: node.attribute("material").map(str::to_string),
                collidable: bool_attr(&node, "collidable", true)?,
            });
        }
    }

    let driveline_node = child(&root, "driveline").ok_or_else(|| {
        RacelineError::InvalidTrack("Missing <driveline> section".into())
    })?;
    let driveline = DrivelineRefs {
        center: req_attr(&driveline_node, "center")?.to_string(),
        left: driveline_node.attribute("left").map(str::to_string),
        right: driveline_node.attribute("right").map(str::to_string),
    };

    let graph_node = child(&root, "quad-graph").ok_or_else(|| {
        RacelineError::InvalidTrack("Missing <quad-graph> section".into())
    })?;
    let chaining = match graph_node.attribute("mode").unwrap_or("looped") {
        "looped" => Chaining::Looped,
        "open" => Chaining::Open,
        "explicit" => Chaining::Explicit,
        other => {
            return Err(RacelineError::InvalidTrack(format!(
                "Unknown quad-graph mode '{other}'"
            )))
        }
    };
    let mut quads = Vec::new();
    let mut edges = Vec::new();
    for node in graph_node.children().filter(|n| n.is_element()) {
        match node.tag_name().name() {
            "quad" => {
                quads.push([
                    vec3_attr(&node, "p0")?,
                    vec3_attr(&node, "p1")?,
                    vec3_attr(&node, "p2")?,
                    vec3_attr(&node, "p3")?,
                ]);
            }
            "edge" => {
                edges.push((u32_attr(&node, "from")?, u32_attr(&node, "to")?));
            }
            other => {
                return Err(RacelineError::InvalidTrack(format!(
                    "Unexpected element <{other}> in <quad-graph>"
                )))
            }
        }
    }

    let mut start_positions = Vec::new();
    if let Some(starts) = child(&root, "start-positions") {
        for node in starts.children().filter(|n| n.has_tag_name("position")) {
            start_positions.push(StartPosition {
                position: vec3_attr(&node, "xyz")?,
                heading: f32_attr(&node, "heading", 0.0)?.to_radians(),
            });
        }
    }

    let mut curves = Vec::new();
    for node in root.children().filter(|n| n.has_tag_name("curve")) {
        let ident = node.attribute("ident").unwrap_or("").to_string();
        let mut points = Vec::new();
        for point in node.children().filter(|n| n.has_tag_name("point")) {
            points.push(vec3_attr(&point, "xyz")?);
        }
        curves.push(BezierCurve::new(ident, points));
    }

    let mut objects = Vec::new();
    if let Some(section) = child(&root, "objects") {
        for node in section.children().filter(|n| n.has_tag_name("object")) {
            objects.push(PhysicalObject {
                model: req_attr(&node, "model")?.to_string(),
                position: vec3_attr(&node, "xyz")?,
                heading: f32_attr(&node, "heading", 0.0)?.to_radians(),
                mass: f32_attr(&node, "mass", 0.0)?,
            });
        }
    }

    let mut items = Vec::new();
    if let Some(section) = child(&root, "items") {
        for node in section.children().filter(|n| n.has_tag_name("item")) {
            items.push(ItemRef {
                kind: ItemKind::parse(req_attr(&node, "kind")?)?,
                position: vec3_attr(&node, "xyz")?,
                drop_to_ground: bool_attr(&node, "drop-to-ground", true)?,
            });
        }
    }

    Ok(TrackDescription {
        metadata,
        materials,
        models,
        driveline,
        quads,
        edges,
        chaining,
        start_positions,
        curves,
        objects,
        items,
    })
}

fn parse_metadata(root: &roxmltree::Node) -> RacelineResult<TrackMetadata> {
    let ident = req_attr(root, "ident")?.to_string();
    let name = req_attr(root, "name")?.to_string();
    let version: u32 = req_attr(root, "version")?
        .parse()
        .map_err(|_| RacelineError::InvalidTrack("version must be an integer".into()))?;
    if !(TRACK_VERSION_MIN..=TRACK_VERSION_MAX).contains(&version) {
        return Err(RacelineError::UnsupportedVersion {
            found: version,
            min: TRACK_VERSION_MIN,
            max: TRACK_VERSION_MAX,
        });
    }

    let sky = if let Some(node) = child(root, "sky-box") {
        let raw = req_attr(&node, "textures")?;
        let textures: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
        let textures: [String; 6] = textures.try_into().map_err(|v: Vec<String>| {
            RacelineError::InvalidTrack(format!("sky-box needs 6 textures, got {}", v.len()))
        })?;
        SkySettings::Box { textures }
    } else if let Some(node) = child(root, "sky-dome") {
        SkySettings::Dome {
            texture: req_attr(&node, "texture")?.to_string(),
            horizontal_segments: u32_attr_or(&node, "hori-segments", 16)?,
            vertical_segments: u32_attr_or(&node, "vert-segments", 16)?,
            sphere_percent: f32_attr(&node, "sphere-percent", 1.0)?,
            texture_percent: f32_attr(&node, "texture-percent", 1.0)?,
        }
    } else {
        SkySettings::None
    };

    let fog = if let Some(node) = child(root, "fog") {
        let defaults = FogSettings::default();
        FogSettings {
            enabled: bool_attr(&node, "enabled", true)?,
            color: color_attr(&node, "color", defaults.color)?,
            density: f32_attr(&node, "density", defaults.density)?,
            start: f32_attr(&node, "start", defaults.start)?,
            end: f32_attr(&node, "end", defaults.end)?,
        }
    } else {
        FogSettings::default()
    };

    let list_attr = |name: &str| -> Vec<String> {
        root.attribute(name)
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    };

    Ok(TrackMetadata {
        ident,
        name,
        version,
        gravity: f32_attr(root, "gravity", DEFAULT_GRAVITY)?,
        arena: bool_attr(root, "arena", false)?,
        designer: root.attribute("designer").unwrap_or("").to_string(),
        description: root.attribute("description").unwrap_or("").to_string(),
        screenshot: root.attribute("screenshot").unwrap_or("").to_string(),
        item_style: root.attribute("item-style").unwrap_or("default").to_string(),
        groups: list_attr("groups"),
        music: list_attr("music"),
        sky,
        fog,
        ambient_color: section_color(root, "ambient", Rgb::new(0.6, 0.6, 0.6))?,
        diffuse_color: section_color(root, "diffuse", Rgb::WHITE)?,
        specular_color: section_color(root, "specular", Rgb::new(0.3, 0.3, 0.3))?,
        sky_color: section_color(root, "sky-color", Rgb::new(0.3, 0.6, 1.0))?,
        sun_position: child(root, "sun")
            .map(|n| vec3_attr(&n, "position"))
            .transpose()?
            .unwrap_or(Vec3::new(0.0, 1000.0, 0.0)),
    })
}

/// Parses a driveline point file: one `x y z` triple per line, with
/// blank lines and `#` comments skipped.
pub fn parse_driveline_points(text: &str) -> RacelineResult<Vec<Vec3>> {
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let mut next = |axis: &str| -> RacelineResult<f32> {
            parts
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| {
                    RacelineError::InvalidDriveline(format!(
                        "Line {}: missing or invalid {axis} coordinate",
                        lineno + 1
                    ))
                })
        };
        let x = next("x")?;
        let y = next("y")?;
        let z = next("z")?;
        points.push(Vec3::new(x, y, z));
    }
    Ok(points)
}

// ─── Attribute helpers ────────────────────────────────────────

fn child<'a, 'input>(
    node: &roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn req_attr<'a>(node: &roxmltree::Node<'a, '_>, name: &str) -> RacelineResult<&'a str> {
    node.attribute(name).ok_or_else(|| {
        RacelineError::InvalidTrack(format!(
            "<{}> is missing required attribute '{}'",
            node.tag_name().name(),
            name
        ))
    })
}

fn f32_attr(node: &roxmltree::Node, name: &str, default: f32) -> RacelineResult<f32> {
    match node.attribute(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            RacelineError::InvalidTrack(format!(
                "<{}> attribute '{}' is not a number: '{}'",
                node.tag_name().name(),
                name,
                raw
            ))
        }),
    }
}

fn u32_attr(node: &roxmltree::Node, name: &str) -> RacelineResult<u32> {
    req_attr(node, name)?.parse().map_err(|_| {
        RacelineError::InvalidTrack(format!(
            "<{}> attribute '{}' is not an integer",
            node.tag_name().name(),
            name
        ))
    })
}

fn u32_attr_or(node: &roxmltree::Node, name: &str, default: u32) -> RacelineResult<u32> {
    match node.attribute(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            RacelineError::InvalidTrack(format!(
                "<{}> attribute '{}' is not an integer: '{}'",
                node.tag_name().name(),
                name,
                raw
            ))
        }),
    }
}

fn bool_attr(node: &roxmltree::Node, name: &str, default: bool) -> RacelineResult<bool> {
    match node.attribute(name) {
        None => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(RacelineError::InvalidTrack(format!(
            "<{}> attribute '{}' is not a boolean: '{}'",
            node.tag_name().name(),
            name,
            other
        ))),
    }
}

fn vec3_attr(node: &roxmltree::Node, name: &str) -> RacelineResult<Vec3> {
    let raw = req_attr(node, name)?;
    let parts: Vec<f32> = raw
        .split(',')
        .map(|s| s.trim().parse())
        .collect::<Result<_, _>>()
        .map_err(|_| {
            RacelineError::InvalidTrack(format!(
                "<{}> attribute '{}' is not an 'x,y,z' triple: '{}'",
                node.tag_name().name(),
                name,
                raw
            ))
        })?;
    if parts.len() != 3 {
        return Err(RacelineError::InvalidTrack(format!(
            "<{}> attribute '{}' needs 3 components, got {}",
            node.tag_name().name(),
            name,
            parts.len()
        )));
    }
    Ok(Vec3::new(parts[0], parts[1], parts[2]))
}

fn color_attr(node: &roxmltree::Node, name: &str, default: Rgb) -> RacelineResult<Rgb> {
    match node.attribute(name) {
        None => Ok(default),
        Some(raw) => {
            let parts: Vec<f32> = raw
                .split(',')
                .map(|s| s.trim().parse())
                .collect::<Result<_, _>>()
                .map_err(|_| {
                    RacelineError::InvalidTrack(format!(
                        "<{}> attribute '{}' is not an 'r,g,b' color: '{}'",
                        node.tag_name().name(),
                        name,
                        raw
                    ))
                })?;
            if parts.len() != 3 {
                return Err(RacelineError::InvalidTrack(format!(
                    "<{}> attribute '{}' needs 3 components, got {}",
                    node.tag_name().name(),
                    name,
                    parts.len()
                )));
            }
            Ok(Rgb::new(parts[0], parts[1], parts[2]))
        }
    }
}

fn section_color(root: &roxmltree::Node, name: &str, default: Rgb) -> RacelineResult<Rgb> {
    match child(root, name) {
        None => Ok(default),
        Some(node) => color_attr(&node, "color", default),
    }
}
