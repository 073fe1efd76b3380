//! Descriptive track metadata.
//!
//! Everything here is read by downstream systems (rendering, GUI,
//! audio selection) and not interpreted by the navigation core, with
//! two exceptions: `gravity` feeds the physics handoff and `arena`
//! switches the quad-graph and start-position rules.

use raceline_math::Vec3;
use serde::{Deserialize, Serialize};

/// An RGB color triple in 0.0–1.0 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
}

/// Sky rendering selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkySettings {
    /// Plain background color, no sky geometry.
    None,
    /// Six-texture cube.
    Box { textures: [String; 6] },
    /// Textured dome sphere section.
    Dome {
        texture: String,
        horizontal_segments: u32,
        vertical_segments: u32,
        sphere_percent: f32,
        texture_percent: f32,
    },
}

/// Distance fog parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FogSettings {
    pub enabled: bool,
    pub color: Rgb,
    pub density: f32,
    pub start: f32,
    pub end: f32,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Rgb::new(0.3, 0.7, 0.9),
            density: 0.005,
            start: 0.0,
            end: 1000.0,
        }
    }
}

/// Track header data: identity, physics globals, and the visual
/// parameters rendering reads verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Stable identifier (directory / save-file key).
    pub ident: String,
    /// Display name.
    pub name: String,
    /// Track description format version.
    pub version: u32,
    /// Gravity magnitude handed to physics.
    pub gravity: f32,
    /// Battle arena (acyclic graph, explicit start positions).
    pub arena: bool,
    pub designer: String,
    pub description: String,
    /// Screenshot asset shown in the track selection GUI.
    pub screenshot: String,
    /// Item-style key selecting pickup models.
    pub item_style: String,
    /// Grouping tags for the track selection GUI.
    pub groups: Vec<String>,
    /// Music files to cycle while racing.
    pub music: Vec<String>,
    pub sky: SkySettings,
    pub fog: FogSettings,
    pub ambient_color: Rgb,
    pub diffuse_color: Rgb,
    pub specular_color: Rgb,
    pub sky_color: Rgb,
    pub sun_position: Vec3,
}
