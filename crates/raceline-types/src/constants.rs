//! Track-space constants and query defaults.

/// Default gravitational acceleration (m/s²) when the track file omits it.
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// Height above a query point from which the terrain ray is cast.
/// Covers steep terrain rising directly under a kart.
pub const TERRAIN_PROBE_UP: f32 = 5.0;

/// Maximum distance the terrain ray travels downward before the
/// query reports "no terrain" (the entity is off track / falling).
pub const TERRAIN_PROBE_DOWN: f32 = 200.0;

/// Default collision grid cell size (meters).
pub const DEFAULT_GRID_CELL: f32 = 8.0;

/// Default size of the 2D minimap display area.
pub const TRACK_2D_WIDTH: f32 = 100.0;
/// See [`TRACK_2D_WIDTH`].
pub const TRACK_2D_HEIGHT: f32 = 100.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Epsilon for degenerate triangle detection (area threshold).
pub const DEGENERATE_AREA_THRESHOLD: f32 = 1.0e-10;

/// Oldest track description version the loader accepts.
pub const TRACK_VERSION_MIN: u32 = 1;

/// Newest track description version the loader accepts.
pub const TRACK_VERSION_MAX: u32 = 2;
