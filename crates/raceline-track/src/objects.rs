//! Physical objects and item placements from the track description.
//!
//! Physical objects are collidable props (crates, cones) simulated by
//! the external rigid-body stack; the track core parses and lists
//! them. Items are pickups whose consumed/available state is the only
//! per-race mutable data this core owns.

use raceline_math::Vec3;
use raceline_types::{RacelineError, RacelineResult};

/// A collidable prop placed on the track.
#[derive(Debug, Clone)]
pub struct PhysicalObject {
    /// Mesh document asset for the prop.
    pub model: String,
    pub position: Vec3,
    /// Heading in radians.
    pub heading: f32,
    /// Mass in kg; 0 marks a static (immovable) object.
    pub mass: f32,
}

/// Kinds of pickup items a track can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Random-powerup box.
    BonusBox,
    /// Speed-boost canister.
    Nitro,
    /// Obstacle that spins the kart out.
    Banana,
}

impl ItemKind {
    /// Parses the track file spelling.
    pub fn parse(s: &str) -> RacelineResult<Self> {
        match s {
            "bonus-box" => Ok(Self::BonusBox),
            "nitro" => Ok(Self::Nitro),
            "banana" => Ok(Self::Banana),
            other => Err(RacelineError::InvalidTrack(format!(
                "Unknown item kind '{other}'"
            ))),
        }
    }

    /// The track file spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BonusBox => "bonus-box",
            Self::Nitro => "nitro",
            Self::Banana => "banana",
        }
    }
}

/// One item placed on the track surface.
#[derive(Debug, Clone)]
pub struct ItemPlacement {
    pub kind: ItemKind,
    pub position: Vec3,
}
