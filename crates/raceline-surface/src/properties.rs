//! Physical surface properties.
//!
//! These parameters map directly onto the vehicle physics: friction
//! scales lateral grip, the max-speed fraction throttles karts driving
//! off the racing surface, and the reset flag marks surfaces that
//! trigger an immediate rescue instead of normal driving.

use raceline_types::{RacelineError, RacelineResult};
use serde::{Deserialize, Serialize};

/// Physical properties of a track surface material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceProperties {
    /// Material name (e.g., "asphalt", "grass").
    pub name: String,

    /// Coulomb friction coefficient (0.0–1.0+). Ice is low, asphalt high.
    pub friction: f32,

    /// Fraction of top speed reachable on this surface (0.0–1.0).
    /// 1.0 on the racing surface, lower on grass and sand.
    pub max_speed_fraction: f32,

    /// Rolling-resistance factor applied while driving on this surface.
    pub rolling_resistance: f32,

    /// Driving onto this surface triggers an immediate rescue
    /// (lava, deep water, kill planes).
    pub reset: bool,
}

impl SurfaceProperties {
    /// Validates the parameter ranges.
    pub fn validate(&self) -> RacelineResult<()> {
        if self.name.is_empty() {
            return Err(RacelineError::InvalidMaterial(
                "Material name must not be empty".into(),
            ));
        }
        if self.friction < 0.0 {
            return Err(RacelineError::InvalidMaterial(format!(
                "{}: friction must be non-negative",
                self.name
            )));
        }
        if !(0.0..=1.0).contains(&self.max_speed_fraction) {
            return Err(RacelineError::InvalidMaterial(format!(
                "{}: max_speed_fraction must be in 0.0..=1.0",
                self.name
            )));
        }
        if self.rolling_resistance < 0.0 {
            return Err(RacelineError::InvalidMaterial(format!(
                "{}: rolling_resistance must be non-negative",
                self.name
            )));
        }
        Ok(())
    }

    /// Returns true if this surface meaningfully slows a kart down.
    pub fn is_slowdown(&self) -> bool {
        self.max_speed_fraction < 1.0
    }
}
