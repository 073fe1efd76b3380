//! Surface material database with built-in presets.
//!
//! Materials are registered once during track loading and addressed by
//! dense [`MaterialId`]s thereafter, so per-triangle lookups are a
//! plain array index.

use std::collections::HashMap;

use raceline_types::{MaterialId, RacelineResult};

use crate::properties::SurfaceProperties;

/// A registry of surface materials, addressable by id or name.
///
/// Ids are handed out in registration order. Registering a name twice
/// replaces the properties but keeps the original id, so triangles
/// tagged earlier stay valid.
#[derive(Debug, Clone, Default)]
pub struct SurfaceDatabase {
    materials: Vec<SurfaceProperties>,
    by_name: HashMap<String, MaterialId>,
}

impl SurfaceDatabase {
    /// Creates an empty database.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a database with the built-in surface presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();
        for props in [asphalt(), grass(), sand(), ice(), lava()] {
            // Presets are valid by construction.
            let _ = db.register(props);
        }
        db
    }

    /// Registers a material after validating it, returning its id.
    pub fn register(&mut self, props: SurfaceProperties) -> RacelineResult<MaterialId> {
        props.validate()?;
        if let Some(&id) = self.by_name.get(&props.name) {
            self.materials[id.index()] = props;
            return Ok(id);
        }
        let id = MaterialId(self.materials.len() as u16);
        self.by_name.insert(props.name.clone(), id);
        self.materials.push(props);
        Ok(id)
    }

    /// Looks up a material by id. Returns `None` for a stale id.
    pub fn get(&self, id: MaterialId) -> Option<&SurfaceProperties> {
        self.materials.get(id.index())
    }

    /// Looks up a material id by name.
    pub fn id_of(&self, name: &str) -> Option<MaterialId> {
        self.by_name.get(name).copied()
    }

    /// Returns all registered material names.
    pub fn names(&self) -> Vec<&str> {
        self.materials.iter().map(|m| m.name.as_str()).collect()
    }

    /// Returns the number of registered materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Returns true if no material has been registered.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

fn asphalt() -> SurfaceProperties {
    SurfaceProperties {
        name: "asphalt".into(),
        friction: 1.0,
        max_speed_fraction: 1.0,
        rolling_resistance: 0.01,
        reset: false,
    }
}

fn grass() -> SurfaceProperties {
    SurfaceProperties {
        name: "grass".into(),
        friction: 0.8,
        max_speed_fraction: 0.6,
        rolling_resistance: 0.08,
        reset: false,
    }
}

fn sand() -> SurfaceProperties {
    SurfaceProperties {
        name: "sand".into(),
        friction: 0.7,
        max_speed_fraction: 0.4,
        rolling_resistance: 0.15,
        reset: false,
    }
}

fn ice() -> SurfaceProperties {
    SurfaceProperties {
        name: "ice".into(),
        friction: 0.2,
        max_speed_fraction: 1.0,
        rolling_resistance: 0.005,
        reset: false,
    }
}

fn lava() -> SurfaceProperties {
    SurfaceProperties {
        name: "lava".into(),
        friction: 0.5,
        max_speed_fraction: 0.2,
        rolling_resistance: 0.1,
        reset: true,
    }
}
