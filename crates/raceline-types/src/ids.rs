//! Strongly-typed identifiers for track entities.
//!
//! Quad and triangle indices stay raw `u32`s: they are dense array
//! positions produced and consumed inside one structure each. Material
//! ids cross crate boundaries (mesh triangles → surface database), so
//! a newtype keeps them from being mixed with either.

use serde::{Deserialize, Serialize};

/// Index into the surface material database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

impl MaterialId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for MaterialId {
    fn from(val: u16) -> Self {
        Self(val)
    }
}
