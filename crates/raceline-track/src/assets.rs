//! Asset resolution for track loading.
//!
//! The loader never touches the filesystem directly: every referenced
//! file (mesh documents, driveline point lists) goes through an
//! [`AssetSource`] passed in by the host. This keeps load order and
//! testability explicit: tests feed the loader from memory, the game
//! from a track directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use raceline_types::{RacelineError, RacelineResult};

/// Resolves asset names referenced by a track description.
pub trait AssetSource {
    /// Reads the raw bytes of the named asset.
    fn read(&self, name: &str) -> RacelineResult<Vec<u8>>;

    /// Reads the named asset as UTF-8 text.
    fn read_to_string(&self, name: &str) -> RacelineResult<String> {
        let bytes = self.read(name)?;
        String::from_utf8(bytes).map_err(|e| {
            RacelineError::Serialization(format!("Asset '{}' is not valid UTF-8: {}", name, e))
        })
    }
}

/// Asset source rooted at a track directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    base: PathBuf,
}

impl DirectorySource {
    /// Creates a source resolving names relative to `base`.
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }
}

impl AssetSource for DirectorySource {
    fn read(&self, name: &str) -> RacelineResult<Vec<u8>> {
        Ok(std::fs::read(self.base.join(name))?)
    }
}

/// In-memory asset source for tests and generated tracks.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an asset.
    pub fn insert(&mut self, name: &str, data: impl Into<Vec<u8>>) {
        self.files.insert(name.to_string(), data.into());
    }
}

impl AssetSource for MemorySource {
    fn read(&self, name: &str) -> RacelineResult<Vec<u8>> {
        self.files.get(name).cloned().ok_or_else(|| {
            RacelineError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such asset: {name}"),
            ))
        })
    }
}
