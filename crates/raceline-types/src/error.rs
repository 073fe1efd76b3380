//! Error types for the Raceline track core.
//!
//! All crates return `RacelineResult<T>` from fallible operations.
//! Load-time structural problems are errors; per-query geometric misses
//! (no terrain under a point, no quad containing a position) are *not*
//! errors and are reported as `Option` values by the query APIs.

use thiserror::Error;

/// Unified error type for the Raceline track core.
#[derive(Debug, Error)]
pub enum RacelineError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Track description is structurally invalid or missing required data.
    #[error("Invalid track description: {0}")]
    InvalidTrack(String),

    /// Quad graph is malformed (edge to a missing quad, unreachable quad).
    #[error("Invalid quad graph: {0}")]
    InvalidGraph(String),

    /// Driveline data is unusable (empty or non-finite center line).
    #[error("Invalid driveline: {0}")]
    InvalidDriveline(String),

    /// Surface material parameter is out of valid range.
    #[error("Invalid surface material: {0}")]
    InvalidMaterial(String),

    /// Track file version is outside the supported range.
    #[error("Unsupported track version {found} (supported: {min}..={max})")]
    UnsupportedVersion { found: u32, min: u32, max: u32 },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, RacelineError>`.
pub type RacelineResult<T> = Result<T, RacelineError>;
