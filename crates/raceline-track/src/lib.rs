//! # raceline-track
//!
//! Track description parsing and the `TrackModel` aggregate.
//!
//! A track is described by an XML document plus referenced asset files
//! (mesh documents, driveline point lists) resolved through an
//! [`AssetSource`]. Loading is single-threaded and strictly ordered;
//! a failure at any step discards all partial state and surfaces as a
//! [`raceline_types::RacelineError`]. The loaded [`TrackModel`] is
//! queried read-only for the rest of the race session.

pub mod assets;
pub mod curve;
pub mod importer;
pub mod loader;
pub mod metadata;
pub mod model;
pub mod objects;

pub use assets::{AssetSource, DirectorySource, MemorySource};
pub use curve::BezierCurve;
pub use loader::TrackLoadOptions;
pub use metadata::TrackMetadata;
pub use model::{StartPosition, TrackModel};
