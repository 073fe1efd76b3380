//! CLI command implementations.

use std::path::Path;

use raceline_track::{DirectorySource, TrackLoadOptions, TrackModel};
use raceline_types::RacelineResult;

/// Loads the track at `path`, resolving assets from its directory.
fn load(path: &str) -> RacelineResult<TrackModel> {
    let path = Path::new(path);
    let xml = std::fs::read_to_string(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let assets = DirectorySource::new(base);
    TrackModel::load(&xml, &assets, &TrackLoadOptions::default())
}

/// Validate a track description.
pub fn validate(path: &str) -> RacelineResult<()> {
    let track = load(path)?;
    println!("OK: {} ({})", track.metadata().name, track.metadata().ident);
    println!(
        "  {} quads, {} collision triangles, {:.1}m center line",
        track.quad_graph().len(),
        track.collision().triangle_count(),
        track.track_length()
    );
    Ok(())
}

/// Print a track's structure.
pub fn inspect(path: &str, list_starts: bool) -> RacelineResult<()> {
    let track = load(path)?;
    let meta = track.metadata();

    println!("Raceline Track Inspector");
    println!("────────────────────────");
    println!();
    println!("Ident:        {}", meta.ident);
    println!("Name:         {}", meta.name);
    println!("Version:      {}", meta.version);
    println!("Designer:     {}", meta.designer);
    println!("Arena:        {}", meta.arena);
    println!("Gravity:      {:.2}", meta.gravity);
    println!();
    println!("Quads:        {}", track.quad_graph().len());
    println!("Looped:       {}", track.quad_graph().is_looped());
    println!("Triangles:    {}", track.collision().triangle_count());
    println!("Length:       {:.1}m", track.track_length());
    println!("Edge lines:   {}", track.driveline().has_edges());
    println!("Start slots:  {}", track.start_count());
    println!("Curves:       {}", track.curves().len());
    println!("Objects:      {}", track.objects().len());
    println!("Items:        {}", track.items().len());
    println!("Materials:    {}", track.surfaces().names().join(", "));

    if list_starts {
        println!();
        for (slot, start) in track.start_positions().iter().enumerate() {
            println!(
                "  slot {:2}: ({:7.2}, {:6.2}, {:7.2})  heading {:6.1}°",
                slot,
                start.position.x,
                start.position.y,
                start.position.z,
                start.heading.to_degrees()
            );
        }
    }

    Ok(())
}
