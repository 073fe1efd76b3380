//! Integration tests for track loading and the TrackModel aggregate.

use raceline_math::{Vec3, Vec4};
use raceline_track::{AssetSource, MemorySource, TrackLoadOptions, TrackModel};

/// A straight three-quad test track: a flat road plane from z=0 to
/// z=6, center driveline along +z, explicit start slots.
fn fixture_assets() -> MemorySource {
    let mut assets = MemorySource::new();
    assets.insert(
        "road.mesh.json",
        r#"{
            "positions": [-2.0, 0.0, 0.0,  2.0, 0.0, 0.0,  2.0, 0.0, 6.0,  -2.0, 0.0, 6.0],
            "triangles": [0, 3, 1, 1, 3, 2]
        }"#,
    );
    assets.insert(
        "deco.mesh.json",
        r#"{
            "positions": [-2.0, 1.0, 0.0,  2.0, 1.0, 0.0,  0.0, 3.0, 0.0],
            "triangles": [0, 1, 2]
        }"#,
    );
    assets.insert("center.line", "0 0 0\n0 0 3\n0 0 6\n");
    assets.insert("left.line", "-1 0 0\n-1 0 3\n-1 0 6\n");
    assets.insert("right.line", "1 0 0\n1 0 3\n1 0 6\n");
    assets
}

fn fixture_xml() -> String {
    track_xml("2", "", true)
}

fn track_xml(version: &str, extra_graph: &str, with_starts: bool) -> String {
    let starts = if with_starts {
        r#"<start-positions>
             <position xyz="0,0,-1" heading="0"/>
             <position xyz="1.5,0,-1" heading="0"/>
           </start-positions>"#
    } else {
        ""
    };
    format!(
        r#"<track ident="straight" name="Straight" version="{version}" gravity="9.6"
                  designer="CI" groups="test,short" music="race1.ogg,race2.ogg">
             <fog enabled="true" color="0.5,0.5,0.5" density="0.01" start="10" end="100"/>
             <sun position="10,200,10"/>
             <geometry>
               <model src="road.mesh.json" material="asphalt" collidable="true"/>
               <model src="deco.mesh.json" material="grass" collidable="false"/>
             </geometry>
             <driveline center="center.line" left="left.line" right="right.line"/>
             <quad-graph mode="open">
               <quad p0="-1,0,0" p1="1,0,0" p2="1,0,2" p3="-1,0,2"/>
               <quad p0="-1,0,2" p1="1,0,2" p2="1,0,4" p3="-1,0,4"/>
               <quad p0="-1,0,4" p1="1,0,4" p2="1,0,6" p3="-1,0,6"/>
               {extra_graph}
             </quad-graph>
             {starts}
             <curve ident="ending">
               <point xyz="0,5,0"/>
               <point xyz="5,5,5"/>
             </curve>
             <objects>
               <object model="crate.mesh.json" xyz="0,0,3" heading="90" mass="10"/>
             </objects>
             <items>
               <item kind="bonus-box" xyz="0,3,1" drop-to-ground="true"/>
               <item kind="banana" xyz="0,2,5" drop-to-ground="false"/>
             </items>
           </track>"#
    )
}

fn load_fixture() -> TrackModel {
    TrackModel::load(&fixture_xml(), &fixture_assets(), &TrackLoadOptions::default()).unwrap()
}

// ─── Load Sequence ────────────────────────────────────────────

#[test]
fn loads_complete_track() {
    let track = load_fixture();
    let meta = track.metadata();

    assert_eq!(meta.ident, "straight");
    assert_eq!(meta.name, "Straight");
    assert!((meta.gravity - 9.6).abs() < 1e-6);
    assert!(meta.fog.enabled);
    assert_eq!(meta.groups, vec!["test", "short"]);
    assert_eq!(meta.music.len(), 2);

    assert_eq!(track.quad_graph().len(), 3);
    assert_eq!(track.meshes().len(), 2);
    assert_eq!(track.curves().len(), 1);
    assert_eq!(track.objects().len(), 1);
    assert_eq!(track.items().len(), 2);
    assert!((track.track_length() - 6.0).abs() < 1e-5);
    assert!(track.driveline().has_edges());
}

#[test]
fn unsupported_version_fails() {
    let result = TrackModel::load(
        &track_xml("99", "", true),
        &fixture_assets(),
        &TrackLoadOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn edge_to_missing_quad_fails_load() {
    let result = TrackModel::load(
        &track_xml("2", r#"<edge from="0" to="9"/>"#, true),
        &fixture_assets(),
        &TrackLoadOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn missing_driveline_asset_fails_load() {
    // Rebuild the fixture without the center line file.
    let full = fixture_assets();
    let mut assets = MemorySource::new();
    for name in ["road.mesh.json", "deco.mesh.json", "left.line", "right.line"] {
        assets.insert(name, full.read(name).unwrap());
    }
    let result = TrackModel::load(&fixture_xml(), &assets, &TrackLoadOptions::default());
    assert!(result.is_err());
}

#[test]
fn malformed_mesh_document_fails_load() {
    let mut assets = fixture_assets();
    assets.insert("road.mesh.json", "{ not json");
    let result = TrackModel::load(&fixture_xml(), &assets, &TrackLoadOptions::default());
    assert!(result.is_err());
}

#[test]
fn arena_without_start_positions_fails() {
    let xml = track_xml("2", "", false).replace(
        r#"ident="straight" name="Straight""#,
        r#"ident="straight" name="Straight" arena="true""#,
    );
    let result = TrackModel::load(&xml, &fixture_assets(), &TrackLoadOptions::default());
    assert!(result.is_err());
}

#[test]
fn circuit_without_start_positions_generates_grid() {
    let track = TrackModel::load(
        &track_xml("2", "", false),
        &fixture_assets(),
        &TrackLoadOptions::default(),
    )
    .unwrap();
    assert_eq!(track.start_count(), 8);
    // All generated slots sit behind quad 0 and face the main line.
    for start in track.start_positions() {
        assert!(start.position.z < 1.0);
        assert!(start.heading.abs() < 1e-6);
    }
}

#[test]
fn custom_materials_are_registered() {
    let xml = fixture_xml()
        .replace(
            "<geometry>",
            r#"<materials>
                 <material name="mud" friction="0.6" max-speed="0.5" rolling-resistance="0.12"/>
               </materials>
               <geometry>"#,
        )
        .replace(r#"material="asphalt""#, r#"material="mud""#);
    let track = TrackModel::load(&xml, &fixture_assets(), &TrackLoadOptions::default()).unwrap();

    let id = track.surfaces().id_of("mud").unwrap();
    let info = track.query_terrain(Vec3::new(0.0, 2.0, 3.0)).unwrap();
    assert_eq!(info.material, id);
    assert!(track.surfaces().get(id).unwrap().is_slowdown());
}

#[test]
fn unknown_material_fails_load() {
    let xml = fixture_xml().replace(r#"material="asphalt""#, r#"material="moonrock""#);
    let result = TrackModel::load(&xml, &fixture_assets(), &TrackLoadOptions::default());
    assert!(result.is_err());
}

// ─── Queries ──────────────────────────────────────────────────

#[test]
fn terrain_query_returns_road_material() {
    let track = load_fixture();
    let info = track.query_terrain(Vec3::new(0.0, 2.0, 3.0)).unwrap();
    assert!((info.height - 0.0).abs() < 1e-5);
    assert!(info.normal.y > 0.999);
    assert_eq!(Some(info.material), track.surfaces().id_of("asphalt"));
}

#[test]
fn decoration_does_not_answer_terrain_queries() {
    let track = load_fixture();
    // The decoration triangle peaks at y=3 over z=0; queries from
    // above it still hit the road below.
    let info = track.query_terrain(Vec3::new(0.0, 5.0, 0.1)).unwrap();
    assert!((info.height - 0.0).abs() < 1e-5);
}

#[test]
fn sector_and_spatial_mapping() {
    let track = load_fixture();
    assert_eq!(track.sector_for_position(Vec3::new(0.0, 0.0, 3.0)), Some(1));
    assert!(track
        .sector_for_position(Vec3::new(50.0, 0.0, 50.0))
        .is_none());

    let center = track.track_to_spatial(1);
    assert!((center - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-5);
    assert!(track.angle(0).abs() < 1e-6);
}

#[test]
fn start_transform_places_kart() {
    let track = load_fixture();
    let transform = track.start_transform(0);
    let placed = transform * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((placed.truncate() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-5);
}

#[test]
#[should_panic]
fn start_transform_out_of_range_panics() {
    let track = load_fixture();
    let _ = track.start_transform(99);
}

#[test]
fn minimap_projection_covers_center_line() {
    let track = load_fixture();
    let paths = track.draw_2d_view(0.0, 0.0);
    assert_eq!(paths.center.len(), 3);
    assert_eq!(paths.left.len(), 3);

    let scaled = track.draw_scaled_2d(10.0, 10.0, 50.0, 50.0);
    assert_eq!(scaled.center.len(), 3);
}

// ─── Items & Per-Race State ───────────────────────────────────

#[test]
fn items_snap_to_terrain_when_requested() {
    let track = load_fixture();
    let items = track.items();
    // Dropped from y=3 onto the road plane.
    assert!((items[0].position.y - 0.0).abs() < 1e-5);
    // Not dropped: keeps its authored height.
    assert!((items[1].position.y - 2.0).abs() < 1e-5);
}

#[test]
fn consume_and_reset_items() {
    let mut track = load_fixture();
    assert!(track.item_available(0));
    assert!(track.consume_item(0));
    assert!(!track.consume_item(0));
    assert!(!track.item_available(0));

    track.update(0.016);
    track.reset();
    assert!(track.item_available(0));
}
