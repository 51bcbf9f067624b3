use std::path::PathBuf;

use storms::hits::{first_hit, HitKind};
use storms::{find_hit_storms, parse, search_str, LatLon, StormSource, TrackFiles};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixtures() -> Vec<PathBuf> {
    vec![fixture("atl.txt"), fixture("pac.txt")]
}

#[test]
fn test_parse_fixtures_in_order() {
    let storms = parse(&fixtures()).unwrap();

    let ids: Vec<&str> = storms.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["AL011999", "AL021999", "EP011999", "EP021999"]);

    let fixes: Vec<usize> = storms.iter().map(|s| s.route.len()).collect();
    assert_eq!(fixes, vec![5, 3, 2, 0]);

    let landfall = &storms[0].route[3];
    assert_eq!(landfall.record_identifier, "L");
    assert_eq!(landfall.latitude, 25.8);
    assert_eq!(landfall.longitude, -80.2);
    assert_eq!(landfall.quadrant_radii, [25.0, 20.0, 15.0, 20.0]);
    assert_eq!(landfall.extra[0], "950");
}

#[test]
fn test_direct_hit_on_landfall() {
    let source = TrackFiles::new(fixtures());
    assert_eq!(search_str(&source, "25.8", "-80.2").unwrap(), vec!["ALPHA"]);
}

#[test]
fn test_same_name_in_other_basin() {
    let source = TrackFiles::new(fixtures());
    let storms = source.storms().unwrap();
    let point = LatLon::new(15.0, -105.0).unwrap();

    assert_eq!(find_hit_storms(&point, &storms), vec!["ALPHA"]);
    assert!(first_hit(&storms[0], &point).is_none());
    assert!(first_hit(&storms[2], &point).is_some());
}

#[test]
fn test_wind_field_depends_on_quadrant() {
    let storms = parse(&fixtures()).unwrap();

    // ~12 nm north east of the last fix, inside its 20 nm radius
    let north_east = LatLon::new(26.1, -81.1).unwrap();
    let (fix, kind) = first_hit(&storms[0], &north_east).unwrap();
    assert_eq!(kind, HitKind::WindField);
    assert_eq!(fix.timestamp().format("%Y%m%d%H%M").to_string(), "199908250000");

    // same distance to the south west, outside its 10 nm radius
    let south_west = LatLon::new(25.9, -81.5).unwrap();
    assert!(find_hit_storms(&south_west, &storms).is_empty());
}

#[test]
fn test_far_away_point() {
    let source = TrackFiles::new(fixtures());
    assert!(search_str(&source, "0.0", "0.0").unwrap().is_empty());
}

#[test]
fn test_tracks_have_length() {
    let storms = parse(&fixtures()).unwrap();

    assert!(storms[0].track_length_nm() > 200.0);
    assert_eq!(storms[0].peak_wind(), Some(105));
    assert_eq!(storms[3].track_length_nm(), 0.0);
    assert!(storms[3].mean_speed_knots().is_none());
}
