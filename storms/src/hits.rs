//! Which storms passed over a point.
//!
//! A fix hits the query point when the storm center came within
//! [`DIRECT_HIT_RADIUS_NM`] at hurricane strength, or when the point lies inside the
//! hurricane-force wind radius reported for the quadrant it sits in.

use serde::Serialize;

use crate::error::Result;
use crate::geodesy::{distance_nm, initial_bearing, LatLon, Quadrant};
use crate::models::{StormProfile, TrackRecord};
use crate::source::StormSource;

pub const DIRECT_HIT_RADIUS_NM: f64 = 5.0;
/// Knots.
pub const HURRICANE_FORCE_KT: i32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HitKind {
    /// The center passed within a few nautical miles at hurricane strength.
    Direct,
    /// The point was inside the quadrant's wind radius.
    WindField,
}

pub fn classify(record: &TrackRecord, point: &LatLon) -> Option<HitKind> {
    let center = record.position();
    let distance = distance_nm(&center, point);

    if distance <= DIRECT_HIT_RADIUS_NM && record.max_sustained_wind >= HURRICANE_FORCE_KT {
        return Some(HitKind::Direct);
    }

    let quadrant = Quadrant::from_bearing(initial_bearing(&center, point));
    if record.quadrant_radii[quadrant.index()] >= distance {
        return Some(HitKind::WindField);
    }

    None
}

/// First fix of the storm that hits the point.
pub fn first_hit<'a>(storm: &'a StormProfile, point: &LatLon) -> Option<(&'a TrackRecord, HitKind)> {
    storm
        .route
        .iter()
        .find_map(|record| classify(record, point).map(|kind| (record, kind)))
}

/// Names of the storms that hit `point`, in input order. A name appears once per
/// matching storm, duplicates included.
pub fn find_hit_storms(point: &LatLon, storms: &[StormProfile]) -> Vec<String> {
    storms
        .iter()
        .filter(|storm| match first_hit(storm, point) {
            Some((record, kind)) => {
                log::debug!(
                    "{} ({}) hits {:?}: {:?} at {}",
                    storm.name,
                    storm.id,
                    point,
                    kind,
                    record.timestamp()
                );
                true
            }
            None => false,
        })
        .map(|storm| storm.name.clone())
        .collect()
}

pub fn search<S: StormSource + ?Sized>(source: &S, point: &LatLon) -> Result<Vec<String>> {
    let storms = source.storms()?;
    Ok(find_hit_storms(point, &storms))
}

/// Same as [`search`] for raw decimal-degree input, as typed in a form.
pub fn search_str<S: StormSource + ?Sized>(
    source: &S,
    latitude: &str,
    longitude: &str,
) -> Result<Vec<String>> {
    let point = LatLon::parse(latitude, longitude)?;
    search(source, &point)
}
