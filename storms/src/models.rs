use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::geodesy::LatLon;
use crate::route;

/// One fix of a storm: timestamp, position and intensity.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub record_identifier: String,
    pub status: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Knots.
    pub max_sustained_wind: i32,
    /// Extent of hurricane-force winds in nautical miles, NE/SE/SW/NW.
    pub quadrant_radii: [f64; 4],
    /// Remaining columns (pressure, 34 and 50 kt radii, radius of max wind), untouched.
    pub extra: Vec<String>,
}

impl TrackRecord {
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// Fix position. Coordinates are range checked by the parser, not here.
    pub fn position(&self) -> LatLon {
        LatLon::unchecked(self.latitude, self.longitude)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StormProfile {
    pub id: String,
    pub name: String,
    pub route: Vec<TrackRecord>,
}

impl StormProfile {
    pub fn peak_wind(&self) -> Option<i32> {
        self.route.iter().map(|r| r.max_sustained_wind).max()
    }

    pub fn track_length_nm(&self) -> f64 {
        if self.route.len() < 2 {
            return 0.0;
        }
        route::route_segments(&self.route)
            .iter()
            .map(|s| s.distance_nm)
            .sum()
    }

    /// Total distance over total elapsed time, None below two fixes.
    pub fn mean_speed_knots(&self) -> Option<f64> {
        let first = self.route.first()?;
        let last = self.route.last()?;
        let hours = (last.timestamp() - first.timestamp()).num_seconds() as f64 / 3600.0;
        if self.route.len() < 2 || hours <= 0.0 {
            return None;
        }
        Some(self.track_length_nm() / hours)
    }
}
