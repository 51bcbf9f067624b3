//! Positions on the WGS84 ellipsoid.
//!
//! Distances and bearings are geodesic (Karney's algorithm through `geo`), which keeps
//! errors well under a meter at the few-nautical-mile scale hit tests work at.

use geo::{Bearing, Distance, Geodesic, Point};
use serde::Serialize;

use crate::error::{Error, Result};

pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

pub fn meters_to_nm(meters: f64) -> f64 {
    meters / METERS_PER_NAUTICAL_MILE
}

/// A validated position in decimal degrees, north and east positive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLon {
    lat: f64,
    lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidCoordinate(format!(
                "latitude {} is outside of [-90, 90]",
                lat
            )));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::InvalidCoordinate(format!(
                "longitude {} is outside of [-180, 180]",
                lon
            )));
        }
        Ok(LatLon { lat, lon })
    }

    /// Parse a latitude/longitude pair such as `("25.0", "-80.0")` or `("25.0N", "80.0W")`.
    pub fn parse(lat: &str, lon: &str) -> Result<Self> {
        let lat_deg = parse_degrees(lat, 'N', 'S')
            .ok_or_else(|| Error::InvalidCoordinate(format!("latitude {:?} is not a number", lat)))?;
        let lon_deg = parse_degrees(lon, 'E', 'W').ok_or_else(|| {
            Error::InvalidCoordinate(format!("longitude {:?} is not a number", lon))
        })?;
        LatLon::new(lat_deg, lon_deg)
    }

    pub(crate) fn unchecked(lat: f64, lon: f64) -> Self {
        LatLon { lat, lon }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Decimal degrees, either signed (`-80.0`) or with a hemisphere suffix (`80.0W`).
pub(crate) fn parse_degrees(raw: &str, positive: char, negative: char) -> Option<f64> {
    let raw = raw.trim();
    let last = raw.chars().last()?;

    let (number, sign) = if last.eq_ignore_ascii_case(&positive) {
        (&raw[..raw.len() - 1], 1.0)
    } else if last.eq_ignore_ascii_case(&negative) {
        (&raw[..raw.len() - 1], -1.0)
    } else {
        (raw, 1.0)
    };

    let number = number.trim();
    // "25.0S" or "-25.0", never both
    if sign < 0.0 && number.starts_with('-') {
        return None;
    }

    let value: f64 = number.parse().ok()?;
    if value.is_finite() {
        Some(sign * value)
    } else {
        None
    }
}

/// Geodesic distance in meters.
pub fn distance_m(from: &LatLon, to: &LatLon) -> f64 {
    Geodesic::distance(from.point(), to.point())
}

pub fn distance_nm(from: &LatLon, to: &LatLon) -> f64 {
    meters_to_nm(distance_m(from, to))
}

/// Initial geodesic azimuth from `from` towards `to`, in degrees within [0, 360).
pub fn initial_bearing(from: &LatLon, to: &LatLon) -> f64 {
    let bearing = Geodesic::bearing(from.point(), to.point()).rem_euclid(360.0);
    // rem_euclid rounds tiny negative azimuths up to exactly 360
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

/// Compass quadrant around a storm center, in the column order of the wind radii.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    NorthEast = 0,
    SouthEast = 1,
    SouthWest = 2,
    NorthWest = 3,
}

impl Quadrant {
    pub fn from_bearing(bearing: f64) -> Quadrant {
        match ((bearing.rem_euclid(360.0) / 90.0).floor() as usize) % 4 {
            0 => Quadrant::NorthEast,
            1 => Quadrant::SouthEast,
            2 => Quadrant::SouthWest,
            _ => Quadrant::NorthWest,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}
