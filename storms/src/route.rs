use serde::Serialize;

use crate::geodesy::distance_nm;
use crate::models::TrackRecord;

/// The leg between two consecutive fixes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSegment {
    pub distance_nm: f64,
    pub hours: f64,
}

impl TrackSegment {
    /// Placeholder leg reported for routes too short to move.
    pub const STATIONARY: TrackSegment = TrackSegment {
        distance_nm: 0.0,
        hours: 1.0,
    };

    pub fn speed_knots(&self) -> Option<f64> {
        if self.hours > 0.0 {
            Some(self.distance_nm / self.hours)
        } else {
            None
        }
    }
}

/// Distance and elapsed time between every pair of consecutive fixes.
///
/// A route with fewer than two fixes yields a single [`TrackSegment::STATIONARY`] leg so
/// that speed based consumers always have something to divide by.
pub fn route_segments(route: &[TrackRecord]) -> Vec<TrackSegment> {
    if route.len() < 2 {
        return vec![TrackSegment::STATIONARY];
    }

    route
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let elapsed = to.timestamp() - from.timestamp();
            TrackSegment {
                distance_nm: distance_nm(&from.position(), &to.position()),
                hours: elapsed.num_seconds() as f64 / 3600.0,
            }
        })
        .collect()
}
