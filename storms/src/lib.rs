//! Historical hurricane tracks and the storms that hit a given point.
//!
//! ```no_run
//! use storms::{search_str, TrackFiles};
//!
//! let source = TrackFiles::new(vec!["data/atl.txt".into(), "data/pac.txt".into()]);
//! let names = search_str(&source, "25.0", "-80.0")?;
//! # Ok::<(), storms::Error>(())
//! ```

pub mod error;
pub mod geodesy;
pub mod hits;
pub mod models;
pub mod parser;
pub mod route;
pub mod source;

pub use error::{Error, Result};
pub use geodesy::LatLon;
pub use hits::{find_hit_storms, search, search_str, HitKind};
pub use models::{StormProfile, TrackRecord};
pub use parser::parse;
pub use route::{route_segments, TrackSegment};
pub use source::{CachedTrackFiles, StormSource, TrackFiles};
