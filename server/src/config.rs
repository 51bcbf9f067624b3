use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;
use storms::{CachedTrackFiles, StormSource, TrackFiles};

pub type SharedSource = Arc<dyn StormSource + Send + Sync>;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_track_files")]
    pub track_files: Vec<PathBuf>,
    #[serde(default)]
    pub cache_tracks: bool,
}

fn default_track_files() -> Vec<PathBuf> {
    vec![PathBuf::from("data/atl.txt"), PathBuf::from("data/pac.txt")]
}

impl Config {
    /// Read `LANDFALL_TRACK_FILES` (comma separated) and `LANDFALL_CACHE_TRACKS`.
    pub fn from_env() -> Result<Self, envy::Error> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed("LANDFALL_").from_iter(vars)
    }

    /// Command line flags win over the environment.
    pub fn with_overrides(mut self, track_files: Vec<PathBuf>, cache: bool) -> Self {
        if !track_files.is_empty() {
            self.track_files = track_files;
        }
        self.cache_tracks |= cache;
        self
    }

    pub fn storm_source(&self) -> SharedSource {
        if self.cache_tracks {
            Arc::new(CachedTrackFiles::new(self.track_files.clone()))
        } else {
            Arc::new(TrackFiles::new(self.track_files.clone()))
        }
    }
}
