use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::models::StormProfile;
use crate::parser;

/// Supplies the storm profiles a query runs against.
pub trait StormSource {
    fn storms(&self) -> Result<Arc<Vec<StormProfile>>>;
}

/// Parses the track files again on every call.
#[derive(Clone, Debug)]
pub struct TrackFiles {
    paths: Vec<PathBuf>,
}

impl TrackFiles {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        TrackFiles { paths }
    }
}

impl StormSource for TrackFiles {
    fn storms(&self) -> Result<Arc<Vec<StormProfile>>> {
        parser::parse(&self.paths).map(Arc::new)
    }
}

struct Snapshot {
    contents: Vec<String>,
    storms: Arc<Vec<StormProfile>>,
}

/// Read-through cache over track files.
///
/// Files are read on every call, parsing only happens again when their contents differ
/// from the last parsed ones.
pub struct CachedTrackFiles {
    paths: Vec<PathBuf>,
    snapshot: Mutex<Option<Snapshot>>,
}

impl CachedTrackFiles {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        CachedTrackFiles {
            paths,
            snapshot: Mutex::new(None),
        }
    }

    fn read_all(&self) -> Result<Vec<String>> {
        self.paths.iter().map(|path| read(path)).collect()
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

impl StormSource for CachedTrackFiles {
    fn storms(&self) -> Result<Arc<Vec<StormProfile>>> {
        let contents = self.read_all()?;

        // poisoned by a panicking parse, the snapshot gets replaced anyway
        let mut snapshot = self
            .snapshot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(cached) = snapshot.as_ref() {
            if cached.contents == contents {
                log::debug!("Track files unchanged, reusing {} storms", cached.storms.len());
                return Ok(cached.storms.clone());
            }
        }

        let mut storms = Vec::new();
        for (path, text) in self.paths.iter().zip(&contents) {
            storms.extend(parser::parse_str(path, text)?);
        }
        let storms = Arc::new(storms);
        log::debug!("Track files (re)parsed: {} storms", storms.len());

        *snapshot = Some(Snapshot {
            contents,
            storms: storms.clone(),
        });
        Ok(storms)
    }
}
