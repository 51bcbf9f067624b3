use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A track file line could not be turned into a storm header or a fix.
    #[error("{}:{line}: {reason}", path.display())]
    MalformedInput {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A query point outside of valid latitude/longitude ranges, or not a number.
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Unable to read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
