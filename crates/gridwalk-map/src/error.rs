use std::path::PathBuf;

use gridwalk_search::SearchError;
use thiserror::Error;

/// Errors raised while reading, generating or converting a map.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("{cells} cells do not form a square grid")]
    MalformedGrid { cells: usize },

    #[error("cannot read map file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a {side}x{side} grid is too large")]
    GridTooLarge { side: usize },

    #[error("cannot write map file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid alphabet `{0}`: expected four distinct characters for open, wall, start and goal")]
    InvalidAlphabet(String),

    #[error("wall percentage {0} is outside 0.0..=1.0")]
    WallPct(f64),

    #[error(transparent)]
    Search(#[from] SearchError),
}
