//! Character maps for gridwalk.
//!
//! Everything around the search engine that knows about grids lives here:
//! parsing a marker-character map ([`CharMap`]), generating random maps
//! ([`MapGen`]), turning a map into a search [`Graph`](gridwalk_search::Graph)
//! ([`build_grid`]) and drawing a found path back onto the grid
//! ([`render_path`]).

pub mod build;
pub mod cell;
pub mod charmap;
pub mod error;
pub mod mapgen;
pub mod render;

pub use build::{Connectivity, ParseConnectivityError, build_grid};
pub use cell::{Alphabet, MapCell};
pub use charmap::{CharMap, DEFAULT_MAX_CELLS, MapConfig};
pub use error::MapError;
pub use mapgen::MapGen;
pub use render::{PathView, render_path, render_search};
