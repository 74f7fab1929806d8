use std::path::PathBuf;

use gridwalk_map::{Connectivity, MapConfig};
use gridwalk_search::{NodeIndex, SearchKind};

use crate::app::Cli;

/// Wall probability for random maps when none is given.
pub const DEFAULT_WALL_PCT: f64 = 0.3;

/// Where the map comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum MapSource {
    /// A map file. Unreadable files degrade to an all-wall map.
    File(PathBuf),
    /// A freshly generated map.
    Random {
        side: usize,
        wall_pct: f64,
        seed: Option<u64>,
        carve: bool,
    },
}

/// Everything one invocation needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub source: MapSource,
    pub map: MapConfig,
    pub connectivity: Connectivity,
    pub kinds: Vec<SearchKind>,
    pub start: Option<NodeIndex>,
    pub goal: Option<NodeIndex>,
    pub save_map: Option<PathBuf>,
    pub json: bool,
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        let source = match cli.random {
            Some(side) => MapSource::Random {
                side,
                wall_pct: cli.wall_pct.unwrap_or(DEFAULT_WALL_PCT),
                seed: cli.seed,
                carve: cli.carve,
            },
            None => MapSource::File(cli.map.clone()),
        };
        Self {
            source,
            map: MapConfig {
                max_cells: cli.max_cells,
                alphabet: cli.alphabet,
            },
            connectivity: cli.connectivity,
            kinds: cli.algorithm.kinds(),
            start: cli.start,
            goal: cli.goal,
            save_map: cli.save_map.clone(),
            json: cli.json,
        }
    }
}
