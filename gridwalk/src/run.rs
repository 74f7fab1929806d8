use std::error::Error;
use std::time::Instant;

use gridwalk_core::Point;
use gridwalk_map::{CharMap, Connectivity, MapGen, PathView, build_grid, render_path};
use gridwalk_search::{NodeIndex, Path, SearchKind, Searcher};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::{MapSource, RunConfig};

/// Outcome of one invocation: the map searched and one entry per search.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub map: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub side: usize,
    pub connectivity: Connectivity,
    pub start: NodeIndex,
    pub goal: NodeIndex,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_at: Option<Point>,
    pub searches: Vec<SearchReport>,
}

/// Result of a single search.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub kind: SearchKind,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Path>,
    pub discovered: usize,
    pub expanded: usize,
    /// Wall-clock time of the search alone, in microseconds.
    pub elapsed_us: u64,
    #[serde(skip)]
    pub view: Option<PathView>,
}

/// Obtain the map, build its graph and run every configured search.
pub fn run(config: &RunConfig) -> Result<RunReport, Box<dyn Error>> {
    let (map, label, seed) = obtain_map(config)?;

    if let Some(path) = &config.save_map {
        map.save(path, &config.map.alphabet)?;
        log::info!("map written to {}", path.display());
    }

    let graph = build_grid(&map, config.connectivity)?;
    let (start, goal) = endpoints(&map, config);

    let mut searches = Vec::with_capacity(config.kinds.len());
    for &kind in &config.kinds {
        let mut searcher = Searcher::with_capacity(kind, graph.len());

        let begin = Instant::now();
        let found = searcher.find_path(&graph, start, goal)?;
        let elapsed = begin.elapsed();

        let path = if found {
            Some(searcher.path(start, goal)?)
        } else {
            None
        };
        let view = path.as_ref().map(|p| render_path(&map, p));
        searches.push(SearchReport {
            kind,
            found,
            path,
            discovered: searcher.discovered(),
            expanded: searcher.expanded(),
            elapsed_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            view,
        });
    }

    Ok(RunReport {
        map: label,
        seed,
        side: map.side(),
        connectivity: config.connectivity,
        start,
        goal,
        start_at: map.point(start),
        goal_at: map.point(goal),
        searches,
    })
}

/// Read or generate the map. Returns the map, a label for reports and the
/// seed a random map was generated from.
fn obtain_map(config: &RunConfig) -> Result<(CharMap, String, Option<u64>), Box<dyn Error>> {
    match &config.source {
        MapSource::File(path) => {
            let map = CharMap::load(path, &config.map)?;
            Ok((map, path.display().to_string(), None))
        }
        &MapSource::Random {
            side,
            wall_pct,
            seed,
            carve,
        } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            let mut mg = MapGen::new(StdRng::seed_from_u64(seed));
            let mut map = mg.random_map(side, wall_pct)?;
            if carve {
                let carved = mg.carve_path(&mut map);
                log::debug!("carved {carved} walls");
            }
            Ok((map, format!("random {side}x{side}"), Some(seed)))
        }
    }
}

/// Pick the search endpoints: explicit indices first, then the map's
/// markers, then the first and last cells.
fn endpoints(map: &CharMap, config: &RunConfig) -> (NodeIndex, NodeIndex) {
    let start = config.start.or_else(|| map.start()).unwrap_or_else(|| {
        log::warn!("map has no start marker, starting from node 0");
        0
    });
    let goal = config.goal.or_else(|| map.goal()).unwrap_or_else(|| {
        let last = map.len().saturating_sub(1);
        log::warn!("map has no goal marker, searching for node {last}");
        last
    });
    (start, goal)
}
