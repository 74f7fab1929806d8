use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gridwalk_map::{Alphabet, Connectivity, DEFAULT_MAX_CELLS};
use gridwalk_search::SearchKind;

/// Map file read when none is given on the command line.
pub const DEFAULT_MAP_FILE: &str = "AssignmentNodes.txt";

/// gridwalk - breadth-first and depth-first path search over character maps
#[derive(Debug, Parser)]
#[command(name = "gridwalk", version, about, long_about = None)]
pub struct Cli {
    /// Map file of o (open), X (wall), S (start) and G (goal) markers.
    #[arg(value_name = "MAP", default_value = DEFAULT_MAP_FILE)]
    pub map: PathBuf,

    /// Which search to run.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Both)]
    pub algorithm: Algorithm,

    /// Grid edges: forward (right/down only) or cardinal (all four directions).
    #[arg(short, long, default_value_t = Connectivity::Forward)]
    pub connectivity: Connectivity,

    /// Number of cells in the map; must be a perfect square.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_CELLS, conflicts_with = "random")]
    pub max_cells: usize,

    /// Marker characters in open, wall, start, goal order.
    #[arg(long, value_name = "CHARS", default_value_t = Alphabet::default())]
    pub alphabet: Alphabet,

    /// Start node index; defaults to the map's start marker.
    #[arg(long, value_name = "INDEX")]
    pub start: Option<usize>,

    /// Goal node index; defaults to the map's goal marker.
    #[arg(long, value_name = "INDEX")]
    pub goal: Option<usize>,

    /// Generate a random SIDE x SIDE map instead of reading MAP.
    #[arg(long, value_name = "SIDE", value_parser = parse_side)]
    pub random: Option<usize>,

    /// Wall probability for --random, from 0.0 to 1.0 [default: 0.3].
    #[arg(long, value_name = "P", requires = "random")]
    pub wall_pct: Option<f64>,

    /// Seed for --random; a fresh seed is used when omitted.
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Dig a right/down corridor from start to goal so a --random map is solvable.
    #[arg(long, requires = "random")]
    pub carve: bool,

    /// Write the searched map to FILE.
    #[arg(long, value_name = "FILE")]
    pub save_map: Option<PathBuf>,

    /// Emit results as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Search selection on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Breadth-first only.
    Bfs,
    /// Depth-first only.
    Dfs,
    /// Breadth-first, then depth-first.
    Both,
}

impl Algorithm {
    /// The searches to run, in order.
    pub fn kinds(self) -> Vec<SearchKind> {
        match self {
            Algorithm::Bfs => vec![SearchKind::BreadthFirst],
            Algorithm::Dfs => vec![SearchKind::DepthFirst],
            Algorithm::Both => SearchKind::ALL.to_vec(),
        }
    }
}

/// Side length for `--random`; an empty grid has nothing to search.
fn parse_side(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("side must be at least 1".to_string()),
        Ok(side) => Ok(side),
        Err(e) => Err(e.to_string()),
    }
}
