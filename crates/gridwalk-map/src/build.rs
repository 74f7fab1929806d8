//! Grid construction: turn a [`CharMap`] into a search [`Graph`].

use std::fmt;
use std::str::FromStr;

use gridwalk_core::Point;
use gridwalk_search::{Graph, Node};
use thiserror::Error;

use crate::charmap::CharMap;
use crate::error::MapError;

/// Which neighbouring cells a grid node gets edges to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Connectivity {
    /// Right then down only. Edges are one-directional, so a search can
    /// never move left or up.
    #[default]
    Forward,
    /// Up, right, down and left, with every edge present in both directions.
    Cardinal,
}

impl Connectivity {
    /// Offsets to a cell's neighbours, in the order edges are inserted.
    fn offsets(self) -> &'static [Point] {
        static FORWARD: [Point; 2] = [Point::new(1, 0), Point::new(0, 1)];
        static CARDINAL: [Point; 4] = [
            Point::new(0, -1),
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(-1, 0),
        ];
        match self {
            Connectivity::Forward => &FORWARD,
            Connectivity::Cardinal => &CARDINAL,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connectivity::Forward => "forward",
            Connectivity::Cardinal => "cardinal",
        })
    }
}

/// Returned when a string names no known [`Connectivity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown connectivity `{0}` (expected forward or cardinal)")]
pub struct ParseConnectivityError(pub String);

impl FromStr for Connectivity {
    type Err = ParseConnectivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "forward" => Ok(Connectivity::Forward),
            "cardinal" => Ok(Connectivity::Cardinal),
            _ => Err(ParseConnectivityError(s.to_string())),
        }
    }
}

/// Build the search graph for `map`.
///
/// Node `i` stands for cell `i` and is positioned at that cell. Edges join
/// two passable cells that are neighbours under `connectivity`; walls get
/// no edges in or out.
pub fn build_grid(map: &CharMap, connectivity: Connectivity) -> Result<Graph, MapError> {
    let range = map.range();
    let nodes = range
        .iter()
        .map(|p| {
            let mut node = Node::new(p);
            if map.at(p).is_some_and(|c| c.is_passable()) {
                for &d in connectivity.offsets() {
                    let q = p + d;
                    let Some(qi) = range.index_of(q) else {
                        continue;
                    };
                    if map.at(q).is_some_and(|c| c.is_passable()) {
                        node.neighbours.push(qi);
                    }
                }
            }
            node
        })
        .collect();
    let graph = Graph::new(nodes)?;
    log::debug!(
        "built {} grid: {} nodes, {} edges",
        connectivity,
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}
