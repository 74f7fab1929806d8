//! Unweighted path search over adjacency graphs.
//!
//! This crate provides the traversal engine used by `gridwalk`:
//!
//! - **Breadth-first** search, which finds a path with the fewest edges
//! - **Depth-first** search, which finds *some* path if one exists
//! - **Path reconstruction** from the parent pointers a search leaves behind
//!
//! Both strategies run through one traversal routine on [`Searcher`],
//! differing only in the [`Frontier`] that holds discovered nodes. A node is
//! marked visited the moment it is discovered, never when it is expanded, so
//! every node enters the frontier at most once.
//!
//! The topology ([`Graph`], or anything implementing [`Adjacency`]) is never
//! mutated by a search. Visited flags and parent pointers live in the
//! `Searcher` and are invalidated lazily at the start of each search, so
//! repeated searches need no explicit reset.
//!
//! ```
//! use gridwalk_search::{Graph, SearchKind, Searcher};
//!
//! let graph = Graph::from_adjacency(vec![vec![1, 2], vec![3], vec![3], vec![]]).unwrap();
//! let mut searcher = Searcher::new(SearchKind::BreadthFirst);
//! let path = searcher.search(&graph, 0, 3).unwrap().unwrap();
//! assert_eq!(path.nodes(), &[0, 1, 3]);
//! ```

mod error;
mod frontier;
mod graph;
mod path;
mod searcher;
mod traits;
mod traverse;

pub use error::SearchError;
pub use frontier::Frontier;
pub use graph::{Graph, Node, NodeIndex};
pub use path::{Path, reconstruct};
pub use searcher::{ParseSearchKindError, SearchKind, Searcher};
pub use traits::{Adjacency, ParentLookup};
