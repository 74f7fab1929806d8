use thiserror::Error;

use crate::graph::NodeIndex;

/// Errors reported by the traversal engine and path reconstruction.
///
/// Failing to find a path is not an error: [`Searcher::find_path`] returns
/// `Ok(false)` for that.
///
/// [`Searcher::find_path`]: crate::Searcher::find_path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("node index {index} is out of range for a graph of {len} nodes")]
    OutOfRange { index: NodeIndex, len: usize },

    #[error("node {node} lists neighbour {neighbour}, but the graph has only {len} nodes")]
    InvalidNeighbour {
        node: NodeIndex,
        neighbour: NodeIndex,
        len: usize,
    },

    #[error("node {index} was not reached from the start of the last search")]
    Unreached { index: NodeIndex },

    #[error("parent chain starting at node {from} does not lead back to the start")]
    ParentCycle { from: NodeIndex },

    #[error("a path must contain at least one node")]
    EmptyPath,
}
