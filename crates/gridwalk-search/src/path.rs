use std::fmt;

use crate::error::SearchError;
use crate::graph::NodeIndex;
use crate::traits::ParentLookup;

/// An ordered, non-empty sequence of nodes from a search's start to its goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<NodeIndex>", into = "Vec<NodeIndex>"))]
pub struct Path(Vec<NodeIndex>);

impl Path {
    /// First node.
    #[inline]
    pub fn start(&self) -> NodeIndex {
        self.0[0]
    }

    /// Last node.
    #[inline]
    pub fn end(&self) -> NodeIndex {
        self.0[self.0.len() - 1]
    }

    /// All nodes, start first.
    #[inline]
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.0
    }

    /// Number of nodes, endpoints included. Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of edges walked.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Whether `idx` lies on the path.
    pub fn contains(&self, idx: NodeIndex) -> bool {
        self.0.contains(&idx)
    }

    /// Iterate over the nodes, start first.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeIndex> {
        self.0.iter()
    }

    /// Give the node list back.
    pub fn into_vec(self) -> Vec<NodeIndex> {
        self.0
    }
}

impl TryFrom<Vec<NodeIndex>> for Path {
    type Error = SearchError;

    fn try_from(nodes: Vec<NodeIndex>) -> Result<Self, Self::Error> {
        if nodes.is_empty() {
            return Err(SearchError::EmptyPath);
        }
        Ok(Self(nodes))
    }
}

impl From<Path> for Vec<NodeIndex> {
    fn from(path: Path) -> Self {
        path.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeIndex;
    type IntoIter = std::slice::Iter<'a, NodeIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Path {
    type Item = NodeIndex;
    type IntoIter = std::vec::IntoIter<NodeIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, idx) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{idx}")?;
        }
        Ok(())
    }
}

/// Walk parent pointers from `end` back to `start` and return the path in
/// start-to-end order.
///
/// Reads nothing but the parent pointers, so it works for any search that
/// records them. `start == end` yields `[start]` without walking.
pub fn reconstruct<P: ParentLookup + ?Sized>(
    parents: &P,
    start: NodeIndex,
    end: NodeIndex,
) -> Result<Path, SearchError> {
    let len = parents.node_count();
    for index in [start, end] {
        if index >= len {
            return Err(SearchError::OutOfRange { index, len });
        }
    }

    let mut nodes = vec![end];
    let mut current = end;
    while current != start {
        // A simple path has at most `len` nodes.
        if nodes.len() > len {
            return Err(SearchError::ParentCycle { from: end });
        }
        let Some(parent) = parents.parent_of(current) else {
            return Err(SearchError::Unreached { index: current });
        };
        nodes.push(parent);
        current = parent;
    }
    nodes.reverse();
    Ok(Path(nodes))
}
