use crate::graph::NodeIndex;

/// Read-only adjacency: the only view of a graph the engine needs.
///
/// Nodes are identified by dense indices in `0..len()`. The order of the
/// slice returned by [`neighbours`](Adjacency::neighbours) is the order in
/// which a search discovers them.
pub trait Adjacency {
    /// Number of nodes.
    fn len(&self) -> usize;

    /// Whether the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nodes reachable from `idx` over one edge. `idx` is always `< len()`.
    fn neighbours(&self, idx: NodeIndex) -> &[NodeIndex];
}

/// Plain adjacency lists, one entry per node.
impl Adjacency for [Vec<NodeIndex>] {
    fn len(&self) -> usize {
        <[Vec<NodeIndex>]>::len(self)
    }

    fn neighbours(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self[idx]
    }
}

impl Adjacency for Vec<Vec<NodeIndex>> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn neighbours(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self[idx]
    }
}

/// Source of parent pointers for path reconstruction.
pub trait ParentLookup {
    /// Number of nodes the lookup covers.
    fn node_count(&self) -> usize;

    /// The node that discovered `idx`, or `None` if `idx` is a search root
    /// or was never reached.
    fn parent_of(&self, idx: NodeIndex) -> Option<NodeIndex>;
}

impl ParentLookup for [Option<NodeIndex>] {
    fn node_count(&self) -> usize {
        self.len()
    }

    fn parent_of(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.get(idx).copied().flatten()
    }
}
