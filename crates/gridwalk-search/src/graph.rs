use gridwalk_core::Point;

use crate::error::SearchError;
use crate::traits::Adjacency;

/// Dense node identifier: the node's position in [`Graph::nodes`].
pub type NodeIndex = usize;

/// One graph vertex.
///
/// `pos` is informational (the grid cell the node stands for) and is never
/// consulted by the traversal itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub neighbours: Vec<NodeIndex>,
}

impl Node {
    /// A node at `pos` with no outgoing edges.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            neighbours: Vec::new(),
        }
    }

    /// A node at `pos` with the given outgoing edges.
    pub fn with_neighbours(pos: Point, neighbours: Vec<NodeIndex>) -> Self {
        Self { pos, neighbours }
    }
}

/// An immutable collection of nodes whose edges all point inside it.
///
/// Built once from a fully-formed node list; a search only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Take ownership of `nodes`, checking that every neighbour index is
    /// valid. Self-loops are allowed.
    pub fn new(nodes: Vec<Node>) -> Result<Self, SearchError> {
        let len = nodes.len();
        for (i, node) in nodes.iter().enumerate() {
            if let Some(&bad) = node.neighbours.iter().find(|&&n| n >= len) {
                return Err(SearchError::InvalidNeighbour {
                    node: i,
                    neighbour: bad,
                    len,
                });
            }
        }
        Ok(Self { nodes })
    }

    /// Build a graph from bare adjacency lists. Every node is placed at the
    /// origin.
    pub fn from_adjacency(lists: Vec<Vec<NodeIndex>>) -> Result<Self, SearchError> {
        Self::new(
            lists
                .into_iter()
                .map(|neighbours| Node::with_neighbours(Point::ZERO, neighbours))
                .collect(),
        )
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node at `idx`, if any.
    #[inline]
    pub fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(idx)
    }

    /// All nodes, indexed by [`NodeIndex`].
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.neighbours.len()).sum()
    }

    /// Give the nodes back.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl Adjacency for Graph {
    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn neighbours(&self, idx: NodeIndex) -> &[NodeIndex] {
        &self.nodes[idx].neighbours
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Graph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.nodes.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Graph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let nodes = Vec::<Node>::deserialize(deserializer)?;
        Graph::new(nodes).map_err(serde::de::Error::custom)
    }
}
