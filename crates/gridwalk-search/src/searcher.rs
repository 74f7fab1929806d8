use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::SearchError;
use crate::graph::NodeIndex;
use crate::path::{Path, reconstruct};
use crate::traits::ParentLookup;

// ---------------------------------------------------------------------------
// SearchKind
// ---------------------------------------------------------------------------

/// Which frontier discipline a [`Searcher`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SearchKind {
    /// FIFO frontier; finds a path with the fewest edges.
    #[default]
    BreadthFirst,
    /// LIFO frontier; finds some path.
    DepthFirst,
}

impl SearchKind {
    /// Every kind, in the order the application runs them.
    pub const ALL: [SearchKind; 2] = [SearchKind::BreadthFirst, SearchKind::DepthFirst];

    /// Short label used in log and console lines.
    pub fn label(self) -> &'static str {
        match self {
            SearchKind::BreadthFirst => "BFS",
            SearchKind::DepthFirst => "DFS",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            SearchKind::BreadthFirst => "Breadth-first",
            SearchKind::DepthFirst => "Depth-first",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no known [`SearchKind`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown search algorithm `{0}` (expected bfs or dfs)")]
pub struct ParseSearchKindError(pub String);

impl FromStr for SearchKind {
    type Err = ParseSearchKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Ok(SearchKind::BreadthFirst),
            "dfs" | "depth" | "depth-first" => Ok(SearchKind::DepthFirst),
            _ => Err(ParseSearchKindError(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Per-node scratch
// ---------------------------------------------------------------------------

/// Scratch record for one node. The node counts as visited only when
/// `generation` matches the searcher's current generation.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Visit {
    pub(crate) generation: u32,
    pub(crate) parent: Option<NodeIndex>,
}

/// Endpoints and outcome of the most recent completed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LastSearch {
    pub(crate) start: NodeIndex,
    pub(crate) end: NodeIndex,
    pub(crate) found: bool,
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// The traversal engine.
///
/// A `Searcher` owns the per-search scratch state (visited flags, parent
/// pointers, both frontiers) and reuses it across calls, so repeated
/// searches allocate nothing once the buffers have grown to the graph's
/// size. The graph itself is borrowed per call and never mutated.
///
/// Two searchers never share scratch state; run concurrent searches over
/// one graph by giving each thread its own `Searcher`.
#[derive(Debug, Clone)]
pub struct Searcher {
    pub(crate) kind: SearchKind,
    pub(crate) visits: Vec<Visit>,
    pub(crate) len: usize,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<NodeIndex>,
    pub(crate) stack: Vec<NodeIndex>,
    pub(crate) discovered: usize,
    pub(crate) expanded: usize,
    pub(crate) last: Option<LastSearch>,
}

impl Searcher {
    /// Create a searcher using the given strategy.
    pub fn new(kind: SearchKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Create a searcher with scratch space preallocated for `len` nodes.
    pub fn with_capacity(kind: SearchKind, len: usize) -> Self {
        Self {
            kind,
            visits: vec![Visit::default(); len],
            len: 0,
            generation: 0,
            queue: VecDeque::with_capacity(len),
            stack: Vec::with_capacity(len),
            discovered: 0,
            expanded: 0,
            last: None,
        }
    }

    /// The strategy this searcher runs.
    #[inline]
    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// Switch strategy. Forgets the last search.
    pub fn set_kind(&mut self, kind: SearchKind) {
        self.kind = kind;
        self.reset();
    }

    /// Clear all scratch state eagerly.
    ///
    /// Never required before [`find_path`](Self::find_path), which
    /// invalidates the previous search on its own.
    pub fn reset(&mut self) {
        for v in self.visits.iter_mut() {
            *v = Visit::default();
        }
        self.generation = 0;
        self.len = 0;
        self.queue.clear();
        self.stack.clear();
        self.discovered = 0;
        self.expanded = 0;
        self.last = None;
    }

    /// Whether node `idx` was discovered by the last search.
    #[inline]
    pub fn visited(&self, idx: NodeIndex) -> bool {
        idx < self.len && self.generation != 0 && self.visits[idx].generation == self.generation
    }

    /// The node that discovered `idx` during the last search. `None` for the
    /// start node and for nodes the search never reached.
    #[inline]
    pub fn parent(&self, idx: NodeIndex) -> Option<NodeIndex> {
        if self.visited(idx) {
            self.visits[idx].parent
        } else {
            None
        }
    }

    /// Number of nodes discovered by the last search, the start included.
    #[inline]
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// Number of nodes taken off the frontier by the last search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Outcome of the last search for `start` → `end`, or `None` if the last
    /// search was for a different pair or no search has run.
    pub fn outcome(&self, start: NodeIndex, end: NodeIndex) -> Option<bool> {
        self.last
            .filter(|l| l.start == start && l.end == end)
            .map(|l| l.found)
    }

    /// Reconstruct the path from `start` to `end` left by the last search.
    ///
    /// `start` must be the start of the last search and `end` any node it
    /// discovered; otherwise [`SearchError::Unreached`] is returned.
    pub fn path(&self, start: NodeIndex, end: NodeIndex) -> Result<Path, SearchError> {
        match self.last {
            Some(l) if l.start == start => {}
            _ => return Err(SearchError::Unreached { index: start }),
        }
        if !self.visited(end) {
            return Err(SearchError::Unreached { index: end });
        }
        reconstruct(self, start, end)
    }

    /// Size the scratch buffers for a graph of `len` nodes and invalidate
    /// the previous search.
    pub(crate) fn prepare(&mut self, len: usize) {
        if self.visits.len() < len {
            self.visits.resize(len, Visit::default());
        }
        self.len = len;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale records could now look current.
            for v in self.visits.iter_mut() {
                *v = Visit::default();
            }
            self.generation = 1;
        }
        self.discovered = 0;
        self.expanded = 0;
        self.last = None;
    }

    /// Mark `idx` discovered from `parent`.
    #[inline]
    pub(crate) fn discover(&mut self, idx: NodeIndex, parent: Option<NodeIndex>) {
        self.visits[idx] = Visit {
            generation: self.generation,
            parent,
        };
        self.discovered += 1;
    }
}

impl ParentLookup for Searcher {
    fn node_count(&self) -> usize {
        self.len
    }

    fn parent_of(&self, idx: NodeIndex) -> Option<NodeIndex> {
        self.parent(idx)
    }
}
