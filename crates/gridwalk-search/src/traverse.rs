use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::graph::NodeIndex;
use crate::path::Path;
use crate::searcher::{LastSearch, SearchKind, Searcher};
use crate::traits::Adjacency;

impl Searcher {
    /// Search `graph` for a path from `start` to `end` using this searcher's
    /// [`SearchKind`].
    ///
    /// Returns `Ok(true)` if `end` was reached; the path is then available
    /// from [`path`](Self::path). `Ok(false)` means every node reachable from
    /// `start` was discovered without meeting `end`.
    pub fn find_path<A: Adjacency + ?Sized>(
        &mut self,
        graph: &A,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<bool, SearchError> {
        let found = match self.kind {
            SearchKind::BreadthFirst => {
                let mut queue = std::mem::take(&mut self.queue);
                let found = self.traverse_with(graph, &mut queue, start, end);
                self.queue = queue;
                found
            }
            SearchKind::DepthFirst => {
                let mut stack = std::mem::take(&mut self.stack);
                let found = self.traverse_with(graph, &mut stack, start, end);
                self.stack = stack;
                found
            }
        }?;

        if found {
            log::info!("{}: goal found at node {}", self.kind, end);
        } else {
            log::info!("{}: goal not found", self.kind);
        }
        log::debug!(
            "{} {} -> {}: {} discovered, {} expanded",
            self.kind,
            start,
            end,
            self.discovered,
            self.expanded
        );
        Ok(found)
    }

    /// Run [`find_path`](Self::find_path) and reconstruct the path on success.
    pub fn search<A: Adjacency + ?Sized>(
        &mut self,
        graph: &A,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<Option<Path>, SearchError> {
        if self.find_path(graph, start, end)? {
            self.path(start, end).map(Some)
        } else {
            Ok(None)
        }
    }

    /// The traversal shared by every strategy, parameterised by frontier.
    ///
    /// Nodes are marked visited, and given their parent, when first pushed
    /// onto `frontier`; the goal test happens when a node is popped. Any
    /// frontier works here, which is how [`find_path`](Self::find_path)
    /// gets both breadth-first and depth-first behaviour.
    pub fn traverse_with<A, F>(
        &mut self,
        graph: &A,
        frontier: &mut F,
        start: NodeIndex,
        end: NodeIndex,
    ) -> Result<bool, SearchError>
    where
        A: Adjacency + ?Sized,
        F: Frontier,
    {
        let len = graph.len();
        for index in [start, end] {
            if index >= len {
                return Err(SearchError::OutOfRange { index, len });
            }
        }

        self.prepare(len);
        frontier.clear();

        self.discover(start, None);
        frontier.push(start);

        let found = 'search: loop {
            let Some(current) = frontier.pop_next() else {
                break 'search false;
            };
            self.expanded += 1;

            if current == end {
                break 'search true;
            }

            for &next in graph.neighbours(current) {
                if next >= len {
                    frontier.clear();
                    return Err(SearchError::InvalidNeighbour {
                        node: current,
                        neighbour: next,
                        len,
                    });
                }
                if !self.visited(next) {
                    self.discover(next, Some(current));
                    frontier.push(next);
                }
            }
        };

        frontier.clear();
        self.last = Some(LastSearch { start, end, found });
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::path::reconstruct;

    /// Row-major `side` × `side` grid. Forward grids only have right/down
    /// edges; cardinal grids connect all four directions.
    fn grid(side: usize, cardinal: bool) -> Vec<Vec<NodeIndex>> {
        let mut adj = vec![Vec::new(); side * side];
        for y in 0..side {
            for x in 0..side {
                let i = y * side + x;
                if cardinal && y > 0 {
                    adj[i].push(i - side);
                }
                if x + 1 < side {
                    adj[i].push(i + 1);
                }
                if y + 1 < side {
                    adj[i].push(i + side);
                }
                if cardinal && x > 0 {
                    adj[i].push(i - 1);
                }
            }
        }
        adj
    }

    fn square() -> Graph {
        // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
        Graph::from_adjacency(vec![vec![1, 2], vec![3], vec![3], vec![]]).unwrap()
    }

    #[test]
    fn bfs_on_square_prefers_first_listed_edge() {
        let mut s = Searcher::new(SearchKind::BreadthFirst);
        let path = s.search(&square(), 0, 3).unwrap().unwrap();
        assert_eq!(path.nodes(), &[0, 1, 3]);
    }

    #[test]
    fn dfs_on_square_follows_newest_branch() {
        let mut s = Searcher::new(SearchKind::DepthFirst);
        let path = s.search(&square(), 0, 3).unwrap().unwrap();
        assert_eq!(path.nodes(), &[0, 2, 3]);
        assert!(path.edge_count() >= 2);
    }

    #[test]
    fn isolated_goal_is_not_found() {
        let g = Graph::from_adjacency(vec![vec![1], vec![0], vec![]]).unwrap();
        for kind in SearchKind::ALL {
            let mut s = Searcher::new(kind);
            assert_eq!(s.find_path(&g, 0, 2), Ok(false));
            assert_eq!(s.outcome(0, 2), Some(false));
            // Everything reachable was discovered.
            assert!(s.visited(0) && s.visited(1));
            assert_eq!(s.parent(1), Some(0));
            assert!(!s.visited(2));
            assert!(s.search(&g, 0, 2).unwrap().is_none());
        }
    }

    #[test]
    fn start_is_goal() {
        let g = square();
        for kind in SearchKind::ALL {
            let mut s = Searcher::new(kind);
            let path = s.search(&g, 2, 2).unwrap().unwrap();
            assert_eq!(path.nodes(), &[2]);
            assert_eq!(s.expanded(), 1);
            assert_eq!(s.parent(2), None);
        }
    }

    #[test]
    fn out_of_range_endpoints_are_errors() {
        let g = square();
        let mut s = Searcher::new(SearchKind::BreadthFirst);
        assert_eq!(
            s.find_path(&g, 4, 0),
            Err(SearchError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            s.find_path(&g, 0, 99),
            Err(SearchError::OutOfRange { index: 99, len: 4 })
        );
    }

    #[test]
    fn empty_graph_rejects_any_index() {
        let g: Vec<Vec<NodeIndex>> = Vec::new();
        let mut s = Searcher::new(SearchKind::DepthFirst);
        assert_eq!(
            s.find_path(&g, 0, 0),
            Err(SearchError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn dangling_edge_in_raw_adjacency_is_reported() {
        let g: Vec<Vec<NodeIndex>> = vec![vec![1], vec![7]];
        let mut s = Searcher::new(SearchKind::BreadthFirst);
        assert_eq!(
            s.find_path(&g, 0, 0),
            Ok(true),
            "goal reached before the bad edge is read"
        );
        assert_eq!(
            s.find_path(&g, 0, 1),
            Ok(true),
            "goal popped before its edges are read"
        );
        let g: Vec<Vec<NodeIndex>> = vec![vec![1], vec![7], vec![]];
        assert_eq!(
            s.find_path(&g, 0, 2),
            Err(SearchError::InvalidNeighbour {
                node: 1,
                neighbour: 7,
                len: 3
            })
        );
        assert!(s.path(0, 2).is_err());
    }

    #[test]
    fn self_loops_are_harmless() {
        let g = Graph::from_adjacency(vec![vec![0, 1], vec![1, 2], vec![2]]).unwrap();
        for kind in SearchKind::ALL {
            let mut s = Searcher::new(kind);
            let path = s.search(&g, 0, 2).unwrap().unwrap();
            assert_eq!(path.nodes(), &[0, 1, 2]);
        }
    }

    #[test]
    fn start_is_never_rediscovered() {
        // 1 points back at the start; the start must keep no parent.
        let g = Graph::from_adjacency(vec![vec![1], vec![0, 2], vec![]]).unwrap();
        let mut s = Searcher::new(SearchKind::BreadthFirst);
        assert_eq!(s.find_path(&g, 0, 2), Ok(true));
        assert_eq!(s.parent(0), None);
        assert_eq!(s.discovered(), 3);
    }

    #[test]
    fn each_node_discovered_once() {
        let g = grid(6, true);
        for kind in SearchKind::ALL {
            let mut s = Searcher::new(kind);
            assert_eq!(s.find_path(&g, 0, 35), Ok(true));
            assert!(s.discovered() <= 36);
            assert!(s.expanded() <= s.discovered());
        }
    }

    #[test]
    fn reachable_pairs_succeed_with_exact_endpoints() {
        let g = grid(4, false);
        for kind in SearchKind::ALL {
            let mut s = Searcher::new(kind);
            for start in 0..16 {
                for end in 0..16 {
                    let (sx, sy) = (start % 4, start / 4);
                    let (ex, ey) = (end % 4, end / 4);
                    let reachable = ex >= sx && ey >= sy;
                    let path = s.search(&g, start, end).unwrap();
                    assert_eq!(path.is_some(), reachable, "{kind} {start}->{end}");
                    if let Some(path) = path {
                        assert_eq!(path.start(), start);
                        assert_eq!(path.end(), end);
                        for step in path.nodes().windows(2) {
                            assert!(
                                g.neighbours(step[0]).contains(&step[1]),
                                "{kind} {start}->{end}: {} -> {} is not an edge",
                                step[0],
                                step[1]
                            );
                        }
                        // Forward grids have a unique path length.
                        assert_eq!(path.edge_count(), (ex - sx) + (ey - sy));
                    }
                }
            }
        }
    }

    #[test]
    fn bfs_never_longer_than_dfs() {
        for side in [3, 5, 8] {
            let g = grid(side, true);
            let n = side * side;
            let mut bfs = Searcher::new(SearchKind::BreadthFirst);
            let mut dfs = Searcher::new(SearchKind::DepthFirst);
            for start in (0..n).step_by(3) {
                for end in (0..n).step_by(2) {
                    let b = bfs.search(&g, start, end).unwrap().unwrap();
                    let d = dfs.search(&g, start, end).unwrap().unwrap();
                    assert!(b.edge_count() <= d.edge_count());
                    // Manhattan distance is optimal on an open 4-way grid.
                    let manhattan = (start % side).abs_diff(end % side)
                        + (start / side).abs_diff(end / side);
                    assert_eq!(b.edge_count(), manhattan);
                }
            }
        }
    }

    #[test]
    fn parent_chain_length_matches_position() {
        let g = grid(5, true);
        let mut s = Searcher::new(SearchKind::DepthFirst);
        let path = s.search(&g, 6, 23).unwrap().unwrap();
        for (pos, &idx) in path.iter().enumerate() {
            let mut steps = 0;
            let mut cur = idx;
            while let Some(p) = s.parent(cur) {
                cur = p;
                steps += 1;
            }
            assert_eq!(cur, 6);
            assert_eq!(steps, pos);
        }
    }

    #[test]
    fn repeated_searches_are_idempotent() {
        let g = grid(7, true);
        for kind in SearchKind::ALL {
            let mut s = Searcher::new(kind);
            let first = s.search(&g, 3, 45).unwrap();
            let discovered = s.discovered();
            let second = s.search(&g, 3, 45).unwrap();
            assert_eq!(first, second);
            assert_eq!(discovered, s.discovered());

            s.reset();
            assert!(!s.visited(3));
            assert_eq!(s.search(&g, 3, 45).unwrap(), first);
        }
    }

    #[test]
    fn path_requires_matching_start() {
        let g = square();
        let mut s = Searcher::new(SearchKind::BreadthFirst);
        assert!(s.find_path(&g, 0, 3).unwrap());
        assert_eq!(s.path(1, 3), Err(SearchError::Unreached { index: 1 }));
        // Any node discovered from the same start can be reconstructed.
        assert_eq!(s.path(0, 2).unwrap().nodes(), &[0, 2]);
        assert_eq!(reconstruct(&s, 0, 1).unwrap().nodes(), &[0, 1]);
    }

    #[test]
    fn custom_frontier_plugs_into_traversal() {
        // A frontier that always expands the smallest index first.
        #[derive(Default)]
        struct Smallest(std::collections::BTreeSet<NodeIndex>);

        impl Frontier for Smallest {
            fn push(&mut self, idx: NodeIndex) {
                self.0.insert(idx);
            }
            fn pop_next(&mut self) -> Option<NodeIndex> {
                self.0.pop_first()
            }
            fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
            fn clear(&mut self) {
                self.0.clear();
            }
        }

        let g = square();
        let mut s = Searcher::new(SearchKind::BreadthFirst);
        let mut frontier = Smallest::default();
        assert_eq!(s.traverse_with(&g, &mut frontier, 0, 3), Ok(true));
        assert_eq!(s.path(0, 3).unwrap().nodes(), &[0, 1, 3]);
    }
}
