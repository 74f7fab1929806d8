use std::collections::VecDeque;

use crate::graph::NodeIndex;

/// Working set of discovered-but-not-yet-expanded nodes.
///
/// The frontier's discipline is the only thing separating breadth-first
/// from depth-first search: a FIFO [`VecDeque`] expands nodes in order of
/// distance from the start, a LIFO [`Vec`] expands the newest node first.
pub trait Frontier {
    /// Add a freshly discovered node.
    fn push(&mut self, idx: NodeIndex);

    /// Remove and return the next node to expand.
    fn pop_next(&mut self) -> Option<NodeIndex>;

    /// Whether no nodes are waiting.
    fn is_empty(&self) -> bool;

    /// Drop every waiting node.
    fn clear(&mut self);
}

/// FIFO queue.
impl Frontier for VecDeque<NodeIndex> {
    #[inline]
    fn push(&mut self, idx: NodeIndex) {
        self.push_back(idx);
    }

    #[inline]
    fn pop_next(&mut self) -> Option<NodeIndex> {
        self.pop_front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    #[inline]
    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

/// LIFO stack.
impl Frontier for Vec<NodeIndex> {
    #[inline]
    fn push(&mut self, idx: NodeIndex) {
        Vec::push(self, idx);
    }

    #[inline]
    fn pop_next(&mut self) -> Option<NodeIndex> {
        self.pop()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }
}
