use std::collections::VecDeque;

use super::Strategy;
use crate::arena::{NodeId, Tree};
use crate::order::IterationOrder;

/// Level-by-level traversal backed by a FIFO queue.
///
/// ```text
///   A
///   |--B
///   |  |--D
///   |  \--E
///   \--C
///      |--F
///      \--G
/// ```
/// yields `A B C D E F G`.
#[derive(Debug, Clone)]
pub struct BreadthFirst {
    queue: VecDeque<NodeId>,
    // children appended to the back by the last `advance`
    last_enqueued: usize,
}

impl Strategy for BreadthFirst {
    fn seed(root: NodeId) -> Self {
        Self {
            queue: VecDeque::from([root]),
            last_enqueued: 0,
        }
    }

    fn order(&self) -> IterationOrder {
        IterationOrder::BreadthFirst
    }

    fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    fn advance<T>(&mut self, tree: &Tree<T>) -> Option<NodeId> {
        let next = self.queue.pop_front()?;
        let children = tree.child_slice(next);
        self.queue.extend(children.iter().copied());
        self.last_enqueued = children.len();
        Some(next)
    }

    fn forget<T>(&mut self, _tree: &Tree<T>, _node: NodeId) {
        // With no `advance` in between, the newest tail entries are exactly the
        // children of the removed node.
        let keep = self.queue.len().saturating_sub(self.last_enqueued);
        self.queue.truncate(keep);
        self.last_enqueued = 0;
    }
}
