use super::Strategy;
use crate::arena::{NodeId, Tree};
use crate::order::IterationOrder;

/// Parent-before-children traversal backed by a LIFO stack.
///
/// Children are pushed in reverse so the leftmost one is popped first.
#[derive(Debug, Clone)]
pub struct PreOrder {
    stack: Vec<NodeId>,
    last_pushed: usize,
}

impl Strategy for PreOrder {
    fn seed(root: NodeId) -> Self {
        Self {
            stack: vec![root],
            last_pushed: 0,
        }
    }

    fn order(&self) -> IterationOrder {
        IterationOrder::PreOrder
    }

    fn has_pending(&self) -> bool {
        !self.stack.is_empty()
    }

    fn advance<T>(&mut self, tree: &Tree<T>) -> Option<NodeId> {
        let next = self.stack.pop()?;
        let children = tree.child_slice(next);
        self.stack.extend(children.iter().rev().copied());
        self.last_pushed = children.len();
        Some(next)
    }

    fn forget<T>(&mut self, _tree: &Tree<T>, _node: NodeId) {
        let keep = self.stack.len().saturating_sub(self.last_pushed);
        self.stack.truncate(keep);
        self.last_pushed = 0;
    }
}
