use super::Strategy;
use crate::arena::{NodeId, Tree};
use crate::order::IterationOrder;

/// What the traversal knows about the node it yielded last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookback {
    Visited(NodeId),
    /// The last yielded node was cut out; its younger sibling now sits at this index.
    Removed { former_index: usize },
}

/// Children-before-parent traversal.
///
/// The stack holds the ancestors whose subtrees are still being walked, deepest on
/// top. A leaf is yielded without ever being pushed. Which child to descend into next
/// is derived from the last yielded node, so the stack never holds stale siblings and
/// removal needs no cleanup beyond remembering where the removed node was.
#[derive(Debug, Clone)]
pub struct PostOrder {
    stack: Vec<NodeId>,
    last: Option<Lookback>,
}

impl PostOrder {
    fn resume_index(&self, siblings: &[NodeId]) -> usize {
        match self.last {
            None => 0,
            Some(Lookback::Visited(prev)) => siblings
                .iter()
                .position(|&sibling| sibling == prev)
                .map_or(siblings.len(), |index| index + 1),
            Some(Lookback::Removed { former_index }) => former_index,
        }
    }
}

impl Strategy for PostOrder {
    fn seed(root: NodeId) -> Self {
        Self {
            stack: vec![root],
            last: None,
        }
    }

    fn order(&self) -> IterationOrder {
        IterationOrder::PostOrder
    }

    fn has_pending(&self) -> bool {
        !self.stack.is_empty()
    }

    fn advance<T>(&mut self, tree: &Tree<T>) -> Option<NodeId> {
        let top = *self.stack.last()?;
        let children = tree.child_slice(top);

        let next = match children.get(self.resume_index(children)) {
            None => {
                // all children done
                self.stack.pop();
                top
            }
            Some(&start) => {
                let mut node = start;
                while let Some(&first) = tree.child_slice(node).first() {
                    self.stack.push(node);
                    node = first;
                }
                node
            }
        };

        self.last = Some(Lookback::Visited(next));
        Some(next)
    }

    fn forget<T>(&mut self, tree: &Tree<T>, node: NodeId) {
        // The subtree of `node` was yielded before `node` itself.
        self.last = tree.parent(node).and_then(|parent| {
            tree.child_slice(parent)
                .iter()
                .position(|&sibling| sibling == node)
                .map(|former_index| Lookback::Removed { former_index })
        });
    }
}
