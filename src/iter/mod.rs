//! Traversals over a [`Tree`] that tolerate removing the node just yielded.
//!
//! Every order is a [`Strategy`]: a pending-work structure that knows how to produce
//! the next node and how to undo the bookkeeping of its last step. Two drivers share
//! the strategies:
//!
//! - [`TreeIter`] borrows the tree mutably and implements the `has_next` / `next` /
//!   `remove` contract. `remove()` is only valid in the window right after a `next()`.
//! - [`Walk`] borrows the tree immutably and yields `(NodeId, &T)` pairs.
//!
//! ```
//! use ordtree::{IterationOrder, Tree};
//!
//! let mut tree = Tree::new();
//! let a = tree.insert("a");
//! let b = tree.insert("b");
//! let c = tree.insert("c");
//! let d = tree.insert("d");
//! tree.add_child(a, b);
//! tree.add_child(b, c);
//! tree.add_child(a, d);
//!
//! let mut iter = tree.iter_mut(a, IterationOrder::PreOrder).unwrap();
//! let mut seen = Vec::new();
//! while iter.has_next() {
//!     let node = iter.try_next().unwrap();
//!     seen.push(*iter.data(node).unwrap());
//!     if node == b {
//!         iter.remove().unwrap();
//!     }
//! }
//! assert_eq!(seen, ["a", "b", "d"]);
//! assert_eq!(tree.children(a), vec![d]);
//! assert_eq!(tree.children(b), vec![c]);
//! ```

mod breadth_first;
mod post_order;
mod pre_order;

pub use breadth_first::BreadthFirst;
pub use post_order::PostOrder;
pub use pre_order::PreOrder;

use std::iter::FusedIterator;
use tracing::{debug, instrument};

use crate::arena::{NodeId, Tree};
use crate::errors::{TreeError, TreeResult};
use crate::order::IterationOrder;

/// Pending-work structure of one traversal order.
pub trait Strategy: Sized {
    /// Starts a traversal at `root`.
    fn seed(root: NodeId) -> Self;

    fn order(&self) -> IterationOrder;

    fn has_pending(&self) -> bool;

    /// Produces the next node, or `None` once nothing is pending.
    fn advance<T>(&mut self, tree: &Tree<T>) -> Option<NodeId>;

    /// Drops the descendants of `node`, the node returned by the last `advance`, from
    /// the pending work.
    ///
    /// Called while `node` is still linked to its parent, before the tree is mutated.
    fn forget<T>(&mut self, tree: &Tree<T>, node: NodeId);
}

/// Any of the three orders, chosen at runtime.
#[derive(Debug, Clone)]
pub enum Traversal {
    BreadthFirst(BreadthFirst),
    PreOrder(PreOrder),
    PostOrder(PostOrder),
}

impl Traversal {
    pub fn new(root: NodeId, order: IterationOrder) -> Self {
        match order {
            IterationOrder::BreadthFirst => Traversal::BreadthFirst(BreadthFirst::seed(root)),
            IterationOrder::PreOrder => Traversal::PreOrder(PreOrder::seed(root)),
            IterationOrder::PostOrder => Traversal::PostOrder(PostOrder::seed(root)),
        }
    }
}

impl Strategy for Traversal {
    fn seed(root: NodeId) -> Self {
        Traversal::new(root, IterationOrder::default())
    }

    fn order(&self) -> IterationOrder {
        match self {
            Traversal::BreadthFirst(s) => s.order(),
            Traversal::PreOrder(s) => s.order(),
            Traversal::PostOrder(s) => s.order(),
        }
    }

    fn has_pending(&self) -> bool {
        match self {
            Traversal::BreadthFirst(s) => s.has_pending(),
            Traversal::PreOrder(s) => s.has_pending(),
            Traversal::PostOrder(s) => s.has_pending(),
        }
    }

    fn advance<T>(&mut self, tree: &Tree<T>) -> Option<NodeId> {
        match self {
            Traversal::BreadthFirst(s) => s.advance(tree),
            Traversal::PreOrder(s) => s.advance(tree),
            Traversal::PostOrder(s) => s.advance(tree),
        }
    }

    fn forget<T>(&mut self, tree: &Tree<T>, node: NodeId) {
        match self {
            Traversal::BreadthFirst(s) => s.forget(tree, node),
            Traversal::PreOrder(s) => s.forget(tree, node),
            Traversal::PostOrder(s) => s.forget(tree, node),
        }
    }
}

/// Removal-capable traversal.
///
/// Holds the tree mutably for its whole lifetime, which makes it the only mutator
/// while the traversal runs. Use [`TreeIter::tree`] and [`TreeIter::data`] to look at
/// nodes in between steps.
pub struct TreeIter<'a, T, S = Traversal> {
    tree: &'a mut Tree<T>,
    root: NodeId,
    strategy: S,
    current: Option<NodeId>,
}

/// Breadth-first removal-capable traversal.
pub type BreadthFirstIter<'a, T> = TreeIter<'a, T, BreadthFirst>;
/// Pre-order removal-capable traversal.
pub type PreOrderIter<'a, T> = TreeIter<'a, T, PreOrder>;
/// Post-order removal-capable traversal.
pub type PostOrderIter<'a, T> = TreeIter<'a, T, PostOrder>;

impl<'a, T, S: Strategy> TreeIter<'a, T, S> {
    /// Seeds the strategy with `root`. Fails with [`TreeError::InvalidRoot`] when the
    /// root is not in the tree.
    pub fn new(tree: &'a mut Tree<T>, root: NodeId) -> TreeResult<Self> {
        Self::with_strategy(tree, root, S::seed(root))
    }

    pub(crate) fn with_strategy(tree: &'a mut Tree<T>, root: NodeId, strategy: S) -> TreeResult<Self> {
        if !tree.contains(root) {
            return Err(TreeError::InvalidRoot(root));
        }
        Ok(Self {
            tree,
            root,
            strategy,
            current: None,
        })
    }

    pub fn has_next(&self) -> bool {
        self.strategy.has_pending()
    }

    /// Advances the traversal. Fails with [`TreeError::Exhausted`] when nothing is
    /// left.
    pub fn try_next(&mut self) -> TreeResult<NodeId> {
        if !self.strategy.has_pending() {
            return Err(TreeError::Exhausted);
        }
        let node = self
            .strategy
            .advance(&*self.tree)
            .ok_or(TreeError::Exhausted)?;
        self.current = Some(node);
        Ok(node)
    }

    /// Cuts the node returned by the last `next` out of the tree and out of the
    /// remaining traversal.
    ///
    /// The node keeps its own children; only the link to its parent is severed. A
    /// node without a parent is only dropped from the traversal. Fails with
    /// [`TreeError::IllegalRemove`] unless called exactly once after a `next`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove(&mut self) -> TreeResult<()> {
        let current = self.current.take().ok_or(TreeError::IllegalRemove)?;
        self.strategy.forget(&*self.tree, current);
        match self.tree.detach(current) {
            Some((parent, position)) => {
                debug!(node = %current, parent = %parent, position, "removed subtree during iteration")
            }
            None => debug!(node = %current, "removed parentless node from iteration"),
        }
        Ok(())
    }

    pub fn tree(&self) -> &Tree<T> {
        &*self.tree
    }

    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.tree.data(id)
    }

    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.tree.data_mut(id)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn order(&self) -> IterationOrder {
        self.strategy.order()
    }
}

impl<T, S: Strategy> Iterator for TreeIter<'_, T, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }
}

impl<T, S: Strategy> FusedIterator for TreeIter<'_, T, S> {}

/// Read-only traversal yielding `(NodeId, &T)`.
pub struct Walk<'a, T, S = Traversal> {
    tree: &'a Tree<T>,
    strategy: S,
}

impl<'a, T, S: Strategy> Walk<'a, T, S> {
    pub fn new(tree: &'a Tree<T>, root: NodeId) -> TreeResult<Self> {
        Self::with_strategy(tree, root, S::seed(root))
    }

    pub(crate) fn with_strategy(tree: &'a Tree<T>, root: NodeId, strategy: S) -> TreeResult<Self> {
        if !tree.contains(root) {
            return Err(TreeError::InvalidRoot(root));
        }
        Ok(Self { tree, strategy })
    }

    pub fn order(&self) -> IterationOrder {
        self.strategy.order()
    }
}

impl<'a, T, S: Strategy> Iterator for Walk<'a, T, S> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.strategy.advance(self.tree)?;
        self.tree.data(node).map(|data| (node, data))
    }
}

impl<T, S: Strategy> FusedIterator for Walk<'_, T, S> {}
