//! Local and full-subtree equality and hashing.
//!
//! Nodes live in an arena, so comparisons take the handles to compare and, for the
//! right-hand side, the tree that owns it. Both sides may be the same tree.
//!
//! - *Local* operations look at the payload of a single node and never at its
//!   descendants.
//! - *Subtree* operations walk both sides breadth-first and also take the number of
//!   children at every step into account, so differently shaped trees differ.

use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use tracing::{instrument, trace};

use crate::arena::{NodeId, Tree};

const HASH_MULTIPLIER: u64 = 31;

impl<T: PartialEq> Tree<T> {
    /// Compares the payloads of `a` and `b` only. Unknown handles are never equal.
    pub fn node_eq(&self, a: NodeId, other: &Tree<T>, b: NodeId) -> bool {
        match (self.data(a), other.data(b)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }

    /// Structural equality of the subtrees rooted at `a` and `b`.
    ///
    /// Both subtrees are walked breadth-first in lockstep. Every pair of nodes must
    /// be locally equal and have the same number of children, and both walks must
    /// end at the same time.
    #[instrument(level = "debug", skip(self, other))]
    pub fn subtree_eq(&self, a: NodeId, other: &Tree<T>, b: NodeId) -> bool {
        if !self.contains(a) || !other.contains(b) {
            return false;
        }
        let mut left = VecDeque::from([a]);
        let mut right = VecDeque::from([b]);

        loop {
            match (left.pop_front(), right.pop_front()) {
                (None, None) => return true,
                (Some(x), Some(y)) => {
                    let (x_children, y_children) = (self.child_slice(x), other.child_slice(y));
                    if !self.node_eq(x, other, y) || x_children.len() != y_children.len() {
                        trace!(left = %x, right = %y, "subtrees differ");
                        return false;
                    }
                    left.extend(x_children.iter().copied());
                    right.extend(y_children.iter().copied());
                }
                _ => return false,
            }
        }
    }

    /// Local equality when `full_tree` is `false`, structural otherwise.
    pub fn equals(&self, a: NodeId, other: &Tree<T>, b: NodeId, full_tree: bool) -> bool {
        if full_tree {
            self.subtree_eq(a, other, b)
        } else {
            self.node_eq(a, other, b)
        }
    }
}

impl<T: Hash> Tree<T> {
    /// Hash of the payload of `id` alone; 0 for an unknown handle.
    pub fn node_hash(&self, id: NodeId) -> u64 {
        self.data(id).map_or(0, |data| {
            let mut hasher = DefaultHasher::new();
            data.hash(&mut hasher);
            hasher.finish()
        })
    }

    /// Shape-sensitive hash of the subtree rooted at `id`.
    ///
    /// Folds the child count and the local hash of every node, breadth-first, into
    /// `hash * 31 + x`. Consistent with [`Tree::subtree_eq`].
    #[instrument(level = "debug", skip(self))]
    pub fn subtree_hash(&self, id: NodeId) -> u64 {
        let Ok(walk) = self.iter_default(id) else {
            return 0;
        };
        walk.fold(0u64, |hash, (node, _)| {
            let hash = hash
                .wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(self.number_of_children(node) as u64);
            hash.wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(self.node_hash(node))
        })
    }

    pub fn hash_code(&self, id: NodeId, full_tree: bool) -> u64 {
        if full_tree {
            self.subtree_hash(id)
        } else {
            self.node_hash(id)
        }
    }
}
