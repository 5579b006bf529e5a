use generational_arena::{Arena, Index};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, instrument, trace};

use crate::errors::{TreeError, TreeResult};
use crate::iter::{Traversal, TreeIter, Walk};
use crate::order::IterationOrder;

/// Handle to a node stored in a [`Tree`].
///
/// Handles are generational: once a node is deleted its handle is rejected, even if
/// the arena slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(Index);

impl NodeId {
    /// Raw `(slot, generation)` pair, mostly useful for diagnostics.
    pub fn into_raw_parts(self) -> (usize, u64) {
        self.0.into_raw_parts()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}v{}", slot, generation)
    }
}

/// Tree node in the arena-based hierarchy structure.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    data: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Parent of this node, `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed ordered tree.
///
/// Every node is a tree rooted at itself: all operations take the [`NodeId`] they act
/// on, and any node can be the root of an iteration. Nodes that are detached from
/// their parent stay in the arena as independent roots until [`Tree::delete`] frees
/// them.
///
/// The parent link is a plain handle. Only the children lists own structure.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    arena: Arena<TreeNode<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
        }
    }

    /// Stores a new parentless, childless node.
    #[instrument(level = "trace", skip(self, data))]
    pub fn insert(&mut self, data: T) -> NodeId {
        let node = TreeNode {
            data,
            parent: None,
            children: Vec::new(),
        };
        NodeId(self.arena.insert(node))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id.0)
    }

    pub fn data(&self, id: NodeId) -> Option<&T> {
        self.arena.get(id.0).map(|node| &node.data)
    }

    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.arena.get_mut(id.0).map(|node| &mut node.data)
    }

    /// All parentless nodes, in arena order.
    pub fn roots(&self) -> Vec<NodeId> {
        self.arena
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(idx, _)| NodeId(idx))
            .collect()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id.0).and_then(|node| node.parent)
    }

    /// Snapshot of the children of `id` in insertion order.
    ///
    /// The returned vector is a copy; changing it does not touch the tree. Unknown
    /// handles have no children.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.child_slice(id).to_vec()
    }

    pub(crate) fn child_slice(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id.0)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    /// The child at `index`, bounds-checked.
    #[instrument(level = "trace", skip(self))]
    pub fn child(&self, id: NodeId, index: usize) -> TreeResult<NodeId> {
        let node = self.arena.get(id.0).ok_or(TreeError::UnknownNode(id))?;
        node.children
            .get(index)
            .copied()
            .ok_or(TreeError::IndexOutOfBounds {
                index,
                len: node.children.len(),
            })
    }

    pub fn number_of_children(&self, id: NodeId) -> usize {
        self.child_slice(id).len()
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        !self.child_slice(id).is_empty()
    }

    /// Identity-based membership test.
    pub fn has_child(&self, id: NodeId, child: NodeId) -> bool {
        self.child_slice(id).contains(&child)
    }

    /// Returns `true` if `ancestor` is `node` or lies on the path from `node` up to
    /// its root.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Appends `child` to the children of `parent`.
    ///
    /// A child that already hangs under another parent is detached from it first.
    /// Returns `false` without changing anything when either handle is unknown, when
    /// `child` already is a child of `parent`, or when the link would make a node its
    /// own ancestor.
    #[instrument(level = "trace", skip(self))]
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if !self.contains(parent) || !self.contains(child) {
            trace!("add_child rejected: unknown node");
            return false;
        }
        if self.has_child(parent, child) {
            trace!("add_child rejected: already a child");
            return false;
        }
        if self.is_ancestor(child, parent) {
            trace!("add_child rejected: would create a cycle");
            return false;
        }

        self.detach(child);
        if let Some(node) = self.arena.get_mut(parent.0) {
            node.children.push(child);
        }
        if let Some(node) = self.arena.get_mut(child.0) {
            node.parent = Some(parent);
        }
        true
    }

    /// Unlinks and returns the child at `index`. The child keeps its own subtree.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> TreeResult<NodeId> {
        let node = self
            .arena
            .get_mut(parent.0)
            .ok_or(TreeError::UnknownNode(parent))?;
        if index >= node.children.len() {
            return Err(TreeError::IndexOutOfBounds {
                index,
                len: node.children.len(),
            });
        }
        let child = node.children.remove(index);
        if let Some(child_node) = self.arena.get_mut(child.0) {
            child_node.parent = None;
        }
        Ok(child)
    }

    /// Unlinks `child` from `parent`. Returns `false` if it was not a child of `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child).is_some()
    }

    /// Severs `id` from its parent, returning the former parent and the position `id`
    /// held among its siblings.
    pub(crate) fn detach(&mut self, id: NodeId) -> Option<(NodeId, usize)> {
        let parent = self.arena.get_mut(id.0)?.parent.take()?;
        let siblings = &mut self.arena.get_mut(parent.0)?.children;
        let position = siblings.iter().position(|&sibling| sibling == id)?;
        siblings.remove(position);
        Some((parent, position))
    }

    /// Number of levels in the subtree rooted at `id`; 1 for a leaf, 0 for an unknown
    /// handle.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self, id: NodeId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((id, 1));

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for &child in self.child_slice(node) {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Collects all leaf nodes (nodes with no children) of the subtree, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self, id: NodeId) -> Vec<NodeId> {
        match self.iter(id, IterationOrder::PreOrder) {
            Ok(walk) => walk
                .filter(|&(node, _)| !self.has_children(node))
                .map(|(node, _)| node)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Detaches `id` and frees it together with its whole subtree.
    ///
    /// Returns the number of nodes freed. Handles into the freed subtree become stale.
    #[instrument(level = "debug", skip(self))]
    pub fn delete(&mut self, id: NodeId) -> usize {
        if !self.contains(id) {
            return 0;
        }
        self.detach(id);
        let doomed: Vec<NodeId> = match self.iter(id, IterationOrder::BreadthFirst) {
            Ok(walk) => walk.map(|(node, _)| node).collect(),
            Err(_) => Vec::new(),
        };
        for node in &doomed {
            self.arena.remove(node.0);
        }
        debug!(root = %id, freed = doomed.len(), "deleted subtree");
        doomed.len()
    }

    /// Read-only traversal of the subtree rooted at `root`.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self, root: NodeId, order: IterationOrder) -> TreeResult<Walk<'_, T>> {
        Walk::with_strategy(self, root, Traversal::new(root, order))
    }

    /// Traversal of the subtree rooted at `root` that supports
    /// [`TreeIter::remove`].
    #[instrument(level = "trace", skip(self))]
    pub fn iter_mut(&mut self, root: NodeId, order: IterationOrder) -> TreeResult<TreeIter<'_, T>> {
        TreeIter::with_strategy(self, root, Traversal::new(root, order))
    }

    /// Breadth-first read-only traversal, the default order.
    pub fn iter_default(&self, root: NodeId) -> TreeResult<Walk<'_, T>> {
        self.iter(root, IterationOrder::default())
    }
}
