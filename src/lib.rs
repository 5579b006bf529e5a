//! Ordered, mutable arena tree with breadth-first, pre-order and post-order
//! traversals that allow removing the current node while iterating.
//!
//! ```
//! use ordtree::{IterationOrder, Tree};
//!
//! let mut tree = Tree::new();
//! let root = tree.insert("root");
//! let child = tree.insert("child");
//! tree.add_child(root, child);
//!
//! let labels: Vec<&str> = tree
//!     .iter(root, IterationOrder::PostOrder)
//!     .unwrap()
//!     .map(|(_, label)| *label)
//!     .collect();
//! assert_eq!(labels, ["child", "root"]);
//! ```

pub mod arena;
pub mod equality;
pub mod errors;
pub mod iter;
pub mod order;
pub mod tree_traits;
pub mod util;

pub use arena::{NodeId, Tree, TreeNode};
pub use errors::{ParseOrderError, TreeError, TreeResult};
pub use iter::{
    BreadthFirst, BreadthFirstIter, PostOrder, PostOrderIter, PreOrder, PreOrderIter, Strategy,
    Traversal, TreeIter, Walk,
};
pub use order::IterationOrder;
pub use tree_traits::TreeDisplay;
