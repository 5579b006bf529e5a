use std::fmt::Display;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::arena::{NodeId, Tree};

/// Text rendering of a subtree, one node per line.
pub trait TreeDisplay {
    fn to_tree_string(&self, root: NodeId) -> TermTree<String>;
}

impl<T: Display> TreeDisplay for Tree<T> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, root: NodeId) -> TermTree<String> {
        let Some(data) = self.data(root) else {
            return TermTree::new("Empty tree".to_string());
        };
        let mut rendered = TermTree::new(data.to_string());

        fn build_tree<T: Display>(tree: &Tree<T>, node: NodeId, parent: &mut TermTree<String>) {
            for &child in tree.child_slice(node) {
                if let Some(data) = tree.data(child) {
                    let mut child_tree = TermTree::new(data.to_string());
                    build_tree(tree, child, &mut child_tree);
                    parent.push(child_tree);
                }
            }
        }

        build_tree(self, root, &mut rendered);
        rendered
    }
}
