//! Local versus full-tree equality and hashing

use ordtree::util::testing::{init_test_setup, SampleTree};
use ordtree::{IterationOrder, Tree};
use rstest::{fixture, rstest};

#[fixture]
fn sample() -> SampleTree {
    init_test_setup();
    SampleTree::new()
}

// ============================================================
// Full Tree
// ============================================================

#[rstest]
fn given_identical_trees_when_comparing_full_then_equal_with_equal_hashes(sample: SampleTree) {
    let other = SampleTree::new();
    assert!(sample.tree.equals(sample.root, &other.tree, other.root, true));
    assert_eq!(
        sample.tree.hash_code(sample.root, true),
        other.tree.hash_code(other.root, true)
    );
}

#[rstest]
fn given_changed_payload_deep_down_when_comparing_then_only_full_comparison_differs(
    sample: SampleTree,
) {
    let mut other = SampleTree::new();
    let d4 = other.id("D4");
    if let Some(label) = other.tree.data_mut(d4) {
        *label = "X4";
    }
    assert!(!sample.tree.equals(sample.root, &other.tree, other.root, true));
    assert!(sample.tree.equals(sample.root, &other.tree, other.root, false));
    assert_ne!(
        sample.tree.subtree_hash(sample.root),
        other.tree.subtree_hash(other.root)
    );
}

#[rstest]
fn given_removed_subtree_when_comparing_full_then_not_equal(sample: SampleTree) {
    let mut other = SampleTree::new();
    let (b2, c3) = (other.id("B2"), other.id("C3"));
    assert!(other.tree.remove_child(b2, c3));

    assert!(!sample.tree.subtree_eq(sample.root, &other.tree, other.root));
    assert!(!other.tree.subtree_eq(other.root, &sample.tree, sample.root));
}

#[rstest]
fn given_copied_subtree_when_comparing_then_equal_to_source_subtree(sample: SampleTree) {
    let mut copy = Tree::new();
    let c4 = copy.insert("C4");
    for label in ["D3", "D4", "D5"] {
        let leaf = copy.insert(label);
        copy.add_child(c4, leaf);
    }
    assert!(sample.tree.subtree_eq(sample.id("C4"), &copy, c4));
    assert_eq!(sample.tree.subtree_hash(sample.id("C4")), copy.subtree_hash(c4));
}

#[rstest]
fn given_reordered_children_when_comparing_full_then_not_equal(sample: SampleTree) {
    let mut other = SampleTree::new();
    let (c4, d3) = (other.id("C4"), other.id("D3"));
    // move D3 to the end: D4 D5 D3
    assert!(other.tree.remove_child(c4, d3));
    assert!(other.tree.add_child(c4, d3));

    assert!(!sample.tree.subtree_eq(sample.root, &other.tree, other.root));
}

// ============================================================
// Local
// ============================================================

#[rstest]
fn given_lone_node_with_same_payload_when_comparing_locally_then_equal(sample: SampleTree) {
    let mut lone = Tree::new();
    let a1 = lone.insert("A1");

    assert!(sample.tree.equals(sample.root, &lone, a1, false));
    assert!(!sample.tree.equals(sample.root, &lone, a1, true));
    assert_eq!(sample.tree.hash_code(sample.root, false), lone.hash_code(a1, false));
    assert_ne!(sample.tree.hash_code(sample.root, true), lone.hash_code(a1, true));
}

#[rstest]
fn given_siblings_with_different_payloads_when_comparing_then_not_equal(sample: SampleTree) {
    let (c3, c4) = (sample.id("C3"), sample.id("C4"));
    assert!(!sample.tree.node_eq(c3, &sample.tree, c4));
    assert!(!sample.tree.subtree_eq(c3, &sample.tree, c4));
}

#[rstest]
fn given_node_when_comparing_with_itself_then_equal(
    sample: SampleTree,
    #[values(true, false)] full_tree: bool,
) {
    for (id, _) in sample.tree.iter(sample.root, IterationOrder::PreOrder).unwrap() {
        assert!(sample.tree.equals(id, &sample.tree, id, full_tree));
    }
}

#[rstest]
fn given_kinds_as_enum_variants_when_comparing_locally_then_kinds_never_match() {
    #[derive(Debug, PartialEq, Hash)]
    enum Item {
        Menu(&'static str),
        Action(&'static str),
    }

    let mut tree = Tree::new();
    let menu = tree.insert(Item::Menu("file"));
    let action = tree.insert(Item::Action("file"));
    assert!(!tree.node_eq(menu, &tree, action));
    assert_ne!(tree.node_hash(menu), tree.node_hash(action));
}
