//! Removing the current node while iterating

use std::collections::HashSet;

use ordtree::util::testing::{init_test_setup, SampleTree};
use ordtree::{IterationOrder, NodeId, TreeError};
use rstest::{fixture, rstest};

#[fixture]
fn sample() -> SampleTree {
    init_test_setup();
    SampleTree::new()
}

/// Runs a full traversal, removing every node whose label is in `doomed` right after
/// it is yielded. Returns the labels of all yielded nodes.
fn run_removing(sample: &mut SampleTree, order: IterationOrder, doomed: &[&str]) -> Vec<&'static str> {
    let doomed: HashSet<NodeId> = doomed.iter().map(|label| sample.id(label)).collect();
    let root = sample.root;
    let mut iter = sample.tree.iter_mut(root, order).unwrap();
    let mut visited = Vec::new();
    while iter.has_next() {
        let node = iter.try_next().unwrap();
        visited.push(node);
        if doomed.contains(&node) {
            iter.remove().unwrap();
        }
    }
    sample.labels(visited)
}

// ============================================================
// Pre-order
// ============================================================

#[rstest]
fn given_pre_order_when_removing_c3_then_skips_its_children(mut sample: SampleTree) {
    let d1_before = sample.tree.children(sample.id("C3"));

    let visited = run_removing(&mut sample, IterationOrder::PreOrder, &["C3"]);

    assert_eq!(
        visited,
        ["A1", "B1", "C1", "B2", "C2", "C3", "C4", "D3", "D4", "D5"]
    );
    assert_eq!(
        sample.labels(sample.tree.children(sample.id("B2"))),
        ["C2", "C4"]
    );
    assert_eq!(sample.tree.parent(sample.id("C3")), None);
    assert_eq!(sample.tree.children(sample.id("C3")), d1_before);
}

#[rstest]
fn given_pre_order_when_removing_leaf_then_continues_with_sibling(mut sample: SampleTree) {
    let visited = run_removing(&mut sample, IterationOrder::PreOrder, &["D1"]);
    assert_eq!(
        visited,
        ["A1", "B1", "C1", "B2", "C2", "C3", "D1", "D2", "C4", "D3", "D4", "D5"]
    );
    assert_eq!(sample.labels(sample.tree.children(sample.id("C3"))), ["D2"]);
}

// ============================================================
// Breadth-first
// ============================================================

#[rstest]
fn given_breadth_first_when_removing_b1_then_c1_is_never_yielded(mut sample: SampleTree) {
    let visited = run_removing(&mut sample, IterationOrder::BreadthFirst, &["B1"]);
    assert_eq!(
        visited,
        ["A1", "B1", "B2", "C2", "C3", "C4", "D1", "D2", "D3", "D4", "D5"]
    );
    assert_eq!(sample.labels(sample.tree.children(sample.root)), ["B2"]);
    assert_eq!(sample.labels(sample.tree.children(sample.id("B1"))), ["C1"]);
}

#[rstest]
fn given_breadth_first_when_removing_c3_then_its_children_are_dropped(mut sample: SampleTree) {
    let visited = run_removing(&mut sample, IterationOrder::BreadthFirst, &["C3"]);
    assert_eq!(
        visited,
        ["A1", "B1", "B2", "C1", "C2", "C3", "C4", "D3", "D4", "D5"]
    );
}

// ============================================================
// Post-order
// ============================================================

#[rstest]
fn given_post_order_when_removing_c3_then_continues_with_next_sibling(mut sample: SampleTree) {
    let visited = run_removing(&mut sample, IterationOrder::PostOrder, &["C3"]);
    assert_eq!(
        visited,
        ["C1", "B1", "C2", "D1", "D2", "C3", "D3", "D4", "D5", "C4", "B2", "A1"]
    );
    assert_eq!(
        sample.labels(sample.tree.children(sample.id("B2"))),
        ["C2", "C4"]
    );
    assert_eq!(
        sample.labels(sample.tree.children(sample.id("C3"))),
        ["D1", "D2"]
    );
}

#[rstest]
fn given_post_order_when_removing_only_child_then_parent_is_next(mut sample: SampleTree) {
    let c1 = sample.id("C1");
    let b1 = sample.id("B1");
    let root = sample.root;

    let mut iter = sample.tree.iter_mut(root, IterationOrder::PostOrder).unwrap();
    assert_eq!(iter.try_next(), Ok(c1));
    iter.remove().unwrap();
    assert_eq!(iter.try_next(), Ok(b1));
    drop(iter);

    assert!(!sample.tree.has_children(b1));
}

#[rstest]
fn given_post_order_when_removing_leftmost_subtree_then_resumes_at_first_child(
    mut sample: SampleTree,
) {
    let visited = run_removing(&mut sample, IterationOrder::PostOrder, &["B1"]);
    assert_eq!(
        visited,
        ["C1", "B1", "C2", "D1", "D2", "C3", "D3", "D4", "D5", "C4", "B2", "A1"]
    );
    assert_eq!(sample.labels(sample.tree.children(sample.root)), ["B2"]);
}

#[rstest]
fn given_post_order_when_removing_consecutive_siblings_then_skips_none(mut sample: SampleTree) {
    let visited = run_removing(&mut sample, IterationOrder::PostOrder, &["D3", "D4", "D5"]);
    assert_eq!(
        visited,
        ["C1", "B1", "C2", "D1", "D2", "C3", "D3", "D4", "D5", "C4", "B2", "A1"]
    );
    assert!(!sample.tree.has_children(sample.id("C4")));
}

// ============================================================
// All Orders
// ============================================================

#[rstest]
fn given_any_removal_when_iterating_then_remaining_sequence_skips_only_removed_subtree(
    mut sample: SampleTree,
    #[values(IterationOrder::BreadthFirst, IterationOrder::PreOrder, IterationOrder::PostOrder)]
    order: IterationOrder,
    #[values("B1", "C1", "B2", "C3", "D2", "C4", "D5")] label: &str,
) {
    let target = sample.id(label);
    let unmutated: Vec<NodeId> = sample
        .tree
        .iter(sample.root, order)
        .unwrap()
        .map(|(id, _)| id)
        .collect();
    let descendants: HashSet<NodeId> = sample
        .tree
        .iter(target, IterationOrder::BreadthFirst)
        .unwrap()
        .map(|(id, _)| id)
        .filter(|&id| id != target)
        .collect();
    let children_before = sample.tree.children(target);
    let target_at = unmutated.iter().position(|&id| id == target).unwrap();
    let want: Vec<NodeId> = unmutated
        .iter()
        .enumerate()
        .filter(|&(i, id)| i < target_at || !descendants.contains(id))
        .map(|(_, &id)| id)
        .collect();

    let visited = run_removing(&mut sample, order, &[label]);

    assert_eq!(visited, sample.labels(want));
    assert_eq!(sample.tree.parent(target), None);
    assert_eq!(sample.tree.children(target), children_before);
    let reachable: Vec<NodeId> = sample
        .tree
        .iter(sample.root, order)
        .unwrap()
        .map(|(id, _)| id)
        .collect();
    assert!(!reachable.contains(&target));
}

#[rstest]
#[case(IterationOrder::BreadthFirst, vec!["A1", "B1", "B2"])]
#[case(IterationOrder::PreOrder, vec!["A1", "B1", "B2"])]
#[case(IterationOrder::PostOrder, vec!["C1", "B1", "C2", "D1", "D2", "C3", "D3", "D4", "D5", "C4", "B2", "A1"])]
fn given_every_child_of_root_removed_when_iterating_then_root_is_left_alone(
    mut sample: SampleTree,
    #[case] order: IterationOrder,
    #[case] labels: Vec<&str>,
) {
    let visited = run_removing(&mut sample, order, &["B1", "B2"]);
    assert_eq!(visited, labels);
    assert!(!sample.tree.has_children(sample.root));
    assert_eq!(sample.tree.roots().len(), 3);
}

#[rstest]
fn given_remove_called_twice_when_iterating_then_second_call_fails(
    mut sample: SampleTree,
    #[values(IterationOrder::BreadthFirst, IterationOrder::PreOrder, IterationOrder::PostOrder)]
    order: IterationOrder,
) {
    let root = sample.root;
    let mut iter = sample.tree.iter_mut(root, order).unwrap();
    assert_eq!(iter.remove(), Err(TreeError::IllegalRemove));
    iter.try_next().unwrap();
    iter.try_next().unwrap();
    assert_eq!(iter.remove(), Ok(()));
    assert_eq!(iter.remove(), Err(TreeError::IllegalRemove));
    assert!(iter.has_next());
}

#[rstest]
fn given_removal_when_iterating_then_payloads_stay_accessible(mut sample: SampleTree) {
    let root = sample.root;
    let mut iter = sample.tree.iter_mut(root, IterationOrder::PreOrder).unwrap();
    while let Some(node) = iter.next() {
        if iter.data(node) == Some(&"B2") {
            iter.remove().unwrap();
            assert_eq!(iter.tree().parent(node), None);
            if let Some(label) = iter.data_mut(node) {
                *label = "B2-removed";
            }
        }
    }
    assert_eq!(sample.tree.data(sample.id("B2")), Some(&"B2-removed"));
    assert_eq!(sample.tree.depth(sample.root), 3);
}
