use rbtree::util::testing::{self, valid_tree};
use rbtree::domain::{BreadthFirstIter, InOrderIter, PostOrderIter, PreOrderIter};
use rbtree::{traversal, NodeRef, Order, RBTree};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Inserting 2, 1, 4, 3, 5 keeps every node where plain BST insertion puts it:
///
/// ```text
///       2
///      / \
///     1   4
///        / \
///       3   5
/// ```
#[fixture]
fn unbalanced_looking() -> RBTree {
    valid_tree([2, 1, 4, 3, 5])
}

#[fixture]
fn eight() -> RBTree {
    valid_tree([5, 4, 7, 3, 2, 6, 8, 9])
}

#[rstest]
#[case::pre(Order::PreOrder, vec![2, 1, 4, 3, 5])]
#[case::in_(Order::InOrder, vec![1, 2, 3, 4, 5])]
#[case::post(Order::PostOrder, vec![1, 3, 5, 4, 2])]
#[case::breadth(Order::BreadthFirst, vec![2, 1, 4, 3, 5])]
fn given_known_shape_when_walking_then_order_matches(
    unbalanced_looking: RBTree,
    #[case] order: Order,
    #[case] expected: Vec<i64>,
) {
    assert_eq!(unbalanced_looking.values(order), expected);
}

#[rstest]
fn given_builders_when_visiting_root_then_match_walk(eight: RBTree) {
    let collect = |order: Order| {
        let mut seen = Vec::new();
        let push = |n: NodeRef<'_>| seen.push(n.value());
        match order {
            Order::PreOrder => eight.visit_root(traversal::pre_order(push)),
            Order::InOrder => eight.visit_root(traversal::in_order(push)),
            Order::PostOrder => eight.visit_root(traversal::post_order(push)),
            Order::BreadthFirst => eight.visit_root(traversal::breadth_first(push)),
        }
        seen
    };
    for order in Order::ALL {
        assert_eq!(collect(order), eight.values(order), "order {order}");
    }
}

#[rstest]
fn given_node_iterators_when_collected_then_match_walk(eight: RBTree) {
    let values = |nodes: Vec<NodeRef<'_>>| nodes.iter().map(|n| n.value()).collect::<Vec<_>>();
    eight.visit_root(|root| {
        assert_eq!(
            values(PreOrderIter::new(root).collect()),
            eight.values(Order::PreOrder)
        );
        assert_eq!(
            values(InOrderIter::new(root).collect()),
            eight.values(Order::InOrder)
        );
        assert_eq!(
            values(PostOrderIter::new(root).collect()),
            eight.values(Order::PostOrder)
        );
        assert_eq!(
            values(BreadthFirstIter::new(root).collect()),
            eight.values(Order::BreadthFirst)
        );
    });
}

#[rstest]
fn given_tree_when_following_links_then_parents_point_back(eight: RBTree) {
    eight.walk(Order::PreOrder, |node| {
        for child in [node.left(), node.right()].into_iter().flatten() {
            assert_eq!(child.parent(), Some(node));
            assert!(!child.is_root());
        }
        assert_eq!(node.is_root(), node.parent().is_none());
    });
}

#[rstest]
fn given_tree_when_iterating_then_matches_slice(eight: RBTree) {
    let iterated: Vec<i64> = eight.iter().collect();
    assert_eq!(iterated, eight.to_vec());
    assert_eq!(eight.iter().len(), eight.size());

    let mut by_ref = Vec::new();
    for v in &eight {
        by_ref.push(v);
    }
    assert_eq!(by_ref, iterated);
}

#[rstest]
fn given_partial_iteration_when_dropped_then_tree_still_usable(mut eight: RBTree) {
    let first_two: Vec<i64> = eight.iter().take(2).collect();
    assert_eq!(first_two, vec![2, 3]);
    // abandoning an iterator holds nothing back
    assert!(eight.insert(1));
    assert_eq!(eight.iter().next(), Some(1));
}

#[rstest]
fn given_values_when_finding_then_only_inserted_are_present(eight: RBTree) {
    for v in [2, 3, 4, 5, 6, 7, 8, 9] {
        assert!(eight.contains(v), "{v}");
    }
    for v in [i64::MIN, -1, 0, 1, 10, i64::MAX] {
        assert!(!eight.contains(v), "{v}");
    }
    assert_eq!(eight.min(), Some(2));
    assert_eq!(eight.max(), Some(9));
}
