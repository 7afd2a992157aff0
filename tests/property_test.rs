use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rbtree::util::testing;
use rbtree::{Order, RBTree};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn inputs() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-500i64..500, 0..200)
}

proptest! {
    #[test]
    fn invariants_hold_after_every_insert(values in inputs()) {
        let mut tree = RBTree::new();
        for v in values {
            tree.insert(v);
            prop_assert_eq!(tree.validate(), Ok(()));
        }
    }

    #[test]
    fn size_and_slice_match_a_sorted_set(values in inputs()) {
        let tree: RBTree = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.iter().copied().collect();

        prop_assert_eq!(tree.size(), model.len());
        prop_assert_eq!(tree.to_vec(), model.iter().copied().collect::<Vec<_>>());
        prop_assert_eq!(tree.iter().collect::<Vec<_>>(), tree.to_vec());
        prop_assert_eq!(tree.min(), model.first().copied());
        prop_assert_eq!(tree.max(), model.last().copied());
    }

    #[test]
    fn insert_reports_novelty(values in inputs()) {
        let mut tree = RBTree::new();
        let mut model = BTreeSet::new();
        for v in values {
            prop_assert_eq!(tree.insert(v), model.insert(v));
        }
    }

    #[test]
    fn contains_agrees_with_model(values in inputs(), probes in prop::collection::vec(-600i64..600, 0..50)) {
        let tree: RBTree = values.iter().copied().collect();
        let model: BTreeSet<i64> = values.into_iter().collect();
        for p in probes {
            prop_assert_eq!(tree.contains(p), model.contains(&p));
        }
    }

    #[test]
    fn depth_is_bounded_by_estimate(values in inputs()) {
        let tree: RBTree = values.into_iter().collect();
        prop_assert!(tree.depth() <= tree.height().max(1));
    }

    #[test]
    fn every_order_visits_each_value_once(values in inputs()) {
        let tree: RBTree = values.into_iter().collect();
        for order in Order::ALL {
            let mut seen = tree.values(order);
            seen.sort_unstable();
            prop_assert_eq!(seen, tree.to_vec());
        }
    }

    #[test]
    fn clone_is_equal_and_independent(values in inputs(), extra in 1000i64..2000) {
        let tree: RBTree = values.into_iter().collect();
        let mut copy = tree.clone();
        prop_assert_eq!(&copy, &tree);
        prop_assert_eq!(copy.validate(), Ok(()));

        copy.insert(extra);
        prop_assert!(!tree.contains(extra));
        prop_assert_eq!(copy.size(), tree.size() + 1);
    }
}

#[test]
fn given_shuffled_thousand_when_inserted_then_sorted_and_valid() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut values: Vec<i64> = (0..1000).collect();
    values.shuffle(&mut rng);

    let mut tree = RBTree::new();
    for v in &values {
        assert!(tree.insert(*v));
    }
    tree.assert_valid();
    assert_eq!(tree.validate(), Ok(()));
    assert_eq!(tree.size(), 1000);
    assert_eq!(tree.to_vec(), (0..1000).collect::<Vec<_>>());
    assert_eq!(tree.height(), 18);
    assert!(tree.depth() <= 18);

    let copy = tree.clone();
    assert_eq!(copy, tree);
    assert_eq!(copy.validate(), Ok(()));
}
