use std::iter::FusedIterator;

use tracing::{debug, instrument};

use super::arena::RBTree;
use super::traversal::{breadth_first, in_order};
use super::tree_stack::InOrderIter;

impl RBTree {
    /// All values in ascending order.
    #[instrument(level = "debug", skip(self))]
    pub fn to_vec(&self) -> Vec<i64> {
        let mut slice = Vec::with_capacity(self.size());
        self.visit_root(in_order(|node| slice.push(node.value())));
        slice
    }

    /// Lazy ascending iterator over the values.
    ///
    /// Yields exactly `size()` values. Dropping it early releases everything it holds.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: self.visit_root(InOrderIter::new),
            remaining: self.size(),
        }
    }
}

/// Ascending value iterator returned by [`RBTree::iter`].
pub struct Iter<'a> {
    nodes: InOrderIter<'a>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RBTree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Re-inserts every value breadth-first into a fresh tree.
///
/// The copy holds the same values but may differ in shape and coloring from the source.
impl Clone for RBTree {
    #[instrument(level = "debug", skip(self))]
    fn clone(&self) -> Self {
        let mut copy = RBTree::new();
        self.visit_root(breadth_first(|node| {
            copy.insert(node.value());
        }));
        debug!(size = copy.size(), "cloned tree");
        copy
    }
}

/// Trees are equal when they hold the same values, regardless of shape.
impl PartialEq for RBTree {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl Eq for RBTree {}

impl FromIterator<i64> for RBTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.insert_all(iter);
        tree
    }
}

impl Extend<i64> for RBTree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl From<&RBTree> for Vec<i64> {
    fn from(tree: &RBTree) -> Self {
        tree.to_vec()
    }
}

impl From<RBTree> for Vec<i64> {
    fn from(tree: RBTree) -> Self {
        tree.to_vec()
    }
}
