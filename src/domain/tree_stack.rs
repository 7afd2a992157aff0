/*
Stack based depth-first iterators.

Each iterator keeps an explicit stack of pending nodes instead of recursing, so a
traversal can be suspended after any node and simply dropped when the caller stops.
 */
use std::iter::FusedIterator;

use super::node::NodeRef;

/// Node, left subtree, right subtree.
pub struct PreOrderIter<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> PreOrderIter<'a> {
    pub fn new(root: Option<NodeRef<'a>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right first so the left subtree is popped next
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl FusedIterator for PreOrderIter<'_> {}

/// Left subtree, node, right subtree. Yields values in ascending order.
///
/// The stack holds the unvisited left spine: its top is always the next node.
pub struct InOrderIter<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> InOrderIter<'a> {
    pub fn new(root: Option<NodeRef<'a>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<NodeRef<'a>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for InOrderIter<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl FusedIterator for InOrderIter<'_> {}

/// Left subtree, right subtree, node.
pub struct PostOrderIter<'a> {
    stack: Vec<(NodeRef<'a>, bool)>,
}

impl<'a> PostOrderIter<'a> {
    pub fn new(root: Option<NodeRef<'a>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIter<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

impl FusedIterator for PostOrderIter<'_> {}
