use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::node::NodeRef;

/// Level by level, left to right within a level.
pub struct BreadthFirstIter<'a> {
    queue: VecDeque<NodeRef<'a>>,
}

impl<'a> BreadthFirstIter<'a> {
    pub fn new(root: Option<NodeRef<'a>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a> Iterator for BreadthFirstIter<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl FusedIterator for BreadthFirstIter<'_> {}

/// Breadth-first walk that also reports each node's level, root at 1.
pub(crate) fn levels(root: Option<NodeRef<'_>>) -> impl Iterator<Item = (NodeRef<'_>, usize)> {
    let mut queue: VecDeque<_> = root.map(|n| (n, 1)).into_iter().collect();
    std::iter::from_fn(move || {
        let (node, level) = queue.pop_front()?;
        queue.extend(node.left().map(|n| (n, level + 1)));
        queue.extend(node.right().map(|n| (n, level + 1)));
        Some((node, level))
    })
}
