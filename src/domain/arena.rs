use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::{instrument, trace};

use super::node::{Color, Node, NodeRef, Side};
use super::tree_queue::levels;

/// Arena-backed red-black tree over `i64` keys.
///
/// Nodes are allocated in a generational arena and linked by index. Nodes are never
/// removed, so every index held by a node or by `root` stays valid for the lifetime
/// of the tree.
///
/// # Example
/// ```
/// use rbtree::RBTree;
///
/// let mut tree = RBTree::new();
/// assert!(tree.insert(5));
/// assert!(tree.insert(8));
/// // repeat inserts are ignored
/// assert!(!tree.insert(5));
///
/// assert!(tree.contains(8));
/// assert!(!tree.contains(6));
/// assert_eq!(tree.size(), 2);
/// ```
#[derive(Debug)]
pub struct RBTree {
    /// Arena storage for all tree nodes
    pub(crate) arena: Arena<Node>,
    /// Index of the root node, None for empty trees
    pub(crate) root: Option<Index>,
    size: usize,
}

impl Default for RBTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RBTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Number of distinct values in the tree.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Upper bound on the height of a red-black tree holding `size` nodes:
    /// `2 * floor(log2(size + 1))`.
    ///
    /// This is an estimate, not a measurement. Use [`RBTree::depth`] for the real height.
    pub fn height(&self) -> usize {
        let n = self.size + 1;
        2 * (usize::BITS - 1 - n.leading_zeros()) as usize
    }

    /// Inserts a value if it is not already present.
    /// Returns whether a new node was created.
    #[instrument(level = "trace", skip(self))]
    pub fn insert(&mut self, value: i64) -> bool {
        let slot = match self.find_target_node(value) {
            Ok(_) => {
                trace!(value, "duplicate ignored");
                return false;
            }
            Err(slot) => slot,
        };

        let Some((parent, side)) = slot else {
            // empty tree: the new node is the root and goes straight to black
            let mut node = Node::new(value, None);
            node.color = Color::Black;
            self.root = Some(self.arena.insert(node));
            self.size += 1;
            return true;
        };

        let node_idx = self.arena.insert(Node::new(value, Some(parent)));
        self.arena[parent].set_child(side, Some(node_idx));
        self.size += 1;
        self.rebalance_after_insert(node_idx);
        true
    }

    /// Inserts every value in sequence. Returns how many were new.
    #[instrument(level = "debug", skip_all)]
    pub fn insert_all<I: IntoIterator<Item = i64>>(&mut self, values: I) -> usize {
        values.into_iter().filter(|&v| self.insert(v)).count()
    }

    /// Applies `f` to the root, the single entry point every read operation goes through.
    pub fn visit_root<'a, R>(&'a self, f: impl FnOnce(Option<NodeRef<'a>>) -> R) -> R {
        f(self.root.map(|idx| NodeRef::new(&self.arena, idx)))
    }

    /// Membership test by binary-search descent, O(height).
    #[instrument(level = "trace", skip(self))]
    pub fn contains(&self, value: i64) -> bool {
        self.visit_root(|root| {
            let mut cur = root;
            while let Some(node) = cur {
                cur = match value.cmp(&node.value()) {
                    Ordering::Equal => return true,
                    Ordering::Less => node.left(),
                    Ordering::Greater => node.right(),
                };
            }
            false
        })
    }

    pub fn min(&self) -> Option<i64> {
        self.extreme(Side::Left)
    }

    pub fn max(&self) -> Option<i64> {
        self.extreme(Side::Right)
    }

    fn extreme(&self, side: Side) -> Option<i64> {
        self.visit_root(|root| {
            let mut node = root?;
            while let Some(next) = node.child(side) {
                node = next;
            }
            Some(node.value())
        })
    }

    /// Measured height: number of nodes on the longest root-to-leaf path.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.visit_root(|root| levels(root).map(|(_, level)| level).max().unwrap_or(0))
    }

    // Ok(node) when target is present, otherwise the attach point: Err(None) for an
    // empty tree, Err(Some((parent, side))) for the vacant child slot.
    fn find_target_node(&self, target: i64) -> Result<Index, Option<(Index, Side)>> {
        let mut cur = self.root.ok_or(None)?;
        loop {
            let node = &self.arena[cur];
            let side = match target.cmp(&node.value) {
                Ordering::Equal => return Ok(cur),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => cur = child,
                None => return Err(Some((cur, side))),
            }
        }
    }

    fn color_of(&self, idx: Option<Index>) -> Color {
        idx.map_or(Color::Black, |idx| self.arena[idx].color)
    }

    fn side_of(&self, idx: Index, parent: Index) -> Side {
        if self.arena[parent].left == Some(idx) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Restores the red-black properties after `node` was attached as a red leaf.
    fn rebalance_after_insert(&mut self, mut node: Index) {
        loop {
            // case 1: node is the root
            let Some(parent) = self.arena[node].parent else {
                trace!(value = self.arena[node].value, "case 1: color root black");
                self.arena[node].color = Color::Black;
                return;
            };

            // case 2: black parent, nothing violated
            if self.arena[parent].color.is_black() {
                trace!(value = self.arena[node].value, "case 2: parent is black");
                return;
            }

            // a red parent is never the root, so the grandparent exists
            let Some(grandparent) = self.arena[parent].parent else {
                debug_assert!(
                    false,
                    "red root {} reached during fix-up",
                    self.arena[parent].value
                );
                return;
            };
            let parent_side = self.side_of(parent, grandparent);
            let uncle = self.arena[grandparent].child(parent_side.opposite());

            // case 3: red uncle, push the red up and retry from the grandparent
            if let (Some(uncle), Color::Red) = (uncle, self.color_of(uncle)) {
                trace!(value = self.arena[node].value, "case 3: recolor, climb to grandparent");
                self.arena[parent].color = Color::Black;
                self.arena[uncle].color = Color::Black;
                self.arena[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            // case 4: inner grandchild, rotate it to the outside
            let mut parent = parent;
            if self.side_of(node, parent) != parent_side {
                trace!(value = self.arena[node].value, "case 4: rotate parent {}", parent_side);
                self.rotate(parent, parent_side);
                std::mem::swap(&mut node, &mut parent);
            }

            // case 5: outer grandchild, rotate the grandparent away from it
            trace!(value = self.arena[node].value, "case 5: rotate grandparent {}", parent_side.opposite());
            self.arena[parent].color = Color::Black;
            self.arena[grandparent].color = Color::Red;
            self.rotate(grandparent, parent_side.opposite());
            return;
        }
    }

    /// Rotates around `node` in `direction`; the child on the opposite side (the pivot)
    /// takes `node`'s place. Left rotation promotes the right child and vice versa.
    ///
    /// Updates all four link pairs: pivot/grandparent, pivot/node, node/transferred
    /// subtree, and the root when `node` was the root.
    pub(crate) fn rotate(&mut self, node: Index, direction: Side) {
        let Some(pivot) = self.arena[node].child(direction.opposite()) else {
            return;
        };
        let grandparent = self.arena[node].parent;
        let node_side = grandparent.map(|gp| self.side_of(node, gp));

        // pivot's inner subtree moves under node
        let transferred = self.arena[pivot].child(direction);
        self.arena[node].set_child(direction.opposite(), transferred);
        if let Some(transferred) = transferred {
            self.arena[transferred].parent = Some(node);
        }

        // pivot takes node's slot under the grandparent
        self.arena[pivot].parent = grandparent;
        match (grandparent, node_side) {
            (Some(gp), Some(side)) => self.arena[gp].set_child(side, Some(pivot)),
            _ => self.root = Some(pivot),
        }

        // node hangs below pivot
        self.arena[pivot].set_child(direction, Some(node));
        self.arena[node].parent = Some(pivot);
    }

    #[cfg(test)]
    pub(crate) fn rotate_left(&mut self, node: Index) {
        self.rotate(node, Side::Left);
    }

    #[cfg(test)]
    pub(crate) fn rotate_right(&mut self, node: Index) {
        self.rotate(node, Side::Right);
    }
}
