//! Traversal engine.
//!
//! Every read operation is built from a visitor over `NodeRef` handed to
//! [`RBTree::visit_root`]. The builders below turn a per-node callback into such a
//! root visitor, one per visit order:
//!
//! ```
//! use rbtree::{traversal, RBTree};
//!
//! let tree: RBTree = [5, 4, 7, 3].into_iter().collect();
//! let mut seen = Vec::new();
//! tree.visit_root(traversal::in_order(|node| seen.push(node.value())));
//! assert_eq!(seen, vec![3, 4, 5, 7]);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::arena::RBTree;
use super::node::NodeRef;
use super::tree_queue::BreadthFirstIter;
use super::tree_stack::{InOrderIter, PostOrderIter, PreOrderIter};

/// Visit order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "pre")]
    PreOrder,
    #[default]
    #[serde(rename = "in")]
    InOrder,
    #[serde(rename = "post")]
    PostOrder,
    #[serde(rename = "breadth")]
    BreadthFirst,
}

impl Order {
    pub const ALL: [Order; 4] = [
        Order::PreOrder,
        Order::InOrder,
        Order::PostOrder,
        Order::BreadthFirst,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreOrder => "pre",
            Self::InOrder => "in",
            Self::PostOrder => "post",
            Self::BreadthFirst => "breadth",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre" | "preorder" | "pre-order" => Ok(Self::PreOrder),
            "in" | "inorder" | "in-order" => Ok(Self::InOrder),
            "post" | "postorder" | "post-order" => Ok(Self::PostOrder),
            "breadth" | "bfs" | "breadth-first" | "level" => Ok(Self::BreadthFirst),
            other => Err(format!(
                "unknown traversal order '{other}', expected one of: pre, in, post, breadth"
            )),
        }
    }
}

/// Node, then left subtree, then right subtree.
pub fn pre_order<'a>(mut visit: impl FnMut(NodeRef<'a>)) -> impl FnOnce(Option<NodeRef<'a>>) {
    move |root| PreOrderIter::new(root).for_each(&mut visit)
}

/// Left subtree, then node, then right subtree: ascending values.
pub fn in_order<'a>(mut visit: impl FnMut(NodeRef<'a>)) -> impl FnOnce(Option<NodeRef<'a>>) {
    move |root| InOrderIter::new(root).for_each(&mut visit)
}

/// Left subtree, then right subtree, then node.
pub fn post_order<'a>(mut visit: impl FnMut(NodeRef<'a>)) -> impl FnOnce(Option<NodeRef<'a>>) {
    move |root| PostOrderIter::new(root).for_each(&mut visit)
}

/// Level by level, left to right.
pub fn breadth_first<'a>(
    mut visit: impl FnMut(NodeRef<'a>),
) -> impl FnOnce(Option<NodeRef<'a>>) {
    move |root| BreadthFirstIter::new(root).for_each(&mut visit)
}

impl RBTree {
    /// Calls `visit` on every node in the given order.
    #[instrument(level = "trace", skip(self, visit))]
    pub fn walk<'a>(&'a self, order: Order, visit: impl FnMut(NodeRef<'a>)) {
        match order {
            Order::PreOrder => self.visit_root(pre_order(visit)),
            Order::InOrder => self.visit_root(in_order(visit)),
            Order::PostOrder => self.visit_root(post_order(visit)),
            Order::BreadthFirst => self.visit_root(breadth_first(visit)),
        }
    }

    /// Values in the given order.
    pub fn values(&self, order: Order) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.size());
        self.walk(order, |node| values.push(node.value()));
        values
    }
}
