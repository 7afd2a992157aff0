use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeRef, RBTree};
use crate::domain::traversal::in_order;

/// Marker printed for an absent child.
pub const NIL: &str = "nil";

pub trait TreeRender {
    /// Renders the tree shape with the default `value (color)` labels.
    fn to_tree_string(&self) -> Tree<String> {
        self.to_tree_string_with(&node_label)
    }

    fn to_tree_string_with(&self, label: &dyn Fn(NodeRef<'_>) -> String) -> Tree<String>;
}

pub fn node_label(node: NodeRef<'_>) -> String {
    format!("{} ({})", node.value(), node.color())
}

impl TreeRender for RBTree {
    #[instrument(level = "debug", skip_all)]
    fn to_tree_string_with(&self, label: &dyn Fn(NodeRef<'_>) -> String) -> Tree<String> {
        fn build(node: NodeRef<'_>, label: &dyn Fn(NodeRef<'_>) -> String) -> Tree<String> {
            let tree = Tree::new(label(node));
            if node.is_leaf() {
                return tree;
            }
            // both slots are shown once a node has any child, so left and right stay apart
            let leaves = [node.left(), node.right()]
                .into_iter()
                .map(|child| match child {
                    Some(child) => build(child, label),
                    None => Tree::new(NIL.to_string()),
                });
            tree.with_leaves(leaves)
        }

        self.visit_root(|root| match root {
            Some(root) => build(root, label),
            None => Tree::new("Empty tree".to_string()),
        })
    }
}

/// In-order listing, one `(value left right parent color)` group per node with the
/// root marked by a trailing `*`. An empty tree renders as the empty string.
impl fmt::Display for RBTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.visit_root(in_order(|node| {
            if result.is_ok() {
                result = write_node(f, node);
            }
        }));
        result
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: NodeRef<'_>) -> fmt::Result {
    let value_or_nil = |n: Option<NodeRef<'_>>| n.map_or(NIL.to_string(), |n| n.value().to_string());
    write!(
        f,
        "({} {} {} {} {})",
        node.value(),
        value_or_nil(node.left()),
        value_or_nil(node.right()),
        value_or_nil(node.parent()),
        node.color()
    )?;
    if node.is_root() {
        write!(f, "*")?;
    }
    Ok(())
}
