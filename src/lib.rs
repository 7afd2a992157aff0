//! Red-black tree over `i64` keys.
//!
//! Ordered insertion with the classic five-case fix-up, membership lookup, size and
//! height queries, cloning, and pre-order, in-order, post-order and breadth-first
//! traversals. Every read operation goes through a single root entry point,
//! [`RBTree::visit_root`], and the visitor builders in [`traversal`].
//!
//! ```
//! use rbtree::RBTree;
//!
//! let mut tree = RBTree::new();
//! tree.insert_all([5, 4, 7, 3, 2, 6, 8, 9]);
//! assert_eq!(tree.to_vec(), vec![2, 3, 4, 5, 6, 7, 8, 9]);
//! assert!(tree.contains(7));
//! assert_eq!(tree.iter().next(), Some(2));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use domain::traversal;
pub use domain::{Color, Iter, NodeRef, Order, RBTree, Side};
pub use errors::{SettingsError, TreeError, TreeResult};
pub use tree_traits::TreeRender;
