//! Domain layer: the red-black tree and everything built on its traversal engine
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod derived;
mod invariants;
pub mod node;
pub mod traversal;
pub mod tree_queue;
pub mod tree_stack;

pub use arena::RBTree;
pub use derived::Iter;
pub use node::{Color, NodeRef, Side};
pub use traversal::Order;
pub use tree_queue::BreadthFirstIter;
pub use tree_stack::{InOrderIter, PostOrderIter, PreOrderIter};
