use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Side;

/// Red-black or search-tree invariant violations reported by `RBTree::validate`.
///
/// These are programming errors in the rebalancing code, never a runtime failure
/// of a tree operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("root node {0} is red")]
    RedRoot(i64),

    #[error("red node {parent} has red child {child}")]
    RedChild { parent: i64, child: i64 },

    #[error("black height differs below node {value}: left {left}, right {right}")]
    BlackHeight { value: i64, left: usize, right: usize },

    #[error("{side} child {child} is out of order under parent {parent}")]
    Ordering { parent: i64, child: i64, side: Side },

    #[error("node {child} does not point back to its parent {parent:?}")]
    BrokenParentLink { child: i64, parent: Option<i64> },

    #[error("tree reports {reported} nodes but {reachable} are reachable from the root")]
    SizeMismatch { reported: usize, reachable: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Failures while loading or rendering `Settings`.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("serialize config: {0}")]
    Serialize(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
