use std::fmt;

use generational_arena::{Arena, Index};

/// Node color. Absent children count as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }

    pub fn is_black(self) -> bool {
        matches!(self, Self::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Black => write!(f, "black"),
        }
    }
}

/// Which child slot of a parent a node occupies. Also used as the rotation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Tree node stored in the arena.
///
/// `left` and `right` are owning links in the sense that every node is reachable from
/// exactly one parent slot; `parent` is a navigation aid for rebalancing only.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) value: i64,
    pub(crate) color: Color,
    pub(crate) parent: Option<Index>,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
}

impl Node {
    /// New nodes are red until the fix-up decides otherwise.
    pub(crate) fn new(value: i64, parent: Option<Index>) -> Self {
        Self {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Index>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}

/// Read-only view of a node, handed to traversal visitors.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    arena: &'a Arena<Node>,
    idx: Index,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(arena: &'a Arena<Node>, idx: Index) -> Self {
        Self { arena, idx }
    }

    fn node(&self) -> &'a Node {
        &self.arena[self.idx]
    }

    fn link(&self, idx: Option<Index>) -> Option<NodeRef<'a>> {
        idx.map(|idx| NodeRef::new(self.arena, idx))
    }

    pub fn value(&self) -> i64 {
        self.node().value
    }

    pub fn color(&self) -> Color {
        self.node().color
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().left)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().right)
    }

    pub fn child(&self, side: Side) -> Option<NodeRef<'a>> {
        self.link(self.node().child(side))
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().parent)
    }

    /// Only the root has no parent.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().left.is_none() && self.node().right.is_none()
    }

    /// Slot this node occupies under its parent, `None` for the root.
    pub fn side(&self) -> Option<Side> {
        self.parent().map(|parent| {
            if parent.node().left == Some(self.idx) {
                Side::Left
            } else {
                Side::Right
            }
        })
    }

    #[cfg(test)]
    pub(crate) fn index(&self) -> Index {
        self.idx
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.idx == other.idx
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", &self.value())
            .field("color", &self.color())
            .field("left", &self.left().map(|n| n.value()))
            .field("right", &self.right().map(|n| n.value()))
            .field("parent", &self.parent().map(|n| n.value()))
            .finish()
    }
}
