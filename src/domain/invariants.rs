use tracing::{debug, instrument};

use super::arena::RBTree;
use super::node::{NodeRef, Side};
use crate::errors::{TreeError, TreeResult};

impl RBTree {
    /// Checks the red-black and search-tree invariants, returning the first violation.
    ///
    /// Links, ordering and red children are checked per parent/child pair while walking
    /// the tree breadth-first, then black heights are computed bottom-up.
    #[instrument(level = "debug", skip(self))]
    pub fn validate(&self) -> TreeResult<()> {
        self.visit_root(|root| {
            let Some(root) = root else {
                return self.check_size(0);
            };
            if root.color().is_red() {
                return Err(TreeError::RedRoot(root.value()));
            }

            let mut reachable = 0;
            let mut result = Ok(());
            self.walk(super::Order::BreadthFirst, |node| {
                reachable += 1;
                if result.is_ok() {
                    result = check_links(node);
                }
            });
            result?;
            self.check_size(reachable)?;
            black_height(Some(root))?;
            debug!(size = reachable, "tree is valid");
            Ok(())
        })
    }

    /// Panics on an invariant violation when debug assertions are enabled.
    /// Does nothing in release builds.
    pub fn assert_valid(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.validate() {
                panic!("red-black tree invariant violated: {e}\n{self}");
            }
        }
    }

    fn check_size(&self, reachable: usize) -> TreeResult<()> {
        if self.size() == reachable {
            Ok(())
        } else {
            Err(TreeError::SizeMismatch {
                reported: self.size(),
                reachable,
            })
        }
    }
}

fn check_links(node: NodeRef<'_>) -> TreeResult<()> {
    for side in [Side::Left, Side::Right] {
        let Some(child) = node.child(side) else {
            continue;
        };
        if child.parent() != Some(node) {
            return Err(TreeError::BrokenParentLink {
                child: child.value(),
                parent: child.parent().map(|p| p.value()),
            });
        }
        let ordered = match side {
            Side::Left => child.value() < node.value(),
            Side::Right => child.value() > node.value(),
        };
        if !ordered {
            return Err(TreeError::Ordering {
                parent: node.value(),
                child: child.value(),
                side,
            });
        }
        if node.color().is_red() && child.color().is_red() {
            return Err(TreeError::RedChild {
                parent: node.value(),
                child: child.value(),
            });
        }
    }
    Ok(())
}

// Black height of the subtree at `node`; an absent child counts as one black node.
fn black_height(node: Option<NodeRef<'_>>) -> TreeResult<usize> {
    let Some(node) = node else {
        return Ok(1);
    };
    let left = black_height(node.left())?;
    let right = black_height(node.right())?;
    if left != right {
        return Err(TreeError::BlackHeight {
            value: node.value(),
            left,
            right,
        });
    }
    Ok(left + usize::from(node.color().is_black()))
}
