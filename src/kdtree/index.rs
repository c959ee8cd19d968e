use std::fmt;

use crate::error::Result;
use crate::kdtree::{KDTreeBuilder, Node, PreOrder};
use crate::r#type::KdPoint;

/// An owned, immutable K-D Tree.
///
/// Usually this will be created via [`KDTreeBuilder`], or [`KDTree::new`] for the default
/// configuration. Queries live on the [`KDTreeIndex`][crate::kdtree::KDTreeIndex] trait.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<P> {
    pub(crate) dimensions: usize,
    pub(crate) num_items: usize,
    pub(crate) root: Option<Box<Node<P>>>,
}

impl<P: KdPoint + Clone> KDTree<P> {
    /// Build a tree over `points` with the default [`KDTreeBuilder`] configuration.
    ///
    /// **The slice is reordered in place.** See [`KDTreeBuilder::finish`].
    pub fn new(dimensions: usize, points: &mut [P]) -> Result<Self> {
        KDTreeBuilder::new(dimensions).finish(points)
    }
}

impl<P> KDTree<P> {
    /// Iterate over all nodes in pre-order, together with their depth.
    pub fn iter(&self) -> PreOrder<'_, P> {
        PreOrder::new(self.root.as_deref())
    }
}

impl<P: fmt::Debug> fmt::Display for KDTree<P> {
    /// One line per node in pre-order, indented by depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, node) in self.iter() {
            writeln!(
                f,
                "{:indent$}axis {} | {:?}",
                "",
                node.axis(),
                node.point(),
                indent = depth * 2
            )?;
        }
        Ok(())
    }
}
