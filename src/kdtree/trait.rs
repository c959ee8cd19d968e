use crate::error::{KDTreeError, Result};
use crate::kdtree::search::{self, Neighbour};
use crate::kdtree::{KDTree, Node, PreOrder};
use crate::r#type::KdPoint;
use crate::util::non_finite_axis;

/// A trait for searching and accessing data out of a KDTree.
pub trait KDTreeIndex<P: KdPoint>: Sized {
    /// The number of coordinates every point in this tree has.
    fn dimensions(&self) -> usize;

    /// The number of items in this KDTree
    fn num_items(&self) -> usize;

    /// Access the root node of the KDTree for manual traversal.
    ///
    /// `None` only for a tree built from zero points with
    /// [`allow_empty`][crate::kdtree::KDTreeBuilder::allow_empty].
    fn root(&self) -> Option<&Node<P>>;

    /// Returns `true` if the tree holds no points.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// The number of levels of the tree; 0 for an empty tree.
    fn height(&self) -> usize {
        PreOrder::new(self.root())
            .map(|(depth, _)| depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Search the index for the point closest to `query` under Euclidean distance.
    ///
    /// The answer is exact. Among points at exactly the same distance the result is
    /// deterministic for a given tree and query, but depends on the tree's shape.
    ///
    /// ```
    /// use median_kdtree::kdtree::{KDTree, KDTreeIndex};
    ///
    /// let mut points = vec![[0., 0.], [5., 5.], [9., 1.], [2., 3.], [8., 7.]];
    /// let tree = KDTree::new(2, &mut points).unwrap();
    ///
    /// let nearest = tree.nearest(&[4., 4.]).unwrap();
    /// assert_eq!(nearest.point(), &[5., 5.]);
    /// assert_eq!(nearest.sq_dist(), 2.);
    /// ```
    ///
    /// Fails with [`KDTreeError::EmptyTree`] if the tree has no root and with
    /// [`KDTreeError::DimensionMismatch`] if `query` does not have [`dimensions`][Self::dimensions]
    /// coordinates. A NaN or infinite query coordinate fails with
    /// [`KDTreeError::InvalidCoordinate`].
    fn nearest<Q: KdPoint + ?Sized>(&self, query: &Q) -> Result<Neighbour<'_, P>> {
        let root = self.root().ok_or(KDTreeError::EmptyTree)?;
        if query.dimensions() != self.dimensions() {
            return Err(KDTreeError::DimensionMismatch {
                expected: self.dimensions(),
                found: query.dimensions(),
                index: None,
            });
        }
        if let Some(axis) = non_finite_axis(query, self.dimensions()) {
            return Err(KDTreeError::InvalidCoordinate { axis, index: None });
        }
        search::nearest(root, query, self.dimensions()).ok_or(KDTreeError::EmptyTree)
    }

    /// Search the index for the point closest to `query`.
    ///
    /// Shorthand for [`nearest`][Self::nearest] when the distance is not needed.
    fn nearest_neighbour<Q: KdPoint + ?Sized>(&self, query: &Q) -> Result<&P> {
        Ok(self.nearest(query)?.point())
    }
}

impl<P: KdPoint> KDTreeIndex<P> for KDTree<P> {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn num_items(&self) -> usize {
        self.num_items
    }

    fn root(&self) -> Option<&Node<P>> {
        self.root.as_deref()
    }
}
