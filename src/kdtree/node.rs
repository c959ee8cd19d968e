/// A single node of a [`KDTree`][crate::kdtree::KDTree].
///
/// Every node stores one point and the axis it splits on. Points reachable through
/// [`less`][Node::less] have a coordinate on that axis no greater than this node's, points
/// reachable through [`greater`][Node::greater] no smaller. Equal coordinates may appear on
/// either side.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<P> {
    pub(crate) point: P,
    pub(crate) axis: usize,
    pub(crate) less: Option<Box<Node<P>>>,
    pub(crate) greater: Option<Box<Node<P>>>,
}

impl<P> Node<P> {
    /// The point stored in this node.
    #[inline]
    pub fn point(&self) -> &P {
        &self.point
    }

    /// The axis this node splits on: its depth modulo the tree's dimensions.
    #[inline]
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The subtree of points at or below this node's coordinate on [`axis`][Node::axis].
    #[inline]
    pub fn less(&self) -> Option<&Node<P>> {
        self.less.as_deref()
    }

    /// The subtree of points at or above this node's coordinate on [`axis`][Node::axis].
    #[inline]
    pub fn greater(&self) -> Option<&Node<P>> {
        self.greater.as_deref()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.less.is_none() && self.greater.is_none()
    }
}
