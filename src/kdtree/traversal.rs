//! Utilities to traverse the KDTree structure.

use tinyvec::TinyVec;

use crate::kdtree::Node;

/// A depth-first, pre-order iterator over the nodes of a [`KDTree`][crate::kdtree::KDTree].
///
/// Yields `(depth, node)` with the root at depth 0, visiting a node before its
/// [`less`][Node::less] subtree and that before its [`greater`][Node::greater] subtree.
#[derive(Debug, Clone)]
pub struct PreOrder<'a, P> {
    // Use TinyVec to avoid heap allocations
    stack: TinyVec<[(Option<&'a Node<P>>, usize); 32]>,
}

impl<'a, P> PreOrder<'a, P> {
    pub(crate) fn new(root: Option<&'a Node<P>>) -> Self {
        let mut stack = TinyVec::new();
        if root.is_some() {
            stack.push((root, 0));
        }
        Self { stack }
    }
}

impl<'a, P> Iterator for PreOrder<'a, P> {
    type Item = (usize, &'a Node<P>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            let Some(node) = node else {
                continue;
            };

            // Note: pushed in backwards order to what gets popped
            if node.greater.is_some() {
                self.stack.push((node.greater(), depth + 1));
            }
            if node.less.is_some() {
                self.stack.push((node.less(), depth + 1));
            }
            return Some((depth, node));
        }
        None
    }
}
