//! Branch-and-bound nearest neighbour search.

use tinyvec::TinyVec;

use crate::kdtree::Node;
use crate::r#type::KdPoint;
use crate::util::sq_dist;

/// The result of a nearest neighbour query.
#[derive(Debug, PartialEq)]
pub struct Neighbour<'a, P> {
    point: &'a P,
    sq_dist: f64,
}

impl<P> Clone for Neighbour<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Neighbour<'_, P> {}

impl<'a, P> Neighbour<'a, P> {
    /// The nearest point stored in the tree.
    #[inline]
    pub fn point(&self) -> &'a P {
        self.point
    }

    /// The squared Euclidean distance from the query to [`point`][Self::point].
    #[inline]
    pub fn sq_dist(&self) -> f64 {
        self.sq_dist
    }

    /// The Euclidean distance from the query to [`point`][Self::point].
    #[inline]
    pub fn distance(&self) -> f64 {
        self.sq_dist.sqrt()
    }
}

/// What to do when a node is popped off the search stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Step {
    /// First visit: descend into the near child, or score the node if there is none.
    #[default]
    Descend,
    /// The near subtree is exhausted: score the node itself.
    Unwind,
}

/// Find the point under `root` closest to `query`.
///
/// Equivalent to the recursive formulation: descend into the child on the query's side of the
/// split first, score each node on the way back up, and only then visit the other child if the
/// splitting plane is strictly closer than the best squared distance found so far. The best
/// candidate is replaced only by a strictly closer one, so among equidistant points the first
/// scored in that order wins.
pub(crate) fn nearest<'a, P, Q>(
    root: &'a Node<P>,
    query: &Q,
    dimensions: usize,
) -> Option<Neighbour<'a, P>>
where
    P: KdPoint,
    Q: KdPoint + ?Sized,
{
    // Use TinyVec to avoid heap allocations
    let mut stack: TinyVec<[(Option<&'a Node<P>>, Step); 32]> = TinyVec::new();
    stack.push((Some(root), Step::Descend));

    let mut best: Option<Neighbour<'a, P>> = None;
    let mut visited = 0usize;

    while let Some((node, step)) = stack.pop() {
        let Some(node) = node else {
            continue;
        };

        let split = node.point.coordinate(node.axis);
        let q = query.coordinate(node.axis);
        let (near, far) = if q < split {
            (node.less(), node.greater())
        } else {
            (node.greater(), node.less())
        };

        match (step, near) {
            (Step::Descend, Some(near)) => {
                visited += 1;
                // Note: pushed in backwards order to what gets popped
                stack.push((Some(node), Step::Unwind));
                stack.push((Some(near), Step::Descend));
                continue;
            }
            (Step::Descend, None) => {
                visited += 1;
                consider(&mut best, node, query, dimensions);
            }
            (Step::Unwind, _) => consider(&mut best, node, query, dimensions),
        }

        // The far half-space can only hold a closer point if the hypersphere around the query
        // with the best radius crosses the splitting plane. Both sides are squared.
        let delta = q - split;
        if let (Some(far), Some(current)) = (far, best) {
            if delta * delta < current.sq_dist {
                stack.push((Some(far), Step::Descend));
            }
        }
    }

    if let Some(best) = best {
        tracing::trace!(visited, sq_dist = best.sq_dist, "nearest neighbour found");
    }
    best
}

#[inline]
fn consider<'a, P, Q>(
    best: &mut Option<Neighbour<'a, P>>,
    node: &'a Node<P>,
    query: &Q,
    dimensions: usize,
) where
    P: KdPoint,
    Q: KdPoint + ?Sized,
{
    let dist = sq_dist(&node.point, query, dimensions);
    let closer = match best {
        Some(current) => dist < current.sq_dist,
        None => true,
    };
    if closer {
        *best = Some(Neighbour {
            point: &node.point,
            sq_dist: dist,
        });
    }
}
