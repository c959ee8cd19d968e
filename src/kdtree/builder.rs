use std::cmp;

use crate::error::{KDTreeError, Result};
use crate::kdtree::{KDTree, KDTreeIndex, Node};
use crate::r#type::KdPoint;
use crate::util::{axis_cmp, non_finite_axis};

/// How each range of points is ordered around its median during construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Fully sort every range on its axis before taking the median.
    ///
    /// The sort is stable, so points with equal coordinates keep their relative order.
    #[default]
    Sort,

    /// Partition every range around its median with Floyd-Rivest selection.
    ///
    /// Linear time per range instead of `O(n log n)`. The median *value* is the same as with
    /// [`SplitStrategy::Sort`], but among points sharing that value a different one may end up in
    /// the node, which can change the shape of the tree (never the result distance of a query).
    Select,
}

/// A builder to create a [`KDTree`].
///
/// ```
/// use median_kdtree::kdtree::{KDTreeBuilder, KDTreeIndex, SplitStrategy};
///
/// let mut points = vec![[0., 0.], [5., 5.], [9., 1.], [2., 3.], [8., 7.]];
/// let tree = KDTreeBuilder::new(2)
///     .split_strategy(SplitStrategy::Select)
///     .finish(&mut points)
///     .unwrap();
/// assert_eq!(tree.num_items(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct KDTreeBuilder {
    dimensions: usize,
    strategy: SplitStrategy,
    allow_empty: bool,
}

impl KDTreeBuilder {
    /// Create a new builder for points with the provided number of dimensions.
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions,
            strategy: SplitStrategy::default(),
            allow_empty: false,
        }
    }

    /// Set how each range is split around its median. Defaults to [`SplitStrategy::Sort`].
    pub fn split_strategy(mut self, strategy: SplitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Accept zero points and produce a tree without a root instead of failing with
    /// [`KDTreeError::EmptyTree`]. Queries against such a tree still fail with `EmptyTree`.
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    /// Consume the points, performing the k-d sort and generating a KDTree ready for queries.
    ///
    /// **The slice is reordered in place** into k-d order; do not rely on its original order
    /// afterwards. Use [`finish_copied`][Self::finish_copied] to keep it.
    pub fn finish<P: KdPoint + Clone>(&self, points: &mut [P]) -> Result<KDTree<P>> {
        self.prepare(points)?;
        Ok(self.assemble(points.to_vec()))
    }

    /// Like [`finish`][Self::finish], but takes ownership of the points so none are cloned.
    pub fn finish_owned<P: KdPoint>(&self, mut points: Vec<P>) -> Result<KDTree<P>> {
        self.prepare(&mut points)?;
        Ok(self.assemble(points))
    }

    /// Like [`finish`][Self::finish], but leaves the caller's slice untouched.
    pub fn finish_copied<P: KdPoint + Clone>(&self, points: &[P]) -> Result<KDTree<P>> {
        self.finish_owned(points.to_vec())
    }

    /// Validate the input and kd-sort it in place.
    #[tracing::instrument(
        skip_all,
        fields(dimensions = self.dimensions, num_items = points.len(), strategy = ?self.strategy)
    )]
    fn prepare<P: KdPoint>(&self, points: &mut [P]) -> Result<()> {
        if self.dimensions == 0 {
            return Err(KDTreeError::InvalidDimension);
        }
        if points.is_empty() && !self.allow_empty {
            return Err(KDTreeError::EmptyTree);
        }
        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| p.dimensions() != self.dimensions)
        {
            return Err(KDTreeError::DimensionMismatch {
                expected: self.dimensions,
                found: point.dimensions(),
                index: Some(index),
            });
        }

        for (index, point) in points.iter().enumerate() {
            if let Some(axis) = non_finite_axis(point, self.dimensions) {
                return Err(KDTreeError::InvalidCoordinate {
                    axis,
                    index: Some(index),
                });
            }
        }

        sort(points, self.dimensions, self.strategy, 0);
        Ok(())
    }

    fn assemble<P: KdPoint>(&self, points: Vec<P>) -> KDTree<P> {
        let num_items = points.len();
        let tree = KDTree {
            dimensions: self.dimensions,
            num_items,
            root: build_node(points, self.dimensions, 0),
        };
        tracing::debug!(num_items, height = tree.height(), "built kd-tree");
        tree
    }
}

/// Recursively order `points` so that the median of every range, taken on the axis of its depth,
/// sits at index `(len - 1) / 2` with smaller-or-equal coordinates before it and
/// greater-or-equal coordinates after it.
fn sort<P: KdPoint>(points: &mut [P], dimensions: usize, strategy: SplitStrategy, depth: usize) {
    if points.len() <= 1 {
        return;
    }

    let axis = depth % dimensions;
    let m = (points.len() - 1) / 2;

    match strategy {
        SplitStrategy::Sort => points.sort_by(axis_cmp(axis)),
        SplitStrategy::Select => select(points, m, 0, points.len() - 1, axis),
    }

    let (less, rest) = points.split_at_mut(m);
    sort(less, dimensions, strategy, depth + 1);
    sort(&mut rest[1..], dimensions, strategy, depth + 1);
}

/// Turn a kd-sorted range into owned nodes, splitting at the same medians [`sort`] used.
fn build_node<P>(mut points: Vec<P>, dimensions: usize, depth: usize) -> Option<Box<Node<P>>> {
    if points.is_empty() {
        return None;
    }

    let m = (points.len() - 1) / 2;
    let mut median = points.split_off(m);
    let greater = median.split_off(1);
    let point = median.pop()?;

    Some(Box::new(Node {
        point,
        axis: depth % dimensions,
        less: build_node(points, dimensions, depth + 1),
        greater: build_node(greater, dimensions, depth + 1),
    }))
}

/// Custom Floyd-Rivest selection algorithm: reorder points so that [left..k-1] items are
/// not greater than the k-th item on `axis` and [k+1..right] items are not smaller.
fn select<P: KdPoint>(points: &mut [P], k: usize, mut left: usize, mut right: usize, axis: usize) {
    while right > left {
        if right - left > 600 {
            let n = (right - left + 1) as f64;
            let m = (k - left + 1) as f64;
            let z = f64::ln(n);
            let s = 0.5 * f64::exp((2.0 * z) / 3.0);
            let sd = 0.5
                * f64::sqrt((z * s * (n - s)) / n)
                * (if m - n / 2.0 < 0.0 { -1.0 } else { 1.0 });
            let new_left = cmp::max(left, f64::floor(k as f64 - (m * s) / n + sd) as usize);
            let new_right = cmp::min(
                right,
                f64::floor(k as f64 + ((n - m) * s) / n + sd) as usize,
            );
            select(points, k, new_left, new_right, axis);
        }

        let t = points[k].coordinate(axis);
        let mut i = left;
        let mut j = right;

        points.swap(left, k);
        if points[right].coordinate(axis) > t {
            points.swap(left, right);
        }

        while i < j {
            points.swap(i, j);
            i += 1;
            j -= 1;
            while points[i].coordinate(axis) < t {
                i += 1;
            }
            while points[j].coordinate(axis) > t {
                j -= 1;
            }
        }

        if points[left].coordinate(axis) == t {
            points.swap(left, j);
        } else {
            j += 1;
            points.swap(j, right);
        }

        if j <= k {
            left = j + 1;
        }
        if k <= j {
            // j == 0 only when k == 0, in which case left has already moved past right
            right = j.saturating_sub(1);
        }
    }
}
