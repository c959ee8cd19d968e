use std::cmp::Ordering;

use crate::r#type::KdPoint;

/// Squared Euclidean distance between `a` and `b` over the first `dimensions` axes.
///
/// The square root is never taken: every comparison in the tree is monotonic under squaring.
#[inline]
pub(crate) fn sq_dist<A, B>(a: &A, b: &B, dimensions: usize) -> f64
where
    A: KdPoint + ?Sized,
    B: KdPoint + ?Sized,
{
    let mut sum = 0.0;
    for axis in 0..dimensions {
        let d = a.coordinate(axis) - b.coordinate(axis);
        sum += d * d;
    }
    sum
}

/// The first axis on which `point` has a NaN or infinite coordinate.
#[inline]
pub(crate) fn non_finite_axis<P: KdPoint + ?Sized>(point: &P, dimensions: usize) -> Option<usize> {
    (0..dimensions).find(|&axis| !point.coordinate(axis).is_finite())
}

/// Orders two points by their coordinate along `axis`.
///
/// Uses [`f64::total_cmp`] so that a NaN coordinate can not break the sort.
#[inline]
pub(crate) fn axis_cmp<P: KdPoint>(axis: usize) -> impl Fn(&P, &P) -> Ordering {
    move |a, b| a.coordinate(axis).total_cmp(&b.coordinate(axis))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn squared_distance_sums_all_axes() {
        assert_eq!(sq_dist(&[0.0, 0.0, 0.0], &[1.0, 2.0, 2.0], 3), 9.0);
        assert_eq!(sq_dist(&[4.0, 4.0], &[5.0, 5.0], 2), 2.0);
    }

    #[test]
    fn finds_first_non_finite_axis() {
        assert_eq!(non_finite_axis(&[1.0, 2.0, 3.0], 3), None);
        assert_eq!(non_finite_axis(&[1.0, f64::NAN, f64::INFINITY], 3), Some(1));
        assert_eq!(non_finite_axis(&[f64::NEG_INFINITY], 1), Some(0));
    }

    #[test]
    fn axis_ordering_uses_requested_coordinate() {
        let mut points = vec![[3.0, 0.0], [1.0, 2.0], [2.0, 1.0]];
        points.sort_by(axis_cmp(1));
        assert_eq!(points, vec![[3.0, 0.0], [2.0, 1.0], [1.0, 2.0]]);
        points.sort_by(axis_cmp(0));
        assert_eq!(points, vec![[1.0, 2.0], [2.0, 1.0], [3.0, 0.0]]);
    }
}
