use geo_traits::CoordTrait;
use num_traits::ToPrimitive;

/// A trait for values that can be stored in and queried against a [`KDTree`][crate::kdtree::KDTree].
///
/// A point has a fixed number of dimensions and exposes each coordinate as an `f64`. Nothing else
/// is required: no ordering, no hashing.
pub trait KdPoint {
    /// The number of coordinates of this point.
    fn dimensions(&self) -> usize;

    /// The coordinate along `axis`.
    ///
    /// Callers only ever pass `axis < self.dimensions()`; implementations may panic otherwise.
    /// A value that has no `f64` representation should be reported as NaN, which the tree
    /// rejects with [`KDTreeError::InvalidCoordinate`][crate::KDTreeError::InvalidCoordinate].
    fn coordinate(&self, axis: usize) -> f64;
}

#[inline]
fn to_f64<T: ToPrimitive>(value: &T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl<T: ToPrimitive, const D: usize> KdPoint for [T; D] {
    #[inline]
    fn dimensions(&self) -> usize {
        D
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        to_f64(&self[axis])
    }
}

impl<T: ToPrimitive> KdPoint for [T] {
    #[inline]
    fn dimensions(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        to_f64(&self[axis])
    }
}

impl<T: ToPrimitive> KdPoint for Vec<T> {
    #[inline]
    fn dimensions(&self) -> usize {
        self.len()
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        to_f64(&self[axis])
    }
}

impl<T: ToPrimitive> KdPoint for (T, T) {
    #[inline]
    fn dimensions(&self) -> usize {
        2
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        match axis {
            0 => to_f64(&self.0),
            1 => to_f64(&self.1),
            _ => panic!("Invalid index of coord"),
        }
    }
}

/// Adapter exposing any [`CoordTrait`] implementation as a [`KdPoint`].
///
/// The number of dimensions comes from the coordinate's [`Dimensions`][geo_traits::Dimensions],
/// so `Xyz` coordinates index three axes and `Xy` coordinates two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoord<C>(pub C);

impl<C> KdPoint for GeoCoord<C>
where
    C: CoordTrait,
    C::T: ToPrimitive,
{
    #[inline]
    fn dimensions(&self) -> usize {
        self.0.dim().size()
    }

    #[inline]
    fn coordinate(&self, axis: usize) -> f64 {
        to_f64(&self.0.nth_or_panic(axis))
    }
}
