use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KDTreeError {
    /// A tree was requested with zero dimensions.
    #[error("Invalid dimensionality: a tree needs at least one dimension")]
    InvalidDimension,

    /// The tree has no root: it was built from zero points.
    #[error("Empty tree: no points to build from or search")]
    EmptyTree,

    /// A point does not have the dimensionality of the tree.
    ///
    /// `index` is the position of the offending input point during construction and `None` for
    /// a query point.
    #[error("Dimension mismatch: expected {expected} coordinates, got {found}{}", point_suffix(.index))]
    DimensionMismatch {
        expected: usize,
        found: usize,
        index: Option<usize>,
    },

    /// A coordinate is NaN, infinite, or could not be represented as an `f64`.
    ///
    /// `index` is the position of the offending input point during construction and `None` for
    /// a query point.
    #[error("Invalid coordinate on axis {axis}{}: coordinates must be finite", point_suffix(.index))]
    InvalidCoordinate { axis: usize, index: Option<usize> },
}

fn point_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at point {i}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, KDTreeError>;
