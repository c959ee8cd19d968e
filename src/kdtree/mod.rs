//! An implementation of a static, median-split K-D Tree with exact nearest-neighbour search.

#![warn(missing_docs)]

mod builder;
mod index;
mod node;
mod search;
mod r#trait;
mod traversal;

pub use builder::{KDTreeBuilder, SplitStrategy};
pub use index::KDTree;
pub use node::Node;
pub use r#trait::KDTreeIndex;
pub use search::Neighbour;
pub use traversal::PreOrder;
