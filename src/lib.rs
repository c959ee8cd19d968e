#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;
mod util;

pub use error::{KDTreeError, Result};
pub use r#type::{GeoCoord, KdPoint};

#[cfg(test)]
pub(crate) mod test;
