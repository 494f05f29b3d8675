//! Spatial partitioning tools.

pub use self::bsp::{BspNode, BspTree, Material};

mod bsp;
