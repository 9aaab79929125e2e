//! Spatial partitioning tools.

pub use self::aabb_tree::{AabbTree, AabbTreeNode, AabbTreeSearch};

mod aabb_tree;
