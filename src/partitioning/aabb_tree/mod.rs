pub use aabb_tree::{AabbTree, AabbTreeNode};
pub use aabb_tree_search::AabbTreeSearch;

mod aabb_tree;
mod aabb_tree_insert;
mod aabb_tree_search;
mod aabb_tree_validation;
