use super::{AabbTree, AabbTreeNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use std::collections::VecDeque;

/// Breadth-first iterator over the items of an [`AabbTree`] whose bounding box intersects a
/// query box.
///
/// Created by [`AabbTree::search`].
pub struct AabbTreeSearch<'a, T> {
    tree: &'a AabbTree<T>,
    query: Aabb,
    queue: VecDeque<u32>,
}

impl<'a, T> AabbTreeSearch<'a, T> {
    fn new(tree: &'a AabbTree<T>, query: Aabb) -> Self {
        let mut queue = VecDeque::new();
        queue.extend(tree.root);
        Self { tree, query, queue }
    }
}

impl<'a, T> Iterator for AabbTreeSearch<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.queue.pop_front() {
            let node = &self.tree.nodes[id as usize];

            if !node.aabb().intersects(&self.query) {
                continue;
            }

            match node {
                AabbTreeNode::Leaf { item, .. } => return Some(item),
                AabbTreeNode::Internal { children, .. } => self.queue.extend(children),
            }
        }

        None
    }
}

impl<T> AabbTree<T> {
    /// Lazily enumerates every item whose bounding box intersects `aabb`.
    ///
    /// Boxes that only touch `aabb` are included. The tree is explored breadth-first,
    /// skipping the subtrees whose box doesn’t intersect `aabb`.
    pub fn search(&self, aabb: &Aabb) -> AabbTreeSearch<'_, T> {
        AabbTreeSearch::new(self, *aabb)
    }

    /// Collects every item whose bounding box intersects `aabb`.
    ///
    /// This is the eager version of [`AabbTree::search`].
    pub fn search_vec(&self, aabb: &Aabb) -> Vec<&T> {
        self.search(aabb).collect()
    }
}
