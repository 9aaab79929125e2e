use super::{AabbTree, AabbTreeNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use std::mem;

impl<T> AabbTree<T> {
    /// Inserts a new item with the bounding box `aabb`.
    ///
    /// The insertion descends from the root, growing the box of every visited internal node
    /// so it contains `aabb`. At each internal node it follows the child whose box shares the
    /// largest volume with `aabb`. When both volumes are equal (which is common for flat boxes),
    /// the child whose surface area grows the least is chosen, and the right child on a perfect
    /// tie.
    ///
    /// Once a leaf is reached, it is replaced by an internal node whose children are the existing
    /// leaf and the new one. The leaf with the strictly larger volume is placed on the right.
    pub fn insert(&mut self, aabb: Aabb, item: T) {
        let new_leaf = self.nodes.len() as u32;
        self.nodes.push(AabbTreeNode::Leaf { aabb, item });
        self.num_leaves += 1;

        let Some(mut curr) = self.root else {
            self.root = Some(new_leaf);
            return;
        };

        loop {
            match &mut self.nodes[curr as usize] {
                AabbTreeNode::Internal {
                    aabb: node_aabb,
                    children,
                } => {
                    node_aabb.merge(&aabb);
                    let children = *children;
                    curr = self.select_child(children, &aabb);
                }
                AabbTreeNode::Leaf {
                    aabb: leaf_aabb, ..
                } => {
                    let leaf_aabb = *leaf_aabb;
                    let moved_leaf = self.nodes.len() as u32;
                    let children = if leaf_aabb.volume() > aabb.volume() {
                        [new_leaf, moved_leaf]
                    } else {
                        [moved_leaf, new_leaf]
                    };

                    let internal = AabbTreeNode::Internal {
                        aabb: leaf_aabb.merged(&aabb),
                        children,
                    };
                    let old_leaf = mem::replace(&mut self.nodes[curr as usize], internal);
                    self.nodes.push(old_leaf);
                    return;
                }
            }
        }
    }

    fn select_child(&self, children: [u32; 2], aabb: &Aabb) -> u32 {
        let left = self.nodes[children[0] as usize].aabb();
        let right = self.nodes[children[1] as usize].aabb();
        let left_overlap = left.intersection_volume(aabb);
        let right_overlap = right.intersection_volume(aabb);

        if left_overlap > right_overlap {
            return children[0];
        }

        if right_overlap > left_overlap {
            return children[1];
        }

        let left_growth = left.merged(aabb).half_area() - left.half_area();
        let right_growth = right.merged(aabb).half_area() - right.half_area();

        if left_growth < right_growth {
            children[0]
        } else {
            children[1]
        }
    }
}
