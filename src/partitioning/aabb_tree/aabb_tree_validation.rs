use super::{AabbTree, AabbTreeNode};
use crate::bounding_volume::BoundingVolume;

impl<T> AabbTree<T> {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (every node is reachable exactly
    /// once from the root) and geometrically correct (the box of an internal node contains the
    /// boxes of its children).
    ///
    /// Returns the calculated leaf count.
    pub fn assert_well_formed(&self) -> usize {
        let Some(root) = self.root else {
            assert!(self.nodes.is_empty());
            assert_eq!(self.num_leaves, 0);
            return 0;
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        let mut leaf_count = 0;

        while let Some(id) = stack.pop() {
            assert!(
                !std::mem::replace(&mut visited[id as usize], true),
                "node {} is reachable twice",
                id
            );

            match &self.nodes[id as usize] {
                AabbTreeNode::Leaf { .. } => leaf_count += 1,
                AabbTreeNode::Internal { aabb, children } => {
                    for child in children {
                        assert!(aabb.contains(self.nodes[*child as usize].aabb()));
                        stack.push(*child);
                    }
                }
            }
        }

        assert!(visited.iter().all(|v| *v), "some nodes are unreachable");
        assert_eq!(leaf_count, self.num_leaves);
        leaf_count
    }
}
