use crate::bounding_volume::Aabb;

/// A node of an [`AabbTree`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum AabbTreeNode<T> {
    /// A leaf storing one item and its bounding box.
    Leaf {
        /// The bounding box of `item`.
        aabb: Aabb,
        /// The item stored on this leaf.
        item: T,
    },
    /// An internal node with exactly two children.
    Internal {
        /// The union of the bounding boxes of both children.
        aabb: Aabb,
        /// The indices of the left and right children in [`AabbTree::nodes`].
        children: [u32; 2],
    },
}

impl<T> AabbTreeNode<T> {
    /// The bounding box of this node.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        match self {
            Self::Leaf { aabb, .. } | Self::Internal { aabb, .. } => aabb,
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// A binary bounding volume hierarchy built by greedy incremental insertion.
///
/// Every leaf stores one item of type `T` together with its [`Aabb`]. Every internal node
/// bounds both of its children. The tree is never rebalanced: its shape only depends on
/// the order in which items were inserted, see [`AabbTree::insert`].
///
/// Nodes are stored in a flat arena and reference their children by index.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AabbTree<T> {
    pub(super) nodes: Vec<AabbTreeNode<T>>,
    pub(super) root: Option<u32>,
    pub(super) num_leaves: usize,
}

impl<T> Default for AabbTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AabbTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            num_leaves: 0,
        }
    }

    /// Builds a tree by inserting every element of `items`, in order.
    ///
    /// The bounding box of each item is computed by `aabb_of`.
    pub fn build<I, F>(items: I, mut aabb_of: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> Aabb,
    {
        let items = items.into_iter();
        let mut result = Self::new();
        result.nodes.reserve(items.size_hint().0 * 2);

        for item in items {
            let aabb = aabb_of(&item);
            result.insert(aabb, item);
        }

        result
    }

    /// The number of items stored in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_leaves
    }

    /// Is this tree empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The raw node arena of this tree.
    #[inline]
    pub fn nodes(&self) -> &[AabbTreeNode<T>] {
        &self.nodes
    }

    /// The index of the root node, if the tree isn’t empty.
    #[inline]
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    /// The bounding box of every item of this tree.
    ///
    /// This is an invalid AABB if the tree is empty.
    pub fn root_aabb(&self) -> Aabb {
        self.root
            .map(|id| *self.nodes[id as usize].aabb())
            .unwrap_or_else(Aabb::new_invalid)
    }

    /// The depth of this tree, i.e., the number of nodes on its longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };

        let mut max_depth = 0;
        let mut stack = vec![(root, 1)];

        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);

            if let AabbTreeNode::Internal { children, .. } = &self.nodes[id as usize] {
                stack.push((children[0], depth + 1));
                stack.push((children[1], depth + 1));
            }
        }

        max_depth
    }

    /// Iterates through every item stored in this tree, with its bounding box.
    ///
    /// Items are not yielded in any particular order.
    pub fn leaves(&self) -> impl Iterator<Item = (&Aabb, &T)> {
        self.nodes.iter().filter_map(|node| match node {
            AabbTreeNode::Leaf { aabb, item } => Some((aabb, item)),
            AabbTreeNode::Internal { .. } => None,
        })
    }
}

impl<T> FromIterator<(Aabb, T)> for AabbTree<T> {
    fn from_iter<I: IntoIterator<Item = (Aabb, T)>>(iter: I) -> Self {
        let mut result = Self::new();

        for (aabb, item) in iter {
            result.insert(aabb, item);
        }

        result
    }
}
