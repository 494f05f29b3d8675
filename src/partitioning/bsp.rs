use crate::shape::Plane;

/// Identifier of the material a BSP leaf is made of.
pub type Material = u32;

/// Read-only access to one node of a binary space partitioning tree.
///
/// Polytope clipping only ever walks the tree downward, so this is all it needs: the
/// splitting plane of internal nodes, their children, and the material of leaves.
/// Implement it on top of whatever storage the tree actually uses.
pub trait BspNode {
    /// The splitting plane of this node.
    ///
    /// The front child covers the half-space where [`Plane::signed_distance`] is
    /// non-negative. Meaningless for leaves.
    fn plane(&self) -> &Plane;

    /// The child covering the front of [`Self::plane`], if any.
    fn front(&self) -> Option<&Self>;

    /// The child covering the back of [`Self::plane`], if any.
    fn back(&self) -> Option<&Self>;

    /// The material of this node. Only meaningful for leaves.
    fn material(&self) -> Material;

    /// Is this node a leaf, i.e., does it have neither a front or back child?
    #[inline]
    fn is_leaf(&self) -> bool {
        self.front().is_none() && self.back().is_none()
    }
}

/// A plain owned BSP tree with boxed children.
///
/// An internal node may lack one of its children: the corresponding half-space is then
/// dropped by the clipper, without producing any output volume.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BspTree {
    plane: Plane,
    front: Option<Box<BspTree>>,
    back: Option<Box<BspTree>>,
    material: Material,
}

impl BspTree {
    /// A leaf made of `material`.
    pub fn leaf(material: Material) -> Self {
        Self {
            plane: Plane::new(na::zero(), 0.0),
            front: None,
            back: None,
            material,
        }
    }

    /// An internal node with both children.
    pub fn split(plane: Plane, front: BspTree, back: BspTree) -> Self {
        Self::node(plane, Some(front), Some(back))
    }

    /// An internal node, possibly missing one of its children.
    ///
    /// If both children are `None` the result behaves as a leaf with material `0`.
    pub fn node(plane: Plane, front: Option<BspTree>, back: Option<BspTree>) -> Self {
        Self {
            plane,
            front: front.map(Box::new),
            back: back.map(Box::new),
            material: 0,
        }
    }

    /// The number of nodes in this tree, leaves included.
    pub fn num_nodes(&self) -> usize {
        let mut stack = vec![self];
        let mut count = 0;

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        count
    }
}

impl BspNode for BspTree {
    #[inline]
    fn plane(&self) -> &Plane {
        &self.plane
    }

    #[inline]
    fn front(&self) -> Option<&Self> {
        self.front.as_deref()
    }

    #[inline]
    fn back(&self) -> Option<&Self> {
        self.back.as_deref()
    }

    #[inline]
    fn material(&self) -> Material {
        self.material
    }
}
