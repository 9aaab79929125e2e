use crate::bounding_volume::Aabb;

/// A named group of faces of a [`Mesh`](crate::shape::Mesh).
///
/// Parts don't own geometry: they reference faces of their mesh by index. A face may belong to
/// several parts.
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Part {
    pub(crate) name: String,
    pub(crate) faces: Vec<u32>,
    pub(crate) aabb: Aabb,
}

impl Part {
    /// The name identifying this part within its mesh.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The indices, in [`Mesh::faces`](crate::shape::Mesh::faces), of the faces of this part.
    #[inline]
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// The bounding box of every polygon of this part.
    ///
    /// This is an invalid AABB if the part has no polygon.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }
}
