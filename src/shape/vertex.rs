use crate::math::{Isometry, Point, Point2, Real, Vector};

/// A mesh vertex: a position, a shading normal and texture coordinates.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Vertex {
    /// The position of this vertex.
    pub pos: Point<Real>,
    /// The shading normal of this vertex. It isn’t necessarily normalized.
    pub normal: Vector<Real>,
    /// The texture coordinates of this vertex.
    pub uv: Point2<Real>,
}

impl Vertex {
    /// Creates a new vertex.
    #[inline]
    pub fn new(pos: Point<Real>, normal: Vector<Real>, uv: Point2<Real>) -> Self {
        Self { pos, normal, uv }
    }

    /// Creates a vertex with a zero normal and zero texture coordinates.
    #[inline]
    pub fn from_position(pos: Point<Real>) -> Self {
        Self::new(pos, Vector::zeros(), Point2::origin())
    }

    /// Are all the components of this vertex finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.iter().all(|x| x.is_finite())
            && self.normal.iter().all(|x| x.is_finite())
            && self.uv.iter().all(|x| x.is_finite())
    }

    /// This vertex with its position and normal transformed by `m`.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.pos, m * self.normal, self.uv)
    }

    /// The key used to detect duplicate vertices.
    ///
    /// Negative zeros are normalized so that `0.0` and `-0.0` map to the same key.
    pub(crate) fn bits(&self) -> [u64; 8] {
        let bits = |x: Real| ((x as f64) + 0.0).to_bits();
        [
            bits(self.pos.x),
            bits(self.pos.y),
            bits(self.pos.z),
            bits(self.normal.x),
            bits(self.normal.y),
            bits(self.normal.z),
            bits(self.uv.x),
            bits(self.uv.y),
        ]
    }
}
