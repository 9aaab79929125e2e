//! Definition of the quad shape.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::Triangle;
use na::Unit;

/// A planar quadrilateral.
///
/// The four points are expected to be coplanar and to form a convex polygon, in
/// counter-clockwise order. Geometric queries treat a quad as the two triangles
/// `ABC` and `ACD`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Quad {
    /// The quad first point.
    pub a: Point<Real>,
    /// The quad second point.
    pub b: Point<Real>,
    /// The quad third point.
    pub c: Point<Real>,
    /// The quad fourth point.
    pub d: Point<Real>,
}

impl From<[Point<Real>; 4]> for Quad {
    fn from(arr: [Point<Real>; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl Quad {
    /// Creates a quad from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Quad {
        Quad { a, b, c, d }
    }

    /// The vertices of this quad.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// The two triangles `ABC` and `ACD` covering this quad.
    #[inline]
    pub fn triangles(&self) -> [Triangle; 2] {
        [
            Triangle::new(self.a, self.b, self.c),
            Triangle::new(self.a, self.c, self.d),
        ]
    }

    /// The normal of this quad, computed from its first two edges.
    ///
    /// Returns `None` if `A`, `B` and `C` are aligned.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// A vector normal to this quad, collinear to `AB × AC`.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The four edges scaled directions of this quad: [B - A, C - B, D - C, A - D].
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 4] {
        [
            self.b - self.a,
            self.c - self.b,
            self.d - self.c,
            self.a - self.d,
        ]
    }
}
