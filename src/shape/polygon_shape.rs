use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{Quad, Triangle};
use arrayvec::ArrayVec;

/// The geometry of a mesh polygon: either a triangle or a quad.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum PolygonShape {
    /// A triangle.
    Triangle(Triangle),
    /// A quad.
    Quad(Quad),
}

impl PolygonShape {
    /// The vertices of this polygon, in order.
    #[inline]
    pub fn vertices(&self) -> ArrayVec<Point<Real>, 4> {
        match self {
            PolygonShape::Triangle(tri) => tri.vertices().into_iter().collect(),
            PolygonShape::Quad(quad) => ArrayVec::from(quad.vertices()),
        }
    }

    /// The first vertex of this polygon.
    #[inline]
    pub fn first_vertex(&self) -> Point<Real> {
        match self {
            PolygonShape::Triangle(tri) => tri.a,
            PolygonShape::Quad(quad) => quad.a,
        }
    }

    /// The triangles covering this polygon.
    #[inline]
    pub fn triangles(&self) -> ArrayVec<Triangle, 2> {
        match self {
            PolygonShape::Triangle(tri) => [*tri].into_iter().collect(),
            PolygonShape::Quad(quad) => ArrayVec::from(quad.triangles()),
        }
    }

    /// The scaled directions of the edges of this polygon.
    #[inline]
    pub fn edges_scaled_directions(&self) -> ArrayVec<Vector<Real>, 4> {
        match self {
            PolygonShape::Triangle(tri) => tri.edges_scaled_directions().into_iter().collect(),
            PolygonShape::Quad(quad) => ArrayVec::from(quad.edges_scaled_directions()),
        }
    }

    /// The normal of this polygon, computed from its first two edges.
    ///
    /// Returns `None` if the polygon is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        match self {
            PolygonShape::Triangle(tri) => tri.normal(),
            PolygonShape::Quad(quad) => quad.normal(),
        }
    }

    /// Is `point` strictly behind this polygon, i.e., on the opposite side of its normal?
    ///
    /// Always `false` for degenerate polygons.
    #[inline]
    pub fn is_facing(&self, point: &Point<Real>) -> bool {
        self.normal()
            .map(|n| n.dot(&(point - self.first_vertex())) < 0.0)
            .unwrap_or(false)
    }
}
