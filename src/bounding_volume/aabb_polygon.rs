use crate::bounding_volume::Aabb;
use crate::shape::{PolygonShape, Quad, Triangle};

impl Triangle {
    /// Computes the local-space [`Aabb`] of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        let mins = self.a.inf(&self.b).inf(&self.c);
        let maxs = self.a.sup(&self.b).sup(&self.c);
        Aabb::new(mins, maxs)
    }
}

impl Quad {
    /// Computes the local-space [`Aabb`] of this quad.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(&self.vertices())
    }
}

impl PolygonShape {
    /// Computes the local-space [`Aabb`] of this polygon.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        match self {
            PolygonShape::Triangle(tri) => tri.local_aabb(),
            PolygonShape::Quad(quad) => quad.local_aabb(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::Aabb;
    use crate::math::Point;
    use crate::shape::Triangle;

    #[test]
    fn triangle_aabb() {
        let tri = Triangle::new(
            Point::new(1.0, -2.0, 0.5),
            Point::new(-1.0, 3.0, 0.0),
            Point::new(0.0, 0.0, 2.0),
        );
        assert_eq!(
            tri.local_aabb(),
            Aabb::new(Point::new(-1.0, -2.0, 0.0), Point::new(1.0, 3.0, 2.0))
        );
    }
}
