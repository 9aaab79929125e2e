use crate::math::{Point, Real};
use crate::query::{Ray, RayCast};
use crate::shape::{PolygonShape, Quad, Triangle};

/// The tolerance below which a ray is considered parallel to a triangle, or a time of impact
/// considered zero.
pub const RAY_TRIANGLE_EPSILON: Real = 1.0e-8;

impl RayCast for Triangle {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        local_ray_intersection_with_triangle(&self.a, &self.b, &self.c, ray)
            .filter(|toi| *toi <= max_time_of_impact)
    }
}

impl RayCast for Quad {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        self.triangles()
            .iter()
            .find_map(|tri| tri.cast_local_ray(ray, max_time_of_impact))
    }
}

impl RayCast for PolygonShape {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        match self {
            PolygonShape::Triangle(tri) => tri.cast_local_ray(ray, max_time_of_impact),
            PolygonShape::Quad(quad) => quad.cast_local_ray(ray, max_time_of_impact),
        }
    }
}

/// Computes the time of impact of a ray with a triangle, using the Möller–Trumbore algorithm.
///
/// Both faces of the triangle can be hit. The triangle is closed: rays crossing one of its
/// edges or vertices hit it. Returns `None` if the ray is parallel to the triangle, if the
/// triangle is degenerate, or if the intersection isn’t strictly in front of the ray origin.
pub fn local_ray_intersection_with_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<Real> {
    let ab = *b - *a;
    let ac = *c - *a;

    let h = ray.dir.cross(&ac);
    let det = ab.dot(&h);

    // the ray is parallel to the triangle
    if det.abs() < RAY_TRIANGLE_EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let ap = ray.origin - *a;
    let u = inv_det * ap.dot(&h);

    if u < 0.0 || u > 1.0 {
        return None;
    }

    let q = ap.cross(&ab);
    let v = inv_det * ray.dir.dot(&q);

    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let toi = inv_det * ac.dot(&q);

    if toi > RAY_TRIANGLE_EPSILON {
        Some(toi)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Real, Vector};
    use crate::query::{Ray, RayCast};
    use crate::shape::{Quad, Triangle};

    fn triangle() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn ray_hits_both_sides() {
        let tri = triangle();
        let down = Ray::new(Point::new(0.25, 0.25, 2.0), -Vector::z());
        let up = Ray::new(Point::new(0.25, 0.25, -2.0), Vector::z());

        assert_relative_eq!(tri.cast_local_ray(&down, Real::MAX).unwrap(), 2.0);
        assert_relative_eq!(tri.cast_local_ray(&up, Real::MAX).unwrap(), 2.0);
        assert!(!tri.intersects_local_ray(&down, 1.0));
    }

    #[test]
    fn ray_misses_parallel_behind_and_outside() {
        let tri = triangle();
        let parallel = Ray::new(Point::new(-1.0, 0.25, 0.0), Vector::x());
        let behind = Ray::new(Point::new(0.25, 0.25, 2.0), Vector::z());
        let outside = Ray::new(Point::new(0.75, 0.75, 2.0), -Vector::z());
        let at_origin = Ray::new(Point::new(0.25, 0.25, 0.0), -Vector::z());

        assert_eq!(tri.cast_local_ray(&parallel, Real::MAX), None);
        assert_eq!(tri.cast_local_ray(&behind, Real::MAX), None);
        assert_eq!(tri.cast_local_ray(&outside, Real::MAX), None);
        assert_eq!(tri.cast_local_ray(&at_origin, Real::MAX), None);
    }

    #[test]
    fn edges_are_inclusive() {
        let tri = triangle();
        let on_edge = Ray::new(Point::new(0.5, 0.0, 1.0), -Vector::z());
        let on_vertex = Ray::new(Point::new(0.0, 1.0, 1.0), -Vector::z());

        assert!(tri.intersects_local_ray(&on_edge, Real::MAX));
        assert!(tri.intersects_local_ray(&on_vertex, Real::MAX));
    }

    #[test]
    fn quad_is_hit_on_both_halves() {
        let quad = Quad::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        );

        for (x, y) in [(0.75, 0.25), (0.25, 0.75), (0.5, 0.5)] {
            let ray = Ray::new(Point::new(x, y, 1.0), -Vector::z());
            assert_relative_eq!(quad.cast_local_ray(&ray, Real::MAX).unwrap(), 1.0);
        }
    }
}
