//! Non-persistent geometric queries.
//!
//! * [`Ray`] casting against polygons and whole meshes with [`RayCast`] and
//!   [`Mesh::cast_ray`](crate::shape::Mesh::cast_ray).
//! * Polygon/box intersection tests based on the separating axis theorem, see [`sat`] and
//!   [`details`].

pub use self::intersection_test::intersection_test_aabb_polygon;
pub use self::ray::{Ray, RayCast, RayHit, RayHits, RayIntersection};

mod intersection_test;
mod ray;
pub mod sat;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
    pub use super::ray::{
        local_ray_intersection_with_triangle, HIT_ROUNDING_RESOLUTION, RAY_TRIANGLE_EPSILON,
    };
}
