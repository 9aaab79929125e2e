//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast, RayHit, RayIntersection, HIT_ROUNDING_RESOLUTION};
pub use self::ray_mesh::RayHits;
pub use self::ray_triangle::{local_ray_intersection_with_triangle, RAY_TRIANGLE_EPSILON};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_mesh;
mod ray_triangle;
