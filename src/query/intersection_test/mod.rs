//! Implementation details of the intersection tests.

pub use self::intersection_test_aabb_polygon::intersection_test_aabb_polygon;

mod intersection_test_aabb_polygon;
