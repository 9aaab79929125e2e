//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};
use crate::shape::MeshPolygon;
use crate::utils;

/// A Ray.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray. It doesn’t have to be normalized.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray starting from `origin` and with the direction `dir`.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point at the given parameter on this line.
    ///
    /// This computes `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Traits of objects which can be tested for intersection with a ray.
pub trait RayCast {
    /// Computes the time of impact between this shape and a ray, expressed in the local-space
    /// of the shape.
    ///
    /// Only hits with a time of impact smaller than or equal to `max_time_of_impact` are reported.
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real>;

    /// Tests whether a ray intersects this shape.
    #[inline]
    fn intersects_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_local_ray(ray, max_time_of_impact).is_some()
    }
}

/// Where a ray crosses a polygon.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact of the ray with the polygon.
    pub time_of_impact: Real,
    /// The intersection point.
    pub point: Point<Real>,
}

/// The result of casting a ray against one polygon of a mesh.
///
/// A hit is *valid* if the ray actually crosses the polygon, strictly in front of its
/// origin. Invalid hits are candidates that were culled by bounding boxes only: the ray is
/// parallel to the polygon, misses it, or crosses it behind its origin.
#[derive(Copy, Clone, Debug)]
pub struct RayHit<'a> {
    /// The ray that was cast.
    pub ray: Ray,
    /// The index of the polygon in [`Mesh::polygons`](crate::shape::Mesh::polygons).
    pub polygon_id: u32,
    /// The polygon tested against the ray.
    pub polygon: &'a MeshPolygon,
    /// The intersection of the ray with the polygon, if the hit is valid.
    pub intersection: Option<RayIntersection>,
}

/// The resolution hit points are snapped to by [`RayHit::rounded`].
pub const HIT_ROUNDING_RESOLUTION: Real = 256.0;

impl<'a> RayHit<'a> {
    /// Does the ray actually cross the polygon?
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.intersection.is_some()
    }

    /// The intersection point, if the hit is valid.
    #[inline]
    pub fn point(&self) -> Option<Point<Real>> {
        self.intersection.map(|inter| inter.point)
    }

    /// The time of impact, if the hit is valid.
    #[inline]
    pub fn time_of_impact(&self) -> Option<Real> {
        self.intersection.map(|inter| inter.time_of_impact)
    }

    /// The distance between the intersection point and `point`, if the hit is valid.
    #[inline]
    pub fn distance_to(&self, point: &Point<Real>) -> Option<Real> {
        self.point().map(|pt| na::distance(&pt, point))
    }

    /// Is `point` on the inner side of the polygon hit by the ray?
    ///
    /// See [`MeshPolygon::is_facing`].
    #[inline]
    pub fn is_facing(&self, point: &Point<Real>) -> bool {
        self.polygon.is_facing(point)
    }

    /// This hit with its intersection point snapped to the nearest multiple of `1 / 256`.
    ///
    /// Rounding lets hits on coincident polygons (shared edges, overlapping faces) report exactly
    /// the same point.
    #[must_use]
    pub fn rounded(mut self) -> Self {
        if let Some(inter) = &mut self.intersection {
            inter.point = utils::snap_point_to_grid(&inter.point, HIT_ROUNDING_RESOLUTION);
        }

        self
    }
}
