use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::query::{Ray, RayCast, RayHit, RayIntersection};
use crate::shape::{Mesh, MeshSearch};

/// Margin added around the culling box of a ray, to account for rounding errors when
/// clipping it against the mesh bounds.
const CULLING_MARGIN: Real = 1.0e-4;

/// Lazy iterator over the candidate hits of a ray against a [`Mesh`].
///
/// Created by [`Mesh::cast_ray_unfiltered`]. Each candidate is a polygon whose bounding box
/// intersects the part of the ray lying inside of the mesh bounds.
pub struct RayHits<'a> {
    ray: Ray,
    search: Option<MeshSearch<'a>>,
}

impl<'a> Iterator for RayHits<'a> {
    type Item = RayHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let polygon = self.search.as_mut()?.next()?;
        let intersection = polygon
            .shape
            .cast_local_ray(&self.ray, Real::MAX)
            .map(|time_of_impact| RayIntersection {
                time_of_impact,
                point: self.ray.point_at(time_of_impact),
            });

        Some(RayHit {
            ray: self.ray,
            polygon_id: polygon.id,
            polygon,
            intersection,
        })
    }
}

impl Mesh {
    /// Enumerates every polygon of this mesh that may be hit by `ray`.
    ///
    /// The candidates are the polygons whose bounding box intersects the segment of the ray
    /// lying inside of the mesh bounds. The yielded hits include invalid ones (see
    /// [`RayHit::is_valid`]). The iterator is lazy and re-derives everything on each call.
    pub fn cast_ray_unfiltered(&self, ray: &Ray) -> RayHits<'_> {
        let search = self.local_aabb().clip_ray_parameters(ray).map(|(tmin, tmax)| {
            let mut segment = Aabb::new_invalid();
            segment.take_point(ray.point_at(tmin));
            segment.take_point(ray.point_at(tmax));
            self.search(&segment.loosened(CULLING_MARGIN))
        });

        RayHits { ray: *ray, search }
    }

    /// Enumerates every polygon of this mesh crossed by `ray`, strictly in front of its origin.
    ///
    /// Hits are yielded in no particular order. Rays crossing an edge shared by several polygons
    /// hit all of them.
    pub fn cast_ray<'a>(&'a self, ray: &Ray) -> impl Iterator<Item = RayHit<'a>> + 'a {
        self.cast_ray_unfiltered(ray).filter(RayHit::is_valid)
    }

    /// Collects every polygon of this mesh crossed by `ray`, sorted by increasing time of impact.
    pub fn cast_ray_sorted(&self, ray: &Ray) -> Vec<RayHit<'_>> {
        let mut hits: Vec<_> = self.cast_ray(ray).collect();
        hits.sort_by(|a, b| {
            let ta = a.time_of_impact().unwrap_or(Real::MAX);
            let tb = b.time_of_impact().unwrap_or(Real::MAX);
            ta.total_cmp(&tb)
        });
        hits
    }
}
