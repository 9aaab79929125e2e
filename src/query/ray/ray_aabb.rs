use std::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::query::Ray;
use num::Zero;

impl Aabb {
    /// Computes the parameters of the part of `ray` lying inside of this AABB.
    ///
    /// Returns `(tmin, tmax)` such that `ray.point_at(t)` is inside of this AABB for every
    /// `t` in `[tmin, tmax]`, with `tmin >= 0`. Returns `None` if the ray misses the AABB, or
    /// if the AABB is behind the ray origin.
    pub fn clip_ray_parameters(&self, ray: &Ray) -> Option<(Real, Real)> {
        let mut tmin: Real = 0.0;
        let mut tmax: Real = Real::MAX;

        for i in 0usize..DIM {
            if ray.dir[i].is_zero() {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let mut inter_with_near_halfspace = (self.mins[i] - ray.origin[i]) * denom;
                let mut inter_with_far_halfspace = (self.maxs[i] - ray.origin[i]) * denom;

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmin > tmax {
                    // This covers the case where tmax is negative because tmin is
                    // initialized at zero.
                    return None;
                }
            }
        }

        Some((tmin, tmax))
    }
}
