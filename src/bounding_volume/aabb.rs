//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector, DIM};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always parallel to the
/// coordinate axes which makes intersection tests a handful of coordinate comparisons.
///
/// All tests on an `Aabb` treat it as a closed set: two boxes sharing only a face, an edge,
/// or a corner intersect.
///
/// An AABB with `mins > maxs` on any axis is *invalid*. This is what [`Aabb::new_invalid`]
/// returns, and what the AABB of an empty point set is. An invalid AABB intersects nothing
/// and merging anything into it yields the other operand.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use meshvox3d::bounding_volume::{Aabb, BoundingVolume};
/// use meshvox3d::na::Point3;
///
/// let a = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
/// let b = Aabb::new(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
///
/// assert!(a.intersects(&b));
/// assert_eq!(a.intersection_volume(&b), 0.0);
/// assert_eq!(a.merged(&b).volume(), 2.0);
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::max_values` and `maxs`components set to `-Real::max_values`.
    ///
    /// This is often used as the initial values of some AABB merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates a new AABB from a set of points.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        let mut result = Self::new_invalid();

        for pt in pts {
            result.take_point(*pt);
        }

        result
    }

    /// Is this AABB valid, i.e., `mins <= maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = na::convert::<f64, Real>(0.5);
        (self.maxs - self.mins) * half
    }

    /// The volume of this AABB.
    ///
    /// Invalid AABBs have a zero volume.
    #[inline]
    pub fn volume(&self) -> Real {
        if !self.is_valid() {
            return 0.0;
        }

        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Half of the area of this AABB.
    #[inline]
    pub fn half_area(&self) -> Real {
        let extents = self.extents();
        extents.x * (extents.y + extents.z) + extents.y * extents.z
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Returns an AABB with the same size as `self` but translated by `translation`.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Does this AABB contains a point expressed in the same coordinate frame as `self`?
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Computes the intersection of this `Aabb` and another one.
    ///
    /// Returns `None` if the two boxes don't overlap. Boxes that only touch yield a flat box.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb {
            mins: Point::from(self.mins.coords.sup(&other.mins.coords)),
            maxs: Point::from(self.maxs.coords.inf(&other.maxs.coords)),
        };

        for i in 0..DIM {
            if result.mins[i] > result.maxs[i] {
                return None;
            }
        }

        Some(result)
    }

    /// The volume of the intersection of this `Aabb` and another one.
    ///
    /// This is zero if they don't overlap or if they only touch.
    #[inline]
    pub fn intersection_volume(&self, other: &Aabb) -> Real {
        self.intersection(other)
            .map(|inter| inter.volume())
            .unwrap_or(0.0)
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    #[inline]
    fn tightened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The tightening margin must be positive.");

        Aabb::new(
            self.mins + Vector::repeat(amount),
            self.maxs + Vector::repeat(-amount),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::{Aabb, BoundingVolume};
    use crate::math::{Point, Real};

    fn unit_box_at(x: f64) -> Aabb {
        let x = x as Real;
        Aabb::new(Point::new(x, 0.0, 0.0), Point::new(x + 1.0, 1.0, 1.0))
    }

    #[test]
    fn touching_boxes_intersect_with_zero_volume() {
        let a = unit_box_at(0.0);
        let b = unit_box_at(1.0);
        let c = unit_box_at(1.5);

        assert!(a.intersects(&b));
        assert_eq!(a.intersection_volume(&b), 0.0);
        assert!(!a.intersects(&c));
        assert!(a.intersection(&c).is_none());
        assert_relative_eq!(b.intersection_volume(&c), 0.5);
    }

    #[test]
    fn invalid_aabb_is_neutral_for_merge() {
        let invalid = Aabb::new_invalid();
        let a = unit_box_at(3.0);

        assert!(!invalid.is_valid());
        assert_eq!(invalid.volume(), 0.0);
        assert!(!invalid.intersects(&a));
        assert_eq!(invalid.merged(&a), a);
        assert_eq!(Aabb::from_points(std::iter::empty::<&Point<Real>>()), invalid);
    }

    #[test]
    fn tightened_box_shrinks_on_every_side() {
        let a = unit_box_at(0.0).tightened(0.25);
        assert_relative_eq!(a.mins, Point::new(0.25, 0.25, 0.25));
        assert_relative_eq!(a.maxs, Point::new(0.75, 0.75, 0.75));
        assert!(unit_box_at(0.0).contains(&a));
    }
}
