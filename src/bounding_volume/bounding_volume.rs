use crate::math::{Point, Real};

/// A coarse, cheap to test, approximation of the space occupied by some geometry.
///
/// Bounding volumes are closed sets: volumes sharing only boundary points intersect, and a
/// volume contains itself.
pub trait BoundingVolume {
    /// A point inside of this bounding volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Do this bounding volume and `other` have at least one point in common?
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` entirely inside of this bounding volume?
    fn contains(&self, other: &Self) -> bool;

    /// Enlarges this bounding volume so it also contains `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest bounding volume of this type containing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// This bounding volume with its boundary pushed outward by `amount`.
    ///
    /// Panics if `amount` is negative.
    fn loosened(&self, amount: Real) -> Self;

    /// This bounding volume with its boundary pulled inward by `amount`.
    ///
    /// Panics if `amount` is negative. The result may be invalid if `amount` is too large.
    fn tightened(&self, amount: Real) -> Self;
}
