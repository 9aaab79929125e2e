use crate::math::{Point, Real};

/// Rounds `x` to the nearest integer, rounding halfway cases toward positive infinity.
///
/// Unlike [`f32::round`], this maps `-0.5` to `0.0` and `-1.5` to `-1.0`, so that a grid
/// snapped with this function is invariant by integer translations.
#[inline]
pub fn round_half_up(x: Real) -> Real {
    (x + 0.5).floor()
}

/// Snaps every component of `pt` to the nearest multiple of `1 / resolution`.
#[inline]
pub fn snap_point_to_grid(pt: &Point<Real>, resolution: Real) -> Point<Real> {
    pt.map(|x| round_half_up(x * resolution) / resolution)
}
