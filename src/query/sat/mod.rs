//! Application of the Separating Axis Theorem (SAT).
//!
//! Two convex shapes do not intersect if and only if there exists an axis onto which their
//! projections don’t overlap. For an axis-aligned box and a planar convex polygon, the candidate
//! axes are the three box face normals, the polygon normal, and the cross products of each box
//! axis with each polygon edge.
//!
//! The functions of this module return the largest *separation* found among a set of candidate
//! axes, together with that axis. A positive separation means that the shapes are disjoint.
//! Shapes that only touch have a separation of zero.

pub use self::sat_aabb_polygon::*;

mod sat_aabb_polygon;
