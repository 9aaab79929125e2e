use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::PolygonShape;

/// Computes the separation between an AABB and a convex polygon along the given axis.
///
/// Both shapes are projected on `axis`, which doesn’t need to be normalized. The result is
/// positive if the projections are disjoint, and scaled by the norm of `axis`. A zero axis never
/// separates anything.
pub fn aabb_polygon_compute_separation(
    aabb: &Aabb,
    vertices: &[Point<Real>],
    axis: &Vector<Real>,
) -> Real {
    let center = aabb.center();
    let radius = axis.abs().dot(&aabb.half_extents());
    let mut min_proj = Real::MAX;
    let mut max_proj = -Real::MAX;

    for pt in vertices {
        let proj = axis.dot(&(pt - center));
        min_proj = min_proj.min(proj);
        max_proj = max_proj.max(proj);
    }

    (-max_proj).max(min_proj) - radius
}

fn find_best_separation(
    aabb: &Aabb,
    vertices: &[Point<Real>],
    axes: impl IntoIterator<Item = Vector<Real>>,
) -> (Real, Vector<Real>) {
    let mut best_sep = -Real::MAX;
    let mut best_axis = Vector::zeros();

    for axis in axes {
        let sep = aabb_polygon_compute_separation(aabb, vertices, &axis);

        if sep > best_sep {
            best_sep = sep;
            best_axis = axis;
        }
    }

    (best_sep, best_axis)
}

/// Finds the best separating axis among the face normals of the AABB.
pub fn aabb_polygon_find_local_separating_normal_oneway(
    aabb: &Aabb,
    polygon: &PolygonShape,
) -> (Real, Vector<Real>) {
    let vertices = polygon.vertices();
    find_best_separation(aabb, &vertices, [Vector::x(), Vector::y(), Vector::z()])
}

/// Computes the separation along the normal of the polygon.
///
/// Degenerate polygons have no normal, and are reported with a separation of `-Real::MAX`.
pub fn polygon_aabb_find_local_separating_normal_oneway(
    polygon: &PolygonShape,
    aabb: &Aabb,
) -> (Real, Vector<Real>) {
    let vertices = polygon.vertices();
    find_best_separation(aabb, &vertices, polygon.normal().map(|n| n.into_inner()))
}

/// Finds the best separating axis among the cross products of the AABB axes with the polygon
/// edges.
pub fn aabb_polygon_find_local_separating_edge_twoway(
    aabb: &Aabb,
    polygon: &PolygonShape,
) -> (Real, Vector<Real>) {
    let vertices = polygon.vertices();
    let axes = polygon.edges_scaled_directions().into_iter().flat_map(|e| {
        // Vector::{x, y ,z}().cross(e)
        [
            Vector::new(0.0, -e.z, e.y),
            Vector::new(e.z, 0.0, -e.x),
            Vector::new(-e.y, e.x, 0.0),
        ]
    });

    find_best_separation(aabb, &vertices, axes)
}
