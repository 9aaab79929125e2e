use crate::bounding_volume::Aabb;
use crate::query::sat;
use crate::shape::PolygonShape;

/// Tests if a convex polygon intersects an AABB.
///
/// Both shapes are closed: a polygon touching a face, an edge, or a corner of the box
/// intersects it.
pub fn intersection_test_aabb_polygon(aabb1: &Aabb, polygon2: &PolygonShape) -> bool {
    let vertices = polygon2.vertices();

    if vertices.iter().any(|pt| aabb1.contains_local_point(pt)) {
        return true;
    }

    let sep1 = sat::aabb_polygon_find_local_separating_normal_oneway(aabb1, polygon2).0;
    if sep1 > 0.0 {
        return false;
    }

    let sep2 = sat::polygon_aabb_find_local_separating_normal_oneway(polygon2, aabb1).0;
    if sep2 > 0.0 {
        return false;
    }

    let sep3 = sat::aabb_polygon_find_local_separating_edge_twoway(aabb1, polygon2).0;
    sep3 <= 0.0
}
