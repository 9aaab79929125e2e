use crate::shapes::{octahedron, unit_cube};
use approx::assert_relative_eq;
use meshvox3d::math::{Point, Vector};
use meshvox3d::query::Ray;

#[test]
fn ray_through_cube_hits_both_sides_in_order() {
    let mesh = unit_cube();
    let ray = Ray::new(Point::new(-1.0, 0.3, 0.6), Vector::x());
    let hits = mesh.cast_ray_sorted(&ray);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].polygon.face, 0);
    assert_eq!(hits[1].polygon.face, 1);
    assert_relative_eq!(hits[0].time_of_impact().unwrap(), 1.0);
    assert_relative_eq!(hits[1].time_of_impact().unwrap(), 2.0);

    let origin = ray.origin;
    assert!(hits[0].distance_to(&origin).unwrap() < hits[1].distance_to(&origin).unwrap());
}

#[test]
fn ray_missing_the_bounds_yields_nothing() {
    let mesh = unit_cube();
    let ray = Ray::new(Point::new(-1.0, 2.0, 0.5), Vector::x());

    assert_eq!(mesh.cast_ray_unfiltered(&ray).count(), 0);
    assert_eq!(mesh.cast_ray(&ray).count(), 0);
}

#[test]
fn parallel_polygons_are_invalid_candidates() {
    let mesh = unit_cube();
    let ray = Ray::new(Point::new(-1.0, 0.3, 0.6), Vector::x());

    // The four faces parallel to the ray are culled in by their bounding boxes only.
    let unfiltered: Vec<_> = mesh.cast_ray_unfiltered(&ray).collect();
    let num_valid = unfiltered.iter().filter(|hit| hit.is_valid()).count();
    assert_eq!(num_valid, 2);
    assert!(unfiltered.len() >= num_valid);
}

#[test]
fn hits_behind_the_origin_are_ignored() {
    let mesh = unit_cube();
    let ray = Ray::new(Point::new(0.5, 0.3, 0.6), Vector::x());
    let hits = mesh.cast_ray_sorted(&ray);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].polygon.face, 1);
    assert!(hits[0].is_facing(&ray.origin));
}

#[test]
fn random_rays_through_octahedron_enter_then_exit() {
    let mesh = octahedron(1.0);
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..200 {
        let y = rng.rand_float() as meshvox3d::math::Real - 0.5;
        let z = rng.rand_float() as meshvox3d::math::Real - 0.5;
        let ray = Ray::new(Point::new(-2.0, y, z), Vector::x());
        let hits = mesh.cast_ray_sorted(&ray);

        assert!(hits.len() >= 2, "{:?} hits {} polygons", ray, hits.len());
        let first = hits.first().unwrap();
        let last = hits.last().unwrap();
        assert!(first.time_of_impact() <= last.time_of_impact());
        assert!(first.polygon.normal.x < 0.0);
        assert!(last.polygon.normal.x > 0.0);
    }
}
