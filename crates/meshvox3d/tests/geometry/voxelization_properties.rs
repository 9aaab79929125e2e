use crate::shapes::{cuboid, octahedron, unit_cube};
use approx::assert_relative_eq;
use meshvox3d::bounding_volume::Aabb;
use meshvox3d::math::{Point, Real, Vector};
use meshvox3d::transformation::voxelization::{Voxelizer, VoxelizerConfig};

fn voxelize(mesh: &meshvox3d::shape::Mesh, resolution: u32) -> Vec<Aabb> {
    let config = VoxelizerConfig {
        resolution,
        ..VoxelizerConfig::default()
    };
    Voxelizer::new(mesh, config).unwrap().voxelize().unwrap()
}

#[test]
fn voxelization_is_idempotent() {
    let mesh = octahedron(1.0);
    let first = voxelize(&mesh, 6);
    let second = voxelize(&mesh, 6);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn grid_aligned_translations_translate_the_boxes() {
    let mesh = cuboid("slab", Point::origin(), Point::new(2.0, 1.0, 1.5));
    let shift = Vector::new(2.0, -1.5, 3.0);
    let moved = mesh.translated(&shift);

    let boxes = voxelize(&mesh, 2);
    let moved_boxes = voxelize(&moved, 2);
    let expected: Vec<_> = boxes.iter().map(|b| b.translated(&shift)).collect();

    assert!(!boxes.is_empty());
    assert_eq!(moved_boxes, expected);
}

#[test]
fn deep_interior_points_are_covered() {
    let resolution = 8;
    let mesh = octahedron(1.0);
    let boxes = voxelize(&mesh, resolution);

    // Points farther than one voxel diagonal from every face of the octahedron.
    let voxel_diagonal = (3.0 as Real).sqrt() / resolution as Real;
    let max_l1_norm = 1.0 - voxel_diagonal * (3.0 as Real).sqrt();

    let mut rng = oorandom::Rand32::new(7);
    let mut num_tested = 0;

    while num_tested < 500 {
        let pt = Point::new(
            rng.rand_float() as Real * 2.0 - 1.0,
            rng.rand_float() as Real * 2.0 - 1.0,
            rng.rand_float() as Real * 2.0 - 1.0,
        );

        if pt.coords.lp_norm(1) >= max_l1_norm {
            continue;
        }

        num_tested += 1;
        assert!(
            boxes.iter().any(|b| b.contains_local_point(&pt)),
            "{} is not covered",
            pt
        );
    }
}

#[test]
fn simplification_preserves_the_covered_volume() {
    let mesh = octahedron(1.0);
    let config = VoxelizerConfig {
        resolution: 5,
        simplify: false,
        max_cells: None,
    };
    let voxelizer = Voxelizer::new(&mesh, config).unwrap();
    let cells = voxelizer.voxelize().unwrap();
    let simplified = voxelize(&mesh, 5);

    let volume = |boxes: &[Aabb]| boxes.iter().map(|b| b.volume()).sum::<Real>();
    assert!(simplified.len() < cells.len());
    assert_relative_eq!(volume(&cells), volume(&simplified), epsilon = 1.0e-4);

    // Merged boxes never overlap.
    for (i, a) in simplified.iter().enumerate() {
        for b in &simplified[i + 1..] {
            assert_eq!(a.intersection_volume(b), 0.0);
        }
    }
}

#[test]
fn interior_queries() {
    let mesh = unit_cube();
    let voxelizer = Voxelizer::new(&mesh, VoxelizerConfig::default()).unwrap();

    assert!(voxelizer
        .is_point_inside_mesh(&Point::new(0.5, 0.3, 0.7))
        .unwrap());
    assert!(!voxelizer
        .is_point_inside_mesh(&Point::new(1.5, 0.3, 0.7))
        .unwrap());
    assert!(!voxelizer
        .is_point_inside_mesh(&Point::new(0.5, 3.0, 0.7))
        .unwrap());

    // Closest to the +X face.
    let hits = voxelizer
        .interior_hits(&Point::new(0.8, 0.3, 0.7))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].polygon.face, 1);
    assert!(hits[0].is_facing(&Point::new(0.8, 0.3, 0.7)));
}
