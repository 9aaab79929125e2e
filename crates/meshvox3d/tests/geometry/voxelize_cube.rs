use crate::shapes::unit_cube;
use meshvox3d::bounding_volume::Aabb;
use meshvox3d::math::Point;
use meshvox3d::shape::MeshBuilder;
use meshvox3d::transformation::voxelization::{Voxelizer, VoxelizerConfig};

fn config(resolution: u32, simplify: bool) -> VoxelizerConfig {
    VoxelizerConfig {
        resolution,
        simplify,
        ..VoxelizerConfig::default()
    }
}

#[test]
fn unit_cube_at_resolution_1() {
    let mesh = unit_cube();
    let expected = vec![Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0))];

    for simplify in [false, true] {
        let boxes = Voxelizer::new(&mesh, config(1, simplify))
            .unwrap()
            .voxelize()
            .unwrap();
        assert_eq!(boxes, expected);
    }
}

#[test]
fn unit_cube_at_resolution_2() {
    let mesh = unit_cube();
    let voxelizer = Voxelizer::new(&mesh, config(2, false)).unwrap();
    let voxelization = voxelizer.run().unwrap();

    assert_eq!(voxelization.grid().len(), 27);
    assert_eq!(voxelization.num_occupied(), 8);
    assert!(voxelization
        .occupied_cells()
        .all(|cell| cell.iter().all(|i| *i == 0 || *i == 1)));

    let boxes = voxelization.boxes();
    assert_eq!(boxes.len(), 8);
    assert_eq!(
        boxes[0],
        Aabb::new(Point::origin(), Point::new(0.5, 0.5, 0.5))
    );
    assert_eq!(
        boxes[1],
        Aabb::new(Point::new(0.0, 0.0, 0.5), Point::new(0.5, 0.5, 1.0))
    );
    assert!(boxes.iter().all(|b| b.volume() == 0.125));

    let simplified = Voxelizer::new(&mesh, config(2, true))
        .unwrap()
        .voxelize()
        .unwrap();
    assert_eq!(
        simplified,
        vec![Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0))]
    );
}

#[test]
fn empty_mesh_yields_no_box() {
    let mesh = MeshBuilder::new("nothing").build().unwrap();
    let boxes = Voxelizer::new(&mesh, VoxelizerConfig::default())
        .unwrap()
        .voxelize()
        .unwrap();
    assert!(boxes.is_empty());
}
