use crate::shapes::{octahedron, unit_cube};
use meshvox3d::transformation::voxelization::{
    VoxelizationErrorKind, Voxelizer, VoxelizerConfig, VoxelizerState,
};
use std::sync::Arc;

#[test]
fn spawned_voxelization_matches_direct_one() {
    let mesh = Arc::new(octahedron(1.0));
    let config = VoxelizerConfig {
        resolution: 4,
        ..VoxelizerConfig::default()
    };

    let expected = Voxelizer::new(&mesh, config).unwrap().run().unwrap();
    let task = Voxelizer::spawn(mesh.clone(), config);
    assert_eq!(task.mesh_name(), "octahedron");

    while !task.is_finished() {
        std::thread::yield_now();
    }

    assert_eq!(task.state(), VoxelizerState::Done);
    assert_eq!(task.join().unwrap(), expected);
}

#[test]
fn cancelled_task_fails() {
    let mesh = Arc::new(octahedron(1.0));
    let config = VoxelizerConfig {
        resolution: 64,
        ..VoxelizerConfig::default()
    };

    let task = Voxelizer::spawn(mesh, config);
    task.cancel();
    assert!(task.cancellation_token().is_cancelled());

    let err = task.join().unwrap_err();
    assert_eq!(err.mesh, "octahedron");
    assert_eq!(err.kind, VoxelizationErrorKind::Cancelled);
}

#[test]
fn invalid_configuration_is_reported_on_join() {
    let config = VoxelizerConfig {
        resolution: 0,
        ..VoxelizerConfig::default()
    };
    let mut task = Voxelizer::spawn(Arc::new(unit_cube()), config);

    let result = loop {
        match task.try_join() {
            Ok(result) => break result,
            Err(pending) => {
                task = pending;
                std::thread::yield_now();
            }
        }
    };

    assert_eq!(
        result.unwrap_err().kind,
        VoxelizationErrorKind::InvalidResolution
    );
}
