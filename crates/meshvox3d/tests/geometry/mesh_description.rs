use crate::shapes::unit_cube;
use meshvox3d::shape::{
    CullFace, FaceDescription, Mesh, MeshDescription, PartDescription, PolygonData,
    QuadDescription, VertexDescription,
};
use meshvox3d::transformation::voxelization::{Voxelizer, VoxelizerConfig};

fn cube_description() -> MeshDescription {
    let cube = unit_cube();
    let mut desc = MeshDescription {
        name: "described cube".to_string(),
        ..MeshDescription::default()
    };
    let mut part = PartDescription {
        name: "cube".to_string(),
        ..PartDescription::default()
    };

    for (i, face) in cube.faces().iter().enumerate() {
        let vertices = face
            .vertices()
            .iter()
            .map(|v| VertexDescription {
                pos: v.pos.into(),
                normal: v.normal.into(),
                uv: v.uv.into(),
            })
            .collect();
        desc.faces.push(FaceDescription { vertices });

        let indices = face.polygons()[0].indices();
        part.quads.push(QuadDescription {
            face: i as u32,
            vertices: [indices[0], indices[1], indices[2], indices[3]],
            data: PolygonData {
                cull_face: CullFace::try_from(i as i32).unwrap(),
                ..PolygonData::with_texture(i as u32)
            },
        });
    }

    desc.parts.push(part);
    desc
}

#[test]
fn described_cube_voxelizes_like_built_cube() {
    let described = Mesh::from_description(&cube_description()).unwrap();
    let built = unit_cube();

    assert_eq!(described.name(), "described cube");
    assert_eq!(described.polygons().len(), 6);
    assert_eq!(described.local_aabb(), built.local_aabb());

    for (a, b) in described.polygons().iter().zip(built.polygons()) {
        assert_eq!(a.shape, b.shape);
        assert_eq!(a.data.texture, b.data.texture);
    }

    let config = VoxelizerConfig {
        resolution: 3,
        simplify: false,
        max_cells: None,
    };
    let expected = Voxelizer::new(&built, config).unwrap().run().unwrap();
    let result = Voxelizer::new(&described, config).unwrap().run().unwrap();
    assert_eq!(result.occupancy(), expected.occupancy());
    assert_eq!(result.boxes(), expected.boxes());
}

#[test]
fn out_of_range_face_is_rejected() {
    let mut desc = cube_description();
    desc.parts[0].quads[2].face = 6;
    assert!(Mesh::from_description(&desc).is_err());
}
