use meshvox3d::math::{Point, Real};
use meshvox3d::shape::{Mesh, MeshBuilder, PolygonData};

/// An axis-aligned box made of six quads with outward normals.
pub fn cuboid(name: &str, mins: Point<Real>, maxs: Point<Real>) -> Mesh {
    let [x0, y0, z0] = [mins.x, mins.y, mins.z];
    let [x1, y1, z1] = [maxs.x, maxs.y, maxs.z];
    let quads = [
        // -X
        [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]],
        // +X
        [[x1, y0, z0], [x1, y1, z0], [x1, y1, z1], [x1, y0, z1]],
        // -Y
        [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]],
        // +Y
        [[x0, y1, z0], [x0, y1, z1], [x1, y1, z1], [x1, y1, z0]],
        // -Z
        [[x0, y0, z0], [x0, y1, z0], [x1, y1, z0], [x1, y0, z0]],
        // +Z
        [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
    ];

    let mut builder = MeshBuilder::new(name);
    for (i, quad) in quads.into_iter().enumerate() {
        let _ = builder.push_quad_face(quad.map(Point::from), PolygonData::with_texture(i as u32));
    }
    builder.build().unwrap()
}

pub fn unit_cube() -> Mesh {
    cuboid("cube", Point::origin(), Point::new(1.0, 1.0, 1.0))
}

/// The set of points with `|x| + |y| + |z| <= radius`, made of eight triangles.
pub fn octahedron(radius: Real) -> Mesh {
    let mut builder = MeshBuilder::new("octahedron");

    for sx in [-1.0, 1.0] {
        for sy in [-1.0, 1.0] {
            for sz in [-1.0, 1.0] {
                let a = Point::new(sx * radius, 0.0, 0.0);
                let b = Point::new(0.0, sy * radius, 0.0);
                let c = Point::new(0.0, 0.0, sz * radius);
                // Keep the normal pointing away from the center.
                let points = if sx * sy * sz > 0.0 { [a, b, c] } else { [a, c, b] };
                let _ = builder.push_triangle_face(points, PolygonData::default());
            }
        }
    }

    builder.build().unwrap()
}
