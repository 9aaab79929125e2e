//! Shapes and meshes supported by meshvox.

pub use self::face::{Face, FaceBuilder};
pub use self::mesh::{Mesh, MeshBuilder, MeshBuilderError, MeshPolygon, MeshSearch};
pub use self::mesh_description::{
    FaceDescription, MeshDescription, PartDescription, QuadDescription, TriangleDescription,
    VertexDescription,
};
pub use self::part::Part;
pub use self::polygon::{CullFace, InvalidCullFace, Polygon, PolygonData};
pub use self::polygon_shape::PolygonShape;
pub use self::quad::Quad;
pub use self::triangle::Triangle;
pub use self::vertex::Vertex;

mod face;
mod mesh;
mod mesh_description;
mod part;
mod polygon;
mod polygon_shape;
mod quad;
mod triangle;
mod vertex;
