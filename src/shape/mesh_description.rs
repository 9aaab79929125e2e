//! Declarative description of a mesh, as stored in model assets.

use crate::math::{Point, Point2, Real, Vector};
use crate::shape::{FaceBuilder, Mesh, MeshBuilder, MeshBuilderError, Polygon, PolygonData, Vertex};

/// A vertex, as described in a model asset.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VertexDescription {
    /// The position of the vertex.
    pub pos: [Real; 3],
    /// The shading normal of the vertex.
    pub normal: [Real; 3],
    /// The texture coordinates of the vertex.
    pub uv: [Real; 2],
}

impl From<VertexDescription> for Vertex {
    fn from(desc: VertexDescription) -> Self {
        Vertex::new(
            Point::from(desc.pos),
            Vector::from(desc.normal),
            Point2::from(desc.uv),
        )
    }
}

/// The vertex buffer of a face.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaceDescription {
    /// The vertices polygons can reference.
    pub vertices: Vec<VertexDescription>,
}

/// A triangle referencing three vertices of a face.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleDescription {
    /// The index of the face in [`MeshDescription::faces`].
    pub face: u32,
    /// The vertex indices in the face.
    pub vertices: [u32; 3],
    /// The metadata of the triangle.
    #[cfg_attr(feature = "serde-serialize", serde(flatten))]
    pub data: PolygonData,
}

/// A quad referencing four vertices of a face.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadDescription {
    /// The index of the face in [`MeshDescription::faces`].
    pub face: u32,
    /// The vertex indices in the face, in counter-clockwise order.
    pub vertices: [u32; 4],
    /// The metadata of the quad.
    #[cfg_attr(feature = "serde-serialize", serde(flatten))]
    pub data: PolygonData,
}

/// A named group of polygons.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartDescription {
    /// The name of the part.
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub name: String,
    /// The triangles of the part.
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub triangles: Vec<TriangleDescription>,
    /// The quads of the part.
    #[cfg_attr(feature = "serde-serialize", serde(default))]
    pub quads: Vec<QuadDescription>,
}

/// The declarative description of a [`Mesh`].
///
/// Faces only hold vertices. Polygons are grouped into parts and reference the face they
/// belong to; all the polygons referencing the same face end up in a single [`Face`](crate::shape::Face).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshDescription {
    /// The name of the mesh.
    pub name: String,
    /// The vertex buffers.
    pub faces: Vec<FaceDescription>,
    /// The polygon groups.
    pub parts: Vec<PartDescription>,
}

impl Mesh {
    /// Builds and validates a mesh from its declarative description.
    ///
    /// Within each face, polygons are ordered by part, triangles first. Identical vertices of a
    /// face are merged. Each part of the mesh holds the faces its polygons reference, in order of
    /// first reference; parts with the same name are merged.
    pub fn from_description(desc: &MeshDescription) -> Result<Mesh, MeshBuilderError> {
        let num_faces = desc.faces.len() as u32;
        let mut faces: Vec<_> = desc
            .faces
            .iter()
            .map(|face| {
                let mut builder = FaceBuilder::new();
                let remap: Vec<u32> = face
                    .vertices
                    .iter()
                    .map(|v| builder.push_vertex((*v).into()))
                    .collect();
                (builder, remap)
            })
            .collect();

        let mut push = |face: u32, polygon: Polygon| -> Result<(), MeshBuilderError> {
            let (builder, remap) = faces
                .get_mut(face as usize)
                .ok_or(MeshBuilderError::InvalidFaceIndex { face, num_faces })?;
            // Out-of-bounds indices are kept as-is so the builder reports them.
            let remapped = |i: u32| remap.get(i as usize).copied().unwrap_or(i);
            let polygon = match polygon {
                Polygon::Triangle { indices, data } => Polygon::Triangle {
                    indices: indices.map(remapped),
                    data,
                },
                Polygon::Quad { indices, data } => Polygon::Quad {
                    indices: indices.map(remapped),
                    data,
                },
            };
            let _ = builder.push_polygon(polygon);
            Ok(())
        };

        let mut part_faces = Vec::with_capacity(desc.parts.len());

        for part in &desc.parts {
            let mut referenced = vec![];

            for tri in &part.triangles {
                push(
                    tri.face,
                    Polygon::Triangle {
                        indices: tri.vertices,
                        data: tri.data,
                    },
                )?;
                referenced.push(tri.face);
            }

            for quad in &part.quads {
                push(
                    quad.face,
                    Polygon::Quad {
                        indices: quad.vertices,
                        data: quad.data,
                    },
                )?;
                referenced.push(quad.face);
            }

            part_faces.push((part.name.as_str(), referenced));
        }

        let mut builder = MeshBuilder::new(desc.name.clone());
        for (face, _) in faces {
            let _ = builder.push_face(face);
        }
        for (name, faces) in part_faces {
            let _ = builder.push_part(name, faces);
        }

        builder.build()
    }
}
