use crate::math::{Isometry, Real, Vector};
use crate::shape::{MeshBuilderError, Polygon, PolygonData, PolygonShape, Vertex};
use crate::utils::HashMap;

/// A group of polygons sharing a vertex buffer.
///
/// Faces are created through a [`FaceBuilder`] pushed into a [`MeshBuilder`](crate::shape::MeshBuilder),
/// which guarantees that every polygon index is valid and every vertex finite. Deserialized
/// faces go through the same validation.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "FaceBuilder")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    vertices: Vec<Vertex>,
    polygons: Vec<Polygon>,
    normal: Vector<Real>,
}

impl Face {
    /// The vertex buffer of this face.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// The polygons of this face, indexing [`Face::vertices`].
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The normal of this face: the normalized sum of the normals of its polygons.
    ///
    /// This is zero if every polygon is degenerate, or if their normals cancel out.
    #[inline]
    pub fn normal(&self) -> Vector<Real> {
        self.normal
    }

    /// The texture of the first polygon of this face.
    #[inline]
    pub fn texture(&self) -> Option<u32> {
        self.polygons.first().map(|p| p.data().texture)
    }

    /// The geometric shape of every polygon of this face.
    pub fn polygon_shapes(&self) -> impl ExactSizeIterator<Item = PolygonShape> + '_ {
        self.polygons.iter().map(|polygon| {
            polygon
                .resolve(&self.vertices)
                .unwrap_or_else(|| unreachable!("face polygon indices are validated"))
        })
    }

    /// A copy of this face with all its vertices transformed by `m`.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| v.transformed(m)).collect(),
            polygons: self.polygons.clone(),
            normal: m * self.normal,
        }
    }

    /// A copy of this face with all its vertices shifted by `shift`.
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex::new(v.pos + shift, v.normal, v.uv))
                .collect(),
            polygons: self.polygons.clone(),
            normal: self.normal,
        }
    }
}

/// Incremental construction of a [`Face`].
///
/// Identical vertices pushed through [`FaceBuilder::push_vertex`] (and the polygon helpers) are
/// stored once and shared by index.
#[cfg_attr(feature = "serde-serialize", derive(Deserialize))]
#[derive(Clone, Debug, Default)]
pub struct FaceBuilder {
    vertices: Vec<Vertex>,
    polygons: Vec<Polygon>,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    lookup: HashMap<[u64; 8], u32>,
}

impl FaceBuilder {
    /// An empty face builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of distinct vertices pushed so far.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of polygons pushed so far.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Adds a vertex to this face and returns its index.
    ///
    /// If an identical vertex was already pushed, its index is returned instead.
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        let next_id = self.vertices.len() as u32;
        let id = *self.lookup.entry(vertex.bits()).or_insert(next_id);

        if id == next_id {
            self.vertices.push(vertex);
        }

        id
    }

    /// Adds a triangle made of the given vertices.
    pub fn push_triangle(&mut self, vertices: [Vertex; 3], data: PolygonData) -> &mut Self {
        let indices = vertices.map(|v| self.push_vertex(v));
        self.push_polygon(Polygon::Triangle { indices, data })
    }

    /// Adds a quad made of the given vertices, in counter-clockwise order.
    pub fn push_quad(&mut self, vertices: [Vertex; 4], data: PolygonData) -> &mut Self {
        let indices = vertices.map(|v| self.push_vertex(v));
        self.push_polygon(Polygon::Quad { indices, data })
    }

    /// Adds a polygon indexing vertices of this face.
    ///
    /// Indices are only checked when the mesh is built.
    pub fn push_polygon(&mut self, polygon: Polygon) -> &mut Self {
        self.polygons.push(polygon);
        self
    }

    pub(crate) fn build(self, face_id: u32) -> Result<Face, MeshBuilderError> {
        let num_vertices = self.vertices.len() as u32;

        if let Some(vertex) = self.vertices.iter().position(|v| !v.is_finite()) {
            return Err(MeshBuilderError::NonFiniteVertex {
                face: face_id,
                vertex: vertex as u32,
            });
        }

        let mut normal = Vector::zeros();

        for (polygon_id, polygon) in self.polygons.iter().enumerate() {
            if let Some(index) = polygon.indices().iter().find(|i| **i >= num_vertices) {
                return Err(MeshBuilderError::InvalidVertexIndex {
                    face: face_id,
                    polygon: polygon_id as u32,
                    index: *index,
                    num_vertices,
                });
            }

            if let Some(n) = polygon.resolve(&self.vertices).and_then(|s| s.normal()) {
                normal += n.into_inner();
            }
        }

        let normal = normal
            .try_normalize(crate::math::DEFAULT_EPSILON)
            .unwrap_or_else(Vector::zeros);

        Ok(Face {
            vertices: self.vertices,
            polygons: self.polygons,
            normal,
        })
    }
}

impl TryFrom<FaceBuilder> for Face {
    type Error = MeshBuilderError;

    /// Validates a standalone face. Errors report it as the face `0`.
    fn try_from(builder: FaceBuilder) -> Result<Self, Self::Error> {
        builder.build(0)
    }
}
