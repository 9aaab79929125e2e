use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Isometry, Point, Point2, Real, Vector};
use crate::partitioning::{AabbTree, AabbTreeSearch};
use crate::shape::{Face, FaceBuilder, Part, PolygonData, PolygonShape, Vertex};
use crate::utils::HashMap;

/// Indicated an inconsistency while building a mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// A polygon references a vertex that doesn’t exist in its face.
    #[error("polygon {polygon} of face {face} references the vertex {index} but the face only has {num_vertices} vertices.")]
    InvalidVertexIndex {
        /// The face containing the faulty polygon.
        face: u32,
        /// The faulty polygon, within its face.
        polygon: u32,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the face.
        num_vertices: u32,
    },
    /// A vertex has a NaN or infinite position, normal, or texture coordinate.
    #[error("the vertex {vertex} of face {face} has a non-finite component.")]
    NonFiniteVertex {
        /// The face containing the faulty vertex.
        face: u32,
        /// The faulty vertex, within its face.
        vertex: u32,
    },
    /// A polygon of a mesh description, or a part, references a face that doesn’t exist.
    #[error("the face {face} is referenced but the mesh only has {num_faces} faces.")]
    InvalidFaceIndex {
        /// The out-of-bounds face index.
        face: u32,
        /// The number of faces of the description.
        num_faces: u32,
    },
}

/// A polygon of a [`Mesh`], resolved into world-space geometry.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeshPolygon {
    /// The index of this polygon in [`Mesh::polygons`].
    pub id: u32,
    /// The index of the face this polygon belongs to.
    pub face: u32,
    /// The index of this polygon within its face.
    pub polygon: u32,
    /// The geometry of this polygon.
    pub shape: PolygonShape,
    /// The unit normal of this polygon, or zero if it is degenerate.
    pub normal: Vector<Real>,
    /// The bounding box of this polygon.
    pub aabb: Aabb,
    /// The metadata of this polygon.
    pub data: PolygonData,
}

impl MeshPolygon {
    fn new(id: u32, face: u32, polygon: u32, shape: PolygonShape, data: PolygonData) -> Self {
        Self {
            id,
            face,
            polygon,
            shape,
            normal: shape
                .normal()
                .map(|n| n.into_inner())
                .unwrap_or_else(Vector::zeros),
            aabb: shape.local_aabb(),
            data,
        }
    }

    /// Is `point` strictly behind this polygon, i.e., on the opposite side of its normal?
    ///
    /// For a closed mesh with outward normals, this tells if the point is on the inner side of
    /// the polygon. Always `false` for degenerate polygons.
    #[inline]
    pub fn is_facing(&self, point: &Point<Real>) -> bool {
        self.normal.dot(&(point - self.shape.first_vertex())) < 0.0
    }
}

/// An immutable textured polygon surface, indexed for spatial queries.
///
/// A mesh is made of [`Face`]s. The polygons of every face are flattened into a list of
/// [`MeshPolygon`]s, all inserted (in order) into an [`AabbTree`]. Transforming a mesh
/// creates a new mesh with its own bounding box and tree.
///
/// Faces can be grouped into named [`Part`]s.
///
/// A deserialized mesh is rebuilt from its name, faces and parts; its polygons, bounding boxes
/// and tree are recomputed.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "SerializedMesh")
)]
#[derive(Clone, Debug)]
pub struct Mesh {
    name: String,
    faces: Vec<Face>,
    parts: Vec<Part>,
    #[cfg_attr(feature = "serde-serialize", serde(skip))]
    part_ids: HashMap<String, u32>,
    polygons: Vec<MeshPolygon>,
    aabb: Aabb,
    tree: AabbTree<u32>,
}

impl Mesh {
    /// Creates a mesh, without any part, from already validated faces.
    pub fn from_faces(name: impl Into<String>, faces: Vec<Face>) -> Self {
        let mut polygons = vec![];

        for (face_id, face) in faces.iter().enumerate() {
            for (polygon_id, (polygon, shape)) in
                face.polygons().iter().zip(face.polygon_shapes()).enumerate()
            {
                polygons.push(MeshPolygon::new(
                    polygons.len() as u32,
                    face_id as u32,
                    polygon_id as u32,
                    shape,
                    *polygon.data(),
                ));
            }
        }

        let mut aabb = Aabb::new_invalid();
        for polygon in &polygons {
            aabb.merge(&polygon.aabb);
        }

        let tree = AabbTree::build(0..polygons.len() as u32, |id| polygons[*id as usize].aabb);

        Self {
            name: name.into(),
            faces,
            parts: vec![],
            part_ids: HashMap::default(),
            polygons,
            aabb,
            tree,
        }
    }

    /// Groups the faces of this mesh into the given named parts, replacing the existing ones.
    ///
    /// Fails if a part references a face that doesn’t exist.
    pub fn with_parts(
        self,
        parts: impl IntoIterator<Item = (String, Vec<u32>)>,
    ) -> Result<Self, MeshBuilderError> {
        let parts: Vec<_> = parts.into_iter().collect();
        let num_faces = self.faces.len() as u32;

        for (_, faces) in &parts {
            if let Some(face) = faces.iter().find(|f| **f >= num_faces) {
                return Err(MeshBuilderError::InvalidFaceIndex {
                    face: *face,
                    num_faces,
                });
            }
        }

        Ok(self.attach_parts(parts))
    }

    fn attach_parts(mut self, parts: Vec<(String, Vec<u32>)>) -> Self {
        let mut face_aabbs = vec![Aabb::new_invalid(); self.faces.len()];
        for polygon in &self.polygons {
            face_aabbs[polygon.face as usize].merge(&polygon.aabb);
        }

        self.parts = parts
            .into_iter()
            .map(|(name, faces)| {
                let mut aabb = Aabb::new_invalid();
                for face in &faces {
                    aabb.merge(&face_aabbs[*face as usize]);
                }
                Part { name, faces, aabb }
            })
            .collect();
        // With duplicate names, the last part wins.
        self.part_ids = self
            .parts
            .iter()
            .enumerate()
            .map(|(id, part)| (part.name.clone(), id as u32))
            .collect();
        self
    }

    fn part_faces(&self) -> Vec<(String, Vec<u32>)> {
        self.parts
            .iter()
            .map(|part| (part.name.clone(), part.faces.clone()))
            .collect()
    }

    /// The name of this mesh, used to identify it in diagnostics.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The faces of this mesh.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The parts of this mesh, in insertion order.
    #[inline]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The part with the given name, if any.
    pub fn part(&self, name: &str) -> Option<&Part> {
        self.part_ids
            .get(name)
            .map(|id| &self.parts[*id as usize])
    }

    /// The resolved polygons of every face of this mesh, face after face.
    #[inline]
    pub fn polygons(&self) -> &[MeshPolygon] {
        &self.polygons
    }

    /// The polygon with the given index in [`Mesh::polygons`].
    #[inline]
    pub fn polygon(&self, id: u32) -> &MeshPolygon {
        &self.polygons[id as usize]
    }

    /// The bounding box of every polygon of this mesh.
    ///
    /// This is an invalid AABB if the mesh has no polygon.
    #[inline]
    pub fn local_aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The spatial index over [`Mesh::polygons`].
    #[inline]
    pub fn tree(&self) -> &AabbTree<u32> {
        &self.tree
    }

    /// Does this mesh have no polygon at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Lazily enumerates the polygons whose bounding box intersects `aabb`.
    pub fn search<'a>(&'a self, aabb: &Aabb) -> MeshSearch<'a> {
        MeshSearch {
            mesh: self,
            search: self.tree.search(aabb),
        }
    }

    /// A copy of this mesh with every vertex shifted by `shift`.
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        let faces = self.faces.iter().map(|f| f.translated(shift)).collect();
        Self::from_faces(self.name.clone(), faces).attach_parts(self.part_faces())
    }

    /// A copy of this mesh with every vertex position and normal transformed by `m`.
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        let faces = self.faces.iter().map(|f| f.transformed(m)).collect();
        Self::from_faces(self.name.clone(), faces).attach_parts(self.part_faces())
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct SerializedPart {
    name: String,
    faces: Vec<u32>,
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct SerializedMesh {
    name: String,
    faces: Vec<Face>,
    #[serde(default)]
    parts: Vec<SerializedPart>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<SerializedMesh> for Mesh {
    type Error = MeshBuilderError;

    fn try_from(mesh: SerializedMesh) -> Result<Self, Self::Error> {
        Mesh::from_faces(mesh.name, mesh.faces)
            .with_parts(mesh.parts.into_iter().map(|p| (p.name, p.faces)))
    }
}

/// Iterator over the polygons of a [`Mesh`] whose bounding box intersects a query box.
///
/// Created by [`Mesh::search`].
pub struct MeshSearch<'a> {
    mesh: &'a Mesh,
    search: AabbTreeSearch<'a, u32>,
}

impl<'a> Iterator for MeshSearch<'a> {
    type Item = &'a MeshPolygon;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let mesh = self.mesh;
        self.search.next().map(|id| mesh.polygon(*id))
    }
}

/// Incremental construction of a [`Mesh`].
///
/// Faces are validated when [`MeshBuilder::build`] is called.
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    name: String,
    faces: Vec<FaceBuilder>,
    parts: Vec<(String, Vec<u32>)>,
}

impl MeshBuilder {
    /// Starts building a mesh with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: vec![],
            parts: vec![],
        }
    }

    /// The number of faces pushed so far.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Adds the faces with the given indices to the part named `name`.
    ///
    /// The part is created if it doesn’t exist yet. Faces already in the part are ignored.
    /// Indices are only checked when the mesh is built.
    pub fn push_part(
        &mut self,
        name: impl Into<String>,
        faces: impl IntoIterator<Item = u32>,
    ) -> &mut Self {
        let name = name.into();
        let id = match self.parts.iter().position(|(n, _)| *n == name) {
            Some(id) => id,
            None => {
                self.parts.push((name, vec![]));
                self.parts.len() - 1
            }
        };

        let part_faces = &mut self.parts[id].1;
        for face in faces {
            if !part_faces.contains(&face) {
                part_faces.push(face);
            }
        }

        self
    }

    /// Adds a face to the mesh.
    pub fn push_face(&mut self, face: FaceBuilder) -> &mut Self {
        self.faces.push(face);
        self
    }

    /// Adds a face made of a single triangle.
    ///
    /// The vertex normals are set to the triangle normal and the texture coordinates to zero.
    pub fn push_triangle_face(&mut self, points: [Point<Real>; 3], data: PolygonData) -> &mut Self {
        let normal = crate::shape::Triangle::from(points).scaled_normal();
        let mut face = FaceBuilder::new();
        let _ = face.push_triangle(points.map(|pt| flat_vertex(pt, normal)), data);
        self.push_face(face)
    }

    /// Adds a face made of a single quad, given in counter-clockwise order.
    ///
    /// The vertex normals are set to the quad normal and the texture coordinates to zero.
    pub fn push_quad_face(&mut self, points: [Point<Real>; 4], data: PolygonData) -> &mut Self {
        let normal = crate::shape::Quad::from(points).scaled_normal();
        let mut face = FaceBuilder::new();
        let _ = face.push_quad(points.map(|pt| flat_vertex(pt, normal)), data);
        self.push_face(face)
    }

    /// Validates every face and part, and builds the mesh.
    pub fn build(self) -> Result<Mesh, MeshBuilderError> {
        let faces = self
            .faces
            .into_iter()
            .enumerate()
            .map(|(id, face)| face.build(id as u32))
            .collect::<Result<Vec<_>, _>>()?;

        Mesh::from_faces(self.name, faces).with_parts(self.parts)
    }
}

fn flat_vertex(pos: Point<Real>, normal: Vector<Real>) -> Vertex {
    let normal = normal.try_normalize(0.0).unwrap_or_else(Vector::zeros);
    Vertex::new(pos, normal, Point2::origin())
}

#[cfg(test)]
mod test {
    use crate::bounding_volume::Aabb;
    use crate::math::{Isometry, Point, Vector};
    use crate::shape::{MeshBuilder, MeshBuilderError, PolygonData};

    fn two_separate_triangles() -> MeshBuilder {
        let mut builder = MeshBuilder::new("triangles");
        let _ = builder
            .push_triangle_face(
                [
                    Point::new(0.0, 0.0, 0.0),
                    Point::new(1.0, 0.0, 0.0),
                    Point::new(0.0, 1.0, 0.0),
                ],
                PolygonData::default(),
            )
            .push_triangle_face(
                [
                    Point::new(4.0, 0.0, 2.0),
                    Point::new(5.0, 0.0, 2.0),
                    Point::new(4.0, 1.0, 2.0),
                ],
                PolygonData::with_texture(1),
            );
        builder
    }

    #[test]
    fn mesh_bounds_and_search() {
        let mesh = two_separate_triangles().build().unwrap();

        assert_eq!(mesh.name(), "triangles");
        assert_eq!(mesh.faces().len(), 2);
        assert_eq!(mesh.polygons().len(), 2);
        assert_eq!(
            *mesh.local_aabb(),
            Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(5.0, 1.0, 2.0))
        );
        assert_relative_eq!(mesh.polygon(1).normal, Vector::z());
        assert_eq!(mesh.polygon(1).data.texture, 1);

        let query = Aabb::new(Point::new(3.5, -1.0, 1.5), Point::new(4.5, 1.0, 2.5));
        let found: Vec<_> = mesh.search(&query).map(|p| p.face).collect();
        assert_eq!(found, vec![1]);
    }

    #[test]
    fn empty_mesh() {
        let mesh = MeshBuilder::new("empty").build().unwrap();
        assert!(mesh.is_empty());
        assert!(!mesh.local_aabb().is_valid());
        assert!(mesh.tree().is_empty());
    }

    #[test]
    fn translated_mesh_is_a_new_mesh() {
        let mesh = two_separate_triangles().build().unwrap();
        let shift = Vector::new(1.0, 2.0, 3.0);
        let moved = mesh.translated(&shift);

        assert_eq!(*moved.local_aabb(), mesh.local_aabb().translated(&shift));
        assert_eq!(moved.faces()[0].vertices()[0].pos, Point::new(1.0, 2.0, 3.0));
        assert_eq!(mesh.faces()[0].vertices()[0].pos, Point::origin());
        let _ = moved.tree().assert_well_formed();
    }

    #[test]
    fn transformed_mesh_rotates_normals() {
        let mesh = two_separate_triangles().build().unwrap();
        let rot = Isometry::rotation(Vector::x() * crate::math::Real::from(std::f32::consts::FRAC_PI_2));
        let moved = mesh.transformed(&rot);

        assert_relative_eq!(moved.polygon(0).normal, -Vector::y(), epsilon = 1.0e-6);
        assert_relative_eq!(
            moved.faces()[0].vertices()[0].normal,
            -Vector::y(),
            epsilon = 1.0e-6
        );
    }

    #[test]
    fn builder_reports_faulty_face() {
        let mut builder = two_separate_triangles();
        let _ = builder.push_triangle_face(
            [
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(0.0, crate::math::Real::INFINITY, 0.0),
            ],
            PolygonData::default(),
        );

        assert!(matches!(
            builder.build(),
            Err(MeshBuilderError::NonFiniteVertex { face: 2, .. })
        ));
    }

    #[test]
    fn parts_group_faces() {
        let mut builder = two_separate_triangles();
        let _ = builder
            .push_part("left", [0])
            .push_part("all", [0, 1])
            .push_part("left", [0]);
        let mesh = builder.build().unwrap();

        assert_eq!(mesh.parts().len(), 2);
        assert_eq!(mesh.part("left").unwrap().faces(), &[0]);
        assert_eq!(
            *mesh.part("left").unwrap().local_aabb(),
            Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 0.0))
        );
        assert_eq!(mesh.part("all").unwrap().local_aabb(), mesh.local_aabb());
        assert!(mesh.part("right").is_none());

        let shift = Vector::new(0.0, 0.0, -1.0);
        let moved = mesh.translated(&shift);
        assert_eq!(moved.parts().len(), 2);
        assert_eq!(
            *moved.part("left").unwrap().local_aabb(),
            mesh.part("left").unwrap().local_aabb().translated(&shift)
        );

        let rotated = mesh.transformed(&Isometry::translation(1.0, 0.0, 0.0));
        assert_eq!(rotated.part("all").unwrap().faces(), &[0, 1]);
        assert_eq!(
            *rotated.part("all").unwrap().local_aabb(),
            Aabb::new(Point::new(1.0, 0.0, 0.0), Point::new(6.0, 1.0, 2.0))
        );
    }

    #[test]
    fn part_with_missing_face_is_rejected() {
        let mut builder = two_separate_triangles();
        let _ = builder.push_part("ghost", [1, 2]);

        assert_eq!(
            builder.build().unwrap_err(),
            MeshBuilderError::InvalidFaceIndex {
                face: 2,
                num_faces: 2
            }
        );
    }
}
