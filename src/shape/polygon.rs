use crate::math::{Point, Real};
use crate::shape::{PolygonShape, Quad, Triangle, Vertex};
use std::fmt;

/// The side of a unit block a polygon is hidden by.
///
/// This is rendering metadata carried along the mesh. It doesn’t affect voxelization.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "i32", into = "i32")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CullFace {
    /// The polygon is never culled.
    #[default]
    None,
    /// Culled by the neighbor below (`-Y`).
    Down,
    /// Culled by the neighbor above (`+Y`).
    Up,
    /// Culled by the neighbor at `-Z`.
    North,
    /// Culled by the neighbor at `+Z`.
    South,
    /// Culled by the neighbor at `-X`.
    West,
    /// Culled by the neighbor at `+X`.
    East,
}

/// Error returned when converting an out-of-range integer into a [`CullFace`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("invalid cull face index {0}, expected a value in [-1, 5]")]
pub struct InvalidCullFace(pub i32);

impl CullFace {
    /// All the cull faces, ordered by index.
    pub const ALL: [CullFace; 7] = [
        CullFace::None,
        CullFace::Down,
        CullFace::Up,
        CullFace::North,
        CullFace::South,
        CullFace::West,
        CullFace::East,
    ];

    /// The integer index of this cull face, from `-1` (`None`) to `5` (`East`).
    #[inline]
    pub fn index(self) -> i32 {
        match self {
            CullFace::None => -1,
            CullFace::Down => 0,
            CullFace::Up => 1,
            CullFace::North => 2,
            CullFace::South => 3,
            CullFace::West => 4,
            CullFace::East => 5,
        }
    }
}

impl TryFrom<i32> for CullFace {
    type Error = InvalidCullFace;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        match index {
            -1 => Ok(CullFace::None),
            0 => Ok(CullFace::Down),
            1 => Ok(CullFace::Up),
            2 => Ok(CullFace::North),
            3 => Ok(CullFace::South),
            4 => Ok(CullFace::West),
            5 => Ok(CullFace::East),
            _ => Err(InvalidCullFace(index)),
        }
    }
}

impl From<CullFace> for i32 {
    fn from(face: CullFace) -> i32 {
        face.index()
    }
}

impl fmt::Display for CullFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CullFace::None => "none",
            CullFace::Down => "down",
            CullFace::Up => "up",
            CullFace::North => "north",
            CullFace::South => "south",
            CullFace::West => "west",
            CullFace::East => "east",
        };
        f.write_str(name)
    }
}

/// Per-polygon rendering metadata.
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(default)
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PolygonData {
    /// The index of the texture applied to the polygon.
    pub texture: u32,
    /// The tint index of the polygon, if it is tinted.
    pub tint: Option<u32>,
    /// The side this polygon is culled by.
    pub cull_face: CullFace,
}

impl PolygonData {
    /// Polygon data with the given texture, no tint, and no cull face.
    pub fn with_texture(texture: u32) -> Self {
        Self {
            texture,
            ..Self::default()
        }
    }
}

/// A polygon of a face, referencing the vertices of that face by index.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Polygon {
    /// A triangle.
    Triangle {
        /// Indices of the three vertices in the owning face.
        indices: [u32; 3],
        /// Metadata of this triangle.
        data: PolygonData,
    },
    /// A quad.
    Quad {
        /// Indices of the four vertices in the owning face, in counter-clockwise order.
        indices: [u32; 4],
        /// Metadata of this quad.
        data: PolygonData,
    },
}

impl Polygon {
    /// The vertex indices of this polygon.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        match self {
            Polygon::Triangle { indices, .. } => indices,
            Polygon::Quad { indices, .. } => indices,
        }
    }

    /// The metadata of this polygon.
    #[inline]
    pub fn data(&self) -> &PolygonData {
        match self {
            Polygon::Triangle { data, .. } | Polygon::Quad { data, .. } => data,
        }
    }

    /// Resolves the vertex indices of this polygon into its geometric shape.
    ///
    /// Returns `None` if any index is out of bounds of `vertices`.
    pub fn resolve(&self, vertices: &[Vertex]) -> Option<PolygonShape> {
        let pos = |i: u32| -> Option<Point<Real>> { vertices.get(i as usize).map(|v| v.pos) };

        match self {
            Polygon::Triangle { indices, .. } => Some(PolygonShape::Triangle(Triangle::new(
                pos(indices[0])?,
                pos(indices[1])?,
                pos(indices[2])?,
            ))),
            Polygon::Quad { indices, .. } => Some(PolygonShape::Quad(Quad::new(
                pos(indices[0])?,
                pos(indices[1])?,
                pos(indices[2])?,
                pos(indices[3])?,
            ))),
        }
    }
}
