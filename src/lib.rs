/*!
meshvox
========

**meshvox** is a 3-dimensional mesh voxelization library written with
the rust programming language.

It turns a textured polygon surface (triangles and quads grouped into faces) into
a conservative set of axis-aligned boxes laid on a regular grid. The building blocks
(bounding volumes, an incremental AABB tree, ray casting and separating-axis tests)
are exposed on their own as well.

```
# #[cfg(feature = "f32")] {
use meshvox3d::math::Point;
use meshvox3d::shape::{MeshBuilder, PolygonData};
use meshvox3d::transformation::voxelization::{Voxelizer, VoxelizerConfig};

let mut builder = MeshBuilder::new("tile");
builder.push_quad_face(
    [
        Point::new(0.0, 0.25, 0.0),
        Point::new(1.0, 0.25, 0.0),
        Point::new(1.0, 0.25, 1.0),
        Point::new(0.0, 0.25, 1.0),
    ],
    PolygonData::default(),
);
let mesh = builder.build().unwrap();

let config = VoxelizerConfig {
    resolution: 1,
    ..VoxelizerConfig::default()
};
let boxes = Voxelizer::new(&mesh, config).unwrap().voxelize().unwrap();
assert!(!boxes.is_empty());
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point2, Point3, UnitVector3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
