use crate::math::{Point, Real};

/// The reason why a voxelization failed.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum VoxelizationErrorKind {
    /// The voxelizer was configured with a zero resolution.
    #[error("the resolution must be at least 1.")]
    InvalidResolution,
    /// The grid has more cells than allowed by [`VoxelizerConfig::max_cells`](super::VoxelizerConfig::max_cells).
    #[error("the grid has {num_cells} cells but at most {max_cells} are allowed.")]
    GridTooLarge {
        /// The number of cells of the grid.
        num_cells: u64,
        /// The maximum number of cells allowed.
        max_cells: u64,
    },
    /// The mesh bounds, scaled by the resolution, can't be represented by integer cell coordinates.
    #[error("the mesh bounds are out of range at the resolution {resolution}.")]
    BoundsOutOfRange {
        /// The resolution of the grid.
        resolution: u32,
    },
    /// The voxelization was cancelled through its [`CancellationToken`](super::CancellationToken).
    #[error("the voxelization was cancelled.")]
    Cancelled,
    /// The distance between a ray hit and a voxel center is NaN or infinite.
    #[error("non-finite distance to a ray hit while classifying the voxel centered at {center}.")]
    NonFiniteDistance {
        /// The center of the voxel being classified.
        center: Point<Real>,
    },
    /// The thread running a spawned voxelization panicked.
    #[error("the voxelization task panicked.")]
    TaskPanicked,
}

/// Error returned when a mesh can't be voxelized.
///
/// The whole voxelization fails: no partial result is ever returned.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("failed to voxelize mesh {mesh}")]
pub struct VoxelizationError {
    /// The name of the mesh being voxelized.
    pub mesh: String,
    /// What went wrong.
    #[source]
    pub kind: VoxelizationErrorKind,
}

impl VoxelizationError {
    /// Creates an error for the mesh named `mesh`.
    pub fn new(mesh: impl Into<String>, kind: VoxelizationErrorKind) -> Self {
        Self {
            mesh: mesh.into(),
            kind,
        }
    }
}
