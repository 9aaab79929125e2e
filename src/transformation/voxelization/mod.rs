//! Conversion of a mesh into a set of boxes laid on a regular grid.
//!
//! The [`Voxelizer`] classifies every cell of a [`VoxelGrid`] covering the mesh bounds. With the
//! `parallel` feature, cells are classified concurrently on rayon’s global thread pool. The
//! occupied cells are then optionally merged into larger boxes.

pub use self::error::{VoxelizationError, VoxelizationErrorKind};
pub use self::voxel_grid::VoxelGrid;
pub use self::voxelization_task::{CancellationToken, VoxelizationTask, VoxelizerState};
pub use self::voxelizer::{Voxelization, Voxelizer, VoxelizerConfig};

mod error;
mod voxel_grid;
mod voxel_simplification;
mod voxelization_task;
mod voxelizer;
