//! Transformation of meshes.

pub mod voxelization;
