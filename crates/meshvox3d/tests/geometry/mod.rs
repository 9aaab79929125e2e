mod aabb_tree_query;
mod mesh_description;
mod mesh_ray_cast;
mod shapes;
mod voxelization_properties;
mod voxelization_task;
mod voxelize_cube;
