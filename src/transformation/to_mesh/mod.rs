//! Conversion of simple shapes to meshes.

mod cuboid_to_mesh;
