//! Transformation, slicing and fracturing of meshes.

pub mod fracture;
mod to_mesh;
