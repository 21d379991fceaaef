//! Shapes and mesh data manipulated by the fracturing pipeline.

pub use self::mesh::{Mesh, MeshBuilderError};
pub use self::plane::{triangle_normal_direction, Plane};

mod mesh;
mod plane;
