//! Volume and center-of-mass of closed triangle meshes.

pub use self::mass_properties_mesh::{
    origin_tetrahedron_signed_volume, trimesh_signed_volume,
    trimesh_signed_volume_and_center_of_mass, trimesh_volume, volume_or_zero,
};

mod mass_properties_mesh;
