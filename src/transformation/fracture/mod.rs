//! Fracturing of meshes by cascades of random planes.
//!
//! A mesh is cut in two by a random plane, then each half is cut again, and so on.
//! Every cut is closed by a cap so that all the fragments remain closed solids.

pub use self::cap_builder::CapBuilder;
pub use self::fracture::{fracture_mesh, random_cut_plane, Fracture};
pub use self::fracture_error::FractureError;
pub use self::fragment::{Fragment, FragmentBuilder};
pub use self::host::FractureHost;
pub use self::materialize::{MaterializedFragment, SourceDescriptor, Transform};
pub use self::parameters::{
    FractureParameters, DEFAULT_BOUNDS_MARGIN, DEFAULT_REFRACTURE_VOLUME_THRESHOLD,
};
pub use self::slice::{slice, slice_pair, slice_with_stats, SliceStats};

mod cap_builder;
mod fracture;
mod fracture_error;
mod fragment;
mod host;
mod materialize;
mod parameters;
mod slice;
