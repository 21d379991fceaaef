//! Geometric queries.

pub use self::ray::{line_toi_with_plane, Ray};

pub mod ray;
