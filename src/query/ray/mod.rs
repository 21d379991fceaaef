//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::Ray;
pub use self::ray_plane::line_toi_with_plane;

#[doc(hidden)]
pub mod ray;
mod ray_plane;
