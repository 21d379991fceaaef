/*!
shatter3d
=========

**shatter3d** is a 3-dimensional mesh fracturing library written with
the rust programming language. The `shatter3d-f64` crate builds the same
library with 64-bit floats.

A closed triangle mesh is split by a cascade of random planes. Every cut
cross-section is capped with new triangles so that each resulting fragment
stays a closed solid that can be rendered and simulated on its own.

```
# #[cfg(feature = "f32")] {
use rand::SeedableRng;
use shatter3d::bounding_volume::Aabb;
use shatter3d::na::Point3;
use shatter3d::transformation::fracture::{fracture_mesh, FractureParameters};

let cube = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).to_mesh();
let params = FractureParameters {
    cut_cascades: 2,
    ..FractureParameters::default()
};
let mut rng = rand::rngs::StdRng::seed_from_u64(42);
let fragments = fracture_mesh(&cube, &params, &mut rng).unwrap();
assert_eq!(fragments.len(), 4);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![deny(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;
pub extern crate rand;

pub mod bounding_volume;
pub mod mass_properties;
pub mod query;
pub mod shape;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point2, Point3, UnitVector3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The texture coordinates type.
    pub use Point2 as TexCoords;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;
}
