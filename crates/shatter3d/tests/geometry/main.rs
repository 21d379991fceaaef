#[macro_use]
extern crate approx;

mod cube_slice;
mod fracture_cascade;
mod slice_classification;
