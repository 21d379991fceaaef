use crate::math::{Point, Real, Vector};
use crate::shape::Plane;

/// Computes the toi of an unbounded line with a plane.
///
/// The toi is expressed in multiples of `line_dir`. Returns `None` if the line is
/// exactly parallel to the plane, or if the result is not finite.
///
/// No tolerance is applied: a line crossing the plane with a tiny slope, e.g. an edge
/// with one endpoint barely off the plane, still gets a valid toi.
#[inline]
pub fn line_toi_with_plane(
    plane: &Plane,
    line_origin: &Point<Real>,
    line_dir: &Vector<Real>,
) -> Option<Real> {
    let denom = plane.normal.dot(line_dir);

    if denom == 0.0 {
        None
    } else {
        let toi = -plane.signed_distance(line_origin) / denom;
        toi.is_finite().then_some(toi)
    }
}
