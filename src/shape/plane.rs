//! Oriented infinite plane.
use crate::math::{Point, Real, UnitVector, Vector};
use na::Unit;

/// An infinite plane, delimiting two half-spaces.
///
/// The plane is the set of points `p` such that `normal.dot(p) == bias`. The
/// half-space pointed to by `normal` is the *positive* side of the plane.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane's unit normal, pointing toward its positive half-space.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub bias: Real,
}

impl Plane {
    /// Builds a new plane from its normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, bias: Real) -> Plane {
        Plane { normal, bias }
    }

    /// Builds the plane with the given normal and passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: UnitVector<Real>, point: &Point<Real>) -> Plane {
        Plane {
            normal,
            bias: normal.dot(&point.coords),
        }
    }

    /// Builds the plane passing through the three given points.
    ///
    /// The normal is oriented such that `a`, `b`, `c` appear counterclockwise when
    /// seen from the positive side. Returns `None` if the points are exactly collinear,
    /// or if their coordinates aren't finite.
    ///
    /// Tiny but non-degenerate triangles still define a plane, whatever their scale.
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Option<Plane> {
        let normal = triangle_normal_direction(a, b, c)?;
        Some(Self::from_normal_and_point(normal, a))
    }

    /// The same plane, with its two half-spaces swapped.
    #[inline]
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            bias: -self.bias,
        }
    }

    /// The signed distance between `pt` and this plane.
    ///
    /// Positive if `pt` lies on the positive half-space.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.bias
    }

    /// Is `pt` strictly on the positive side of this plane?
    ///
    /// Points lying exactly on the plane are considered to be on its negative side.
    #[inline]
    pub fn is_on_positive_side(&self, pt: &Point<Real>) -> bool {
        self.signed_distance(pt) > 0.0
    }
}

/// The unit normal of the triangle `(a, b, c)`, following its counterclockwise winding.
///
/// Returns `None` if the triangle has exactly zero area or non-finite coordinates.
pub fn triangle_normal_direction(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> Option<UnitVector<Real>> {
    let cross: Vector<Real> = (b - a).cross(&(c - a));
    if !cross.iter().all(|e| e.is_finite()) {
        return None;
    }

    // Rescale before normalizing so tiny triangles don't underflow to a zero norm.
    let scale = cross.amax();
    if scale == 0.0 {
        return None;
    }

    Some(Unit::new_normalize(cross / scale))
}
