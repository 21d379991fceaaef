//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// The direction does **not** need to be normalized. The time of impact of a ray
/// is expressed in multiples of `dir`: casting a ray from `a` with `dir = b - a`
/// yields the fractional position of the hit along the segment `[a, b]`, which is
/// how the slicer interpolates vertex attributes along cut edges.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Creates the ray starting at `a` and reaching `b` at time `1.0`.
    pub fn from_segment(a: &Point<Real>, b: &Point<Real>) -> Ray {
        Ray::new(*a, b - a)
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
