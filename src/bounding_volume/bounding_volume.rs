//! The bounding volume trait.

use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// A bounding volume is a coarse approximation of a set of points that can be
/// merged with others and enlarged by a margin. Fragment bounds are loosened this way
/// before a cutting plane is sampled inside of them.
pub trait BoundingVolume {
    /// A point inside of this bounding volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Does this bounding volume intersect `other`?
    fn intersects(&self, other: &Self) -> bool;

    /// Does this bounding volume fully contain `other`?
    fn contains(&self, other: &Self) -> bool;

    /// Merges `other` into this bounding volume, in-place.
    fn merge(&mut self, other: &Self);

    /// The smallest bounding volume containing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// A copy of this bounding volume enlarged by `amount` on every side.
    fn loosened(&self, amount: Real) -> Self;
}
