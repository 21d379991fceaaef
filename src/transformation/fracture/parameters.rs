use crate::math::Real;
use crate::transformation::fracture::FractureError;

/// The default margin added around a fragment's bounds before sampling a cutting plane.
pub const DEFAULT_BOUNDS_MARGIN: Real = 0.5;
/// The default minimum volume a fragment must have to be fractured again.
pub const DEFAULT_REFRACTURE_VOLUME_THRESHOLD: Real = 0.2;

/// Parameters controlling the fracture of a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct FractureParameters {
    /// The number of cutting levels.
    ///
    /// Each level cuts every fragment in two, so a fracture produces
    /// `2^cut_cascades` fragments (some of which may be empty).
    ///
    /// Default: 1
    pub cut_cascades: u32,
    /// Scale of the impulse pushing every fragment away from the source's position.
    ///
    /// Default: 0.0
    pub explode_force: Real,
    /// Margin added on each side of a fragment's bounds before picking a point of the
    /// cutting plane inside of them.
    ///
    /// A positive margin lets some planes miss the fragment entirely.
    ///
    /// Default: 0.5
    pub bounds_margin: Real,
    /// Fragments with a volume smaller than this threshold are flagged as not
    /// fracturable anymore.
    ///
    /// Default: 0.2
    pub refracture_volume_threshold: Real,
    /// The density used to derive each fragment's mass from its world-space volume.
    ///
    /// Default: 1.0
    pub density: Real,
}

impl Default for FractureParameters {
    fn default() -> Self {
        Self {
            cut_cascades: 1,
            explode_force: 0.0,
            bounds_margin: DEFAULT_BOUNDS_MARGIN,
            refracture_volume_threshold: DEFAULT_REFRACTURE_VOLUME_THRESHOLD,
            density: 1.0,
        }
    }
}

impl FractureParameters {
    /// Checks that every parameter is within its valid range.
    pub fn validate(&self) -> Result<(), FractureError> {
        if !self.explode_force.is_finite() {
            return Err(FractureError::InvalidParameters(
                "the explode force must be finite",
            ));
        }

        if !(self.bounds_margin.is_finite() && self.bounds_margin >= 0.0) {
            return Err(FractureError::InvalidParameters(
                "the bounds margin must be finite and non-negative",
            ));
        }

        if !(self.refracture_volume_threshold.is_finite()
            && self.refracture_volume_threshold >= 0.0)
        {
            return Err(FractureError::InvalidParameters(
                "the refracture volume threshold must be finite and non-negative",
            ));
        }

        if !(self.density.is_finite() && self.density >= 0.0) {
            return Err(FractureError::InvalidParameters(
                "the density must be finite and non-negative",
            ));
        }

        Ok(())
    }
}
