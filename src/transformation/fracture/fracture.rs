use rand::Rng;

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, UnitVector};
use crate::shape::{Mesh, Plane};
use crate::transformation::fracture::{
    slice_pair, FractureError, FractureHost, FractureParameters, Fragment,
};

/// Picks a random plane passing through the given bounds, loosened by `margin`.
///
/// The point of the plane is uniformly distributed inside of the loosened bounds, and
/// its normal is uniformly distributed on the unit sphere.
///
/// Returns `None` if the bounds are invalid (e.g. the bounds of an empty fragment) or
/// not finite.
pub fn random_cut_plane<R: Rng + ?Sized>(
    bounds: &Aabb,
    margin: Real,
    rng: &mut R,
) -> Option<Plane> {
    if !bounds.is_valid() || !margin.is_finite() || margin < 0.0 {
        return None;
    }

    let bounds = bounds.loosened(margin);
    if !bounds.extents().iter().all(|e| e.is_finite()) {
        return None;
    }

    let point = Point::new(
        rng.gen_range(bounds.mins.x..=bounds.maxs.x),
        rng.gen_range(bounds.mins.y..=bounds.maxs.y),
        rng.gen_range(bounds.mins.z..=bounds.maxs.z),
    );
    let normal: UnitVector<Real> = rng.gen();

    Some(Plane::from_normal_and_point(normal, &point))
}

/// Breaks a mesh into `2^params.cut_cascades` fragments.
///
/// Each cascade cuts every fragment of the previous one in two with a plane
/// given by [`random_cut_plane`]. The fragments are returned in cascade order: the
/// positive side of each cut comes right before its negative side.
///
/// Some of the fragments may be empty if a cutting plane misses the piece it cuts.
/// Empty fragments are still split (into two empty fragments) by the next cascades.
pub fn fracture_mesh<R: Rng + ?Sized>(
    mesh: &Mesh,
    params: &FractureParameters,
    rng: &mut R,
) -> Result<Vec<Fragment>, FractureError> {
    params.validate()?;

    let mut fragments = vec![Fragment::from_mesh(mesh)];

    for cascade in 0..params.cut_cascades {
        let mut next = Vec::with_capacity(fragments.len() * 2);

        for fragment in &fragments {
            match random_cut_plane(fragment.bounds(), params.bounds_margin, rng) {
                Some(plane) => {
                    let (positive, negative) = slice_pair(fragment, &plane);
                    next.push(positive);
                    next.push(negative);
                }
                None => {
                    if !fragment.is_empty() {
                        log::warn!("Fragment with non-finite bounds left uncut.");
                    }
                    next.push(fragment.clone());
                    next.push(Fragment::empty(fragment.submeshes().len()));
                }
            }
        }

        fragments = next;
        log::debug!(
            "Fracture cascade {}: {} fragments.",
            cascade + 1,
            fragments.len()
        );
    }

    Ok(fragments)
}

/// Fractures the objects of a [`FractureHost`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fracture {
    params: FractureParameters,
}

impl Fracture {
    /// Creates a new fracturing process with the given parameters.
    pub fn new(params: FractureParameters) -> Self {
        Self { params }
    }

    /// The parameters of this fracturing process.
    pub fn parameters(&self) -> &FractureParameters {
        &self.params
    }

    /// Replaces `source` by its fragments.
    ///
    /// Every non-empty fragment is spawned by the host, and pushed away from the source's
    /// position with an impulse applied at the center of its bounds. The source is then
    /// destroyed.
    ///
    /// Empty fragments, left by planes that missed the piece they cut, are not spawned.
    /// Fewer than `2^cut_cascades` objects may thus be created. The returned vector only
    /// holds the spawned objects.
    ///
    /// If the source has no mesh data, or if the parameters are invalid, nothing is
    /// spawned nor destroyed.
    pub fn fracture<H: FractureHost, R: Rng + ?Sized>(
        &self,
        host: &mut H,
        source: &H::Object,
        rng: &mut R,
    ) -> Result<Vec<H::Object>, FractureError> {
        let Some(mesh) = host.mesh_data(source) else {
            log::error!("Cannot fracture an object without mesh data.");
            return Err(FractureError::MissingMesh);
        };

        let fragments = fracture_mesh(&mesh, &self.params, rng)?;
        let descriptor = host.source_descriptor(source);
        let source_position = descriptor.transform.position();
        let mut objects = Vec::with_capacity(fragments.len());

        for (i, fragment) in fragments.into_iter().enumerate() {
            if fragment.is_empty() {
                log::debug!("Dropping empty fragment {} of {}.", i, descriptor.name);
                continue;
            }

            let fragment = fragment.materialize(&descriptor, &self.params);
            let impulse = fragment.explode_impulse(&source_position);
            let point = fragment.world_bounds_center();
            let object = host.spawn_fragment(fragment);
            host.apply_impulse_at_point(&object, impulse, point);
            objects.push(object);
        }

        host.destroy(source);
        Ok(objects)
    }
}
