use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Mesh;
use crate::transformation::fracture::{FractureParameters, Fragment};

/// A rigid transformation followed by a non-uniform scaling.
///
/// Points are first scaled in local space, then moved by the isometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// The rotation and translation part of this transform.
    pub isometry: Isometry<Real>,
    /// The scaling factor along each local axis.
    pub scale: Vector<Real>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Creates a new transform.
    pub fn new(isometry: Isometry<Real>, scale: Vector<Real>) -> Self {
        Self { isometry, scale }
    }

    /// The identity transform.
    pub fn identity() -> Self {
        Self::new(Isometry::identity(), Vector::repeat(1.0))
    }

    /// The world-space position of this transform's origin.
    pub fn position(&self) -> Point<Real> {
        self.isometry.translation.vector.into()
    }

    /// Transforms a local-space point into world-space.
    pub fn transform_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.isometry * Point::from(pt.coords.component_mul(&self.scale))
    }

    /// The factor by which this transform multiplies volumes.
    pub fn volume_scale(&self) -> Real {
        (self.scale.x * self.scale.y * self.scale.z).abs()
    }
}

/// Properties of a fractured object inherited by all its fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDescriptor<M> {
    /// The name of the fractured object.
    pub name: String,
    /// The world transform of the fractured object.
    pub transform: Transform,
    /// The materials of the fractured object, one per submesh.
    pub materials: Vec<M>,
}

/// A fragment ready to be turned into an independent object by a
/// [`FractureHost`](crate::transformation::fracture::FractureHost).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedFragment<M> {
    /// The name of the new object.
    pub name: String,
    /// The mesh of the fragment, expressed in the source object's local space.
    pub mesh: Mesh,
    /// The local-space bounds of `mesh`.
    pub bounds: Aabb,
    /// The world transform of the new object (same as the source object).
    pub transform: Transform,
    /// The materials of the new object, one per submesh.
    pub materials: Vec<M>,
    /// The local-space volume of `mesh`.
    pub volume: Real,
    /// The local-space center of mass of `mesh`.
    pub center_of_mass: Point<Real>,
    /// The mass of the new object, from its world-space volume and the fracture density.
    pub mass: Real,
    /// Is this fragment big enough to be fractured again?
    pub further_fracturable: bool,
    /// The number of cascades to use when fracturing this fragment again.
    pub cut_cascades: u32,
    /// The explode force to use when fracturing this fragment again.
    pub explode_force: Real,
}

impl<M> MaterializedFragment<M> {
    /// The world-space center of this fragment's bounds.
    pub fn world_bounds_center(&self) -> Point<Real> {
        self.transform.transform_point(&self.bounds.center())
    }

    /// The impulse pushing this fragment away from the position of the object it
    /// originates from.
    ///
    /// Its magnitude is proportional to the distance between the two points.
    pub fn explode_impulse(&self, source_position: &Point<Real>) -> Vector<Real> {
        (self.world_bounds_center() - source_position) * self.explode_force
    }
}

impl Fragment {
    /// Converts this fragment into a standalone object description.
    ///
    /// The bounds are recomputed from the mesh data, and the transform and materials
    /// of the source object are inherited.
    pub fn materialize<M: Clone>(
        self,
        source: &SourceDescriptor<M>,
        params: &FractureParameters,
    ) -> MaterializedFragment<M> {
        let mesh = self.into_mesh();
        let bounds = mesh.local_aabb();
        let (signed_volume, center_of_mass) = mesh.signed_volume_and_center_of_mass();
        let volume = signed_volume.abs();
        let mass = volume * source.transform.volume_scale() * params.density;

        MaterializedFragment {
            name: format!("{} (fragment)", source.name),
            mesh,
            bounds,
            transform: source.transform,
            materials: source.materials.clone(),
            volume,
            center_of_mass,
            mass,
            further_fracturable: volume >= params.refracture_volume_threshold,
            cut_cascades: params.cut_cascades,
            explode_force: params.explode_force,
        }
    }
}
