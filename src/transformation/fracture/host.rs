use crate::math::{Point, Real, Vector};
use crate::shape::Mesh;
use crate::transformation::fracture::{MaterializedFragment, SourceDescriptor};

/// The environment owning the objects being fractured.
///
/// This is how the fracturing process reads the source object and creates the
/// fragment objects, without knowing anything about how they are rendered or simulated.
pub trait FractureHost {
    /// A handle to an object of the host.
    type Object;
    /// The rendering material of a submesh.
    type Material: Clone;

    /// The local-space mesh of `object`, if it has one.
    fn mesh_data(&self, object: &Self::Object) -> Option<Mesh>;

    /// The name, world transform and materials of `object`.
    fn source_descriptor(&self, object: &Self::Object) -> SourceDescriptor<Self::Material>;

    /// Creates a new object for a fragment.
    ///
    /// This is where the host attaches a renderable mesh, a convex collider and a rigid
    /// body (with `fragment.mass`) to the fragment.
    fn spawn_fragment(&mut self, fragment: MaterializedFragment<Self::Material>) -> Self::Object;

    /// Applies a world-space impulse at a world-space point of `object`.
    fn apply_impulse_at_point(
        &mut self,
        object: &Self::Object,
        impulse: Vector<Real>,
        point: Point<Real>,
    );

    /// Removes `object` from the host.
    fn destroy(&mut self, object: &Self::Object);
}
