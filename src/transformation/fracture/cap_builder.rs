use crate::math::{Point, Real, TexCoords, UnitVector, Vector};
use crate::shape::Plane;
use crate::transformation::fracture::FragmentBuilder;

/// Closes the cross-section of a slice with a triangle fan.
///
/// A cap builder is local to one submesh of one slicing operation. The first cut edge
/// it receives only provides the fan's anchor vertex; each subsequent edge `(a, b)`
/// produces the triangle `(anchor, a, b)`, wound so that its normal points along the
/// cap normal.
///
/// The fan is only correct if the cut edges of the submesh form a single
/// star-shaped loop around the anchor (which is always the case for convex sections).
#[derive(Clone, Debug)]
pub struct CapBuilder {
    submesh: usize,
    normal: UnitVector<Real>,
    anchor: Option<(Point<Real>, TexCoords<Real>)>,
    num_triangles: usize,
    num_collinear: usize,
}

impl CapBuilder {
    /// Initializes a cap for the given submesh, facing toward `normal`.
    pub fn new(submesh: usize, normal: UnitVector<Real>) -> Self {
        Self {
            submesh,
            normal,
            anchor: None,
            num_triangles: 0,
            num_collinear: 0,
        }
    }

    /// The anchor vertex shared by all the triangles of the fan, if any edge was added yet.
    pub fn anchor(&self) -> Option<&Point<Real>> {
        self.anchor.as_ref().map(|(pt, _)| pt)
    }

    /// The number of cap triangles emitted so far.
    pub fn num_triangles(&self) -> usize {
        self.num_triangles
    }

    /// The number of edges that did not produce any triangle because they were
    /// collinear with the anchor.
    pub fn num_collinear_edges(&self) -> usize {
        self.num_collinear
    }

    /// Registers a cut edge, and emits the corresponding cap triangle into `fragment`.
    ///
    /// Returns `true` if a triangle was emitted.
    pub fn add_edge(
        &mut self,
        fragment: &mut FragmentBuilder,
        (a, uv_a): (Point<Real>, TexCoords<Real>),
        (b, uv_b): (Point<Real>, TexCoords<Real>),
    ) -> bool {
        let Some((anchor, uv_anchor)) = self.anchor else {
            self.anchor = Some((a, uv_a));
            return false;
        };

        let Some(triangle_plane) = Plane::from_points(&anchor, &a, &b) else {
            self.num_collinear += 1;
            return false;
        };

        let normal: Vector<Real> = *self.normal;
        let (vertices, uvs) = if triangle_plane.is_on_positive_side(&(anchor + normal)) {
            ([anchor, a, b], [uv_anchor, uv_a, uv_b])
        } else {
            ([anchor, b, a], [uv_anchor, uv_b, uv_a])
        };

        fragment.add_triangle(self.submesh, vertices, [normal; 3], uvs);
        self.num_triangles += 1;
        true
    }
}
