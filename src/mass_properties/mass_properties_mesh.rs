use crate::math::{Point, Real};
use crate::shape::Mesh;
use num::Zero;

/// The signed volume of the tetrahedron formed by the origin and the triangle `(p1, p2, p3)`.
///
/// Positive if the origin lies on the negative side of the triangle, i.e., if the
/// triangle is seen counterclockwise from outside of the tetrahedron.
#[inline]
pub fn origin_tetrahedron_signed_volume(
    p1: &Point<Real>,
    p2: &Point<Real>,
    p3: &Point<Real>,
) -> Real {
    p1.coords.dot(&p2.coords.cross(&p3.coords)) / na::convert::<f64, Real>(6.0)
}

fn triangle_vertices<'a>(
    vertices: &'a [Point<Real>],
    t: &[u32; 3],
) -> Option<[&'a Point<Real>; 3]> {
    Some([
        vertices.get(t[0] as usize)?,
        vertices.get(t[1] as usize)?,
        vertices.get(t[2] as usize)?,
    ])
}

/// Computes the signed volume and center-of-mass of a closed triangle mesh.
///
/// The mesh is decomposed into the tetrahedra formed by each triangle and the origin.
/// The volume is positive if the triangles are wound counterclockwise when seen from
/// outside of the mesh. The result is only an approximation if the mesh isn't closed.
///
/// Triangles referencing vertices that don't exist are ignored. If the volume is zero,
/// the origin is returned as the center-of-mass.
pub fn trimesh_signed_volume_and_center_of_mass<'a>(
    vertices: &[Point<Real>],
    indices: impl IntoIterator<Item = &'a [u32; 3]>,
) -> (Real, Point<Real>) {
    let quarter: Real = na::convert::<f64, Real>(0.25);
    let mut res = Point::origin();
    let mut vol: Real = 0.0;
    let mut num_ignored = 0usize;

    for t in indices {
        let Some([p1, p2, p3]) = triangle_vertices(vertices, t) else {
            num_ignored += 1;
            continue;
        };

        let volume = origin_tetrahedron_signed_volume(p1, p2, p3);
        // The fourth vertex is the origin.
        let center = (p1.coords + p2.coords + p3.coords) * quarter;

        res += center * volume;
        vol += volume;
    }

    if num_ignored != 0 {
        log::warn!(
            "Ignored {} triangle(s) with out-of-bounds vertex indices while computing a mesh volume.",
            num_ignored
        );
    }

    if vol.is_zero() {
        (vol, Point::origin())
    } else {
        (vol, res / vol)
    }
}

/// Computes the signed volume of a closed triangle mesh.
///
/// See [`trimesh_signed_volume_and_center_of_mass`] for details.
pub fn trimesh_signed_volume<'a>(
    vertices: &[Point<Real>],
    indices: impl IntoIterator<Item = &'a [u32; 3]>,
) -> Real {
    trimesh_signed_volume_and_center_of_mass(vertices, indices).0
}

/// Computes the (non-negative) volume of a closed triangle mesh.
///
/// This is the absolute value of [`trimesh_signed_volume`], so it doesn't depend on
/// whether the mesh triangles are wound clockwise or counterclockwise.
pub fn trimesh_volume<'a>(
    vertices: &[Point<Real>],
    indices: impl IntoIterator<Item = &'a [u32; 3]>,
) -> Real {
    trimesh_signed_volume(vertices, indices).abs()
}

/// Computes the volume of a mesh that might not be available.
///
/// Logs an error and returns zero if `mesh` is `None`.
pub fn volume_or_zero(mesh: Option<&Mesh>) -> Real {
    match mesh {
        Some(mesh) => mesh.volume(),
        None => {
            log::error!("Cannot compute the volume of a missing mesh.");
            0.0
        }
    }
}

impl Mesh {
    /// The volume enclosed by this mesh, accounting for all its submeshes.
    pub fn volume(&self) -> Real {
        trimesh_volume(self.vertices(), self.triangle_indices())
    }

    /// The signed volume and center-of-mass of this mesh, accounting for all its submeshes.
    pub fn signed_volume_and_center_of_mass(&self) -> (Real, Point<Real>) {
        trimesh_signed_volume_and_center_of_mass(self.vertices(), self.triangle_indices())
    }
}
