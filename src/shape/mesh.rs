use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, TexCoords, Vector};

/// Indicates an inconsistency while building a mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// The vertex attribute buffers don't all have the same length.
    #[error("mismatched vertex attributes: {vertices} positions, {normals} normals, {uvs} texture coordinates")]
    AttributeLengthMismatch {
        /// The number of vertex positions.
        vertices: usize,
        /// The number of vertex normals.
        normals: usize,
        /// The number of texture coordinates.
        uvs: usize,
    },
    /// A triangle refers to a vertex that doesn't exist.
    #[error("submesh {submesh} references vertex {index}, but the mesh only has {num_vertices} vertices")]
    IndexOutOfBounds {
        /// The submesh containing the faulty triangle.
        submesh: usize,
        /// The out-of-bounds vertex index.
        index: u32,
        /// The number of vertices of the mesh.
        num_vertices: usize,
    },
    /// A mesh must contain at least one submesh (which may be empty).
    #[error("a mesh must contain at least one submesh")]
    NoSubmesh,
}

/// A triangle mesh split into submeshes, with per-vertex normals and texture coordinates.
///
/// Every vertex attribute buffer has the same length, and each submesh is a list of
/// triangles indexing these buffers. Submeshes are typically rendered with different
/// materials: the `i`-th submesh uses the `i`-th material of the object it belongs to.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Mesh {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    uvs: Vec<TexCoords<Real>>,
    submeshes: Vec<Vec<[u32; 3]>>,
}

impl Mesh {
    /// Creates a new mesh, checking that its buffers are consistent.
    pub fn new(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        uvs: Vec<TexCoords<Real>>,
        submeshes: Vec<Vec<[u32; 3]>>,
    ) -> Result<Self, MeshBuilderError> {
        if normals.len() != vertices.len() || uvs.len() != vertices.len() {
            return Err(MeshBuilderError::AttributeLengthMismatch {
                vertices: vertices.len(),
                normals: normals.len(),
                uvs: uvs.len(),
            });
        }

        if submeshes.is_empty() {
            return Err(MeshBuilderError::NoSubmesh);
        }

        for (submesh, triangles) in submeshes.iter().enumerate() {
            if let Some(index) = triangles
                .iter()
                .flatten()
                .find(|idx| **idx as usize >= vertices.len())
            {
                return Err(MeshBuilderError::IndexOutOfBounds {
                    submesh,
                    index: *index,
                    num_vertices: vertices.len(),
                });
            }
        }

        Ok(Self::new_unchecked(vertices, normals, uvs, submeshes))
    }

    /// Creates a new mesh with a single submesh.
    pub fn with_single_submesh(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        uvs: Vec<TexCoords<Real>>,
        triangles: Vec<[u32; 3]>,
    ) -> Result<Self, MeshBuilderError> {
        Self::new(vertices, normals, uvs, vec![triangles])
    }

    pub(crate) fn new_unchecked(
        vertices: Vec<Point<Real>>,
        normals: Vec<Vector<Real>>,
        uvs: Vec<TexCoords<Real>>,
        submeshes: Vec<Vec<[u32; 3]>>,
    ) -> Self {
        Self {
            vertices,
            normals,
            uvs,
            submeshes,
        }
    }

    /// The vertex positions of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The vertex normals of this mesh.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        &self.normals
    }

    /// The texture coordinates of this mesh.
    #[inline]
    pub fn uvs(&self) -> &[TexCoords<Real>] {
        &self.uvs
    }

    /// The triangles of each submesh of this mesh.
    #[inline]
    pub fn submeshes(&self) -> &[Vec<[u32; 3]>] {
        &self.submeshes
    }

    /// The number of submeshes.
    #[inline]
    pub fn num_submeshes(&self) -> usize {
        self.submeshes.len()
    }

    /// The total number of triangles, across all submeshes.
    pub fn num_triangles(&self) -> usize {
        self.submeshes.iter().map(|s| s.len()).sum()
    }

    /// Iterates through the triangles of all submeshes, flattened in submesh order.
    pub fn triangle_indices(&self) -> impl Iterator<Item = &[u32; 3]> + '_ {
        self.submeshes.iter().flatten()
    }

    /// Computes the local-space AABB of this mesh's vertices.
    ///
    /// Returns an invalid AABB if the mesh has no vertex.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }
}
