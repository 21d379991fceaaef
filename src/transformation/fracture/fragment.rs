use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, TexCoords, Vector};
use crate::shape::Mesh;

/// A fragment mesh under construction.
///
/// Triangles are appended one by one without any vertex sharing: each call to
/// [`FragmentBuilder::add_triangle`] pushes three fresh vertices. The bounding box of
/// all the vertices added so far is maintained incrementally.
#[derive(Clone, Debug)]
pub struct FragmentBuilder {
    vertices: Vec<Point<Real>>,
    normals: Vec<Vector<Real>>,
    uvs: Vec<TexCoords<Real>>,
    submeshes: Vec<Vec<[u32; 3]>>,
    bounds: Aabb,
}

impl Default for FragmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentBuilder {
    /// Creates an empty fragment builder without any submesh.
    pub fn new() -> Self {
        Self::with_submeshes(0)
    }

    /// Creates an empty fragment builder with `num_submeshes` empty submeshes.
    ///
    /// Pre-allocating the submeshes of the source mesh ensures the finalized fragment
    /// keeps one (possibly empty) triangle list per source material.
    pub fn with_submeshes(num_submeshes: usize) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            submeshes: vec![Vec::new(); num_submeshes],
            bounds: Aabb::new_invalid(),
        }
    }

    /// Appends a triangle to the `submesh`-th submesh.
    ///
    /// The submesh is created, together with any missing submesh before it, if it
    /// doesn't exist yet.
    pub fn add_triangle(
        &mut self,
        submesh: usize,
        vertices: [Point<Real>; 3],
        normals: [Vector<Real>; 3],
        uvs: [TexCoords<Real>; 3],
    ) {
        if self.submeshes.len() <= submesh {
            self.submeshes.resize_with(submesh + 1, Vec::new);
        }

        let base = self.vertices.len() as u32;
        self.submeshes[submesh].push([base, base + 1, base + 2]);

        for pt in vertices {
            self.bounds.take_point(pt);
        }

        self.vertices.extend(vertices);
        self.normals.extend(normals);
        self.uvs.extend(uvs);
    }

    /// The bounding box of all the vertices added so far.
    ///
    /// Invalid if no triangle was added yet.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The number of triangles added so far.
    pub fn num_triangles(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Has no triangle been added yet?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Freezes this builder into an immutable fragment.
    pub fn finalize(self) -> Fragment {
        Fragment {
            mesh: Mesh::new_unchecked(self.vertices, self.normals, self.uvs, self.submeshes),
            bounds: self.bounds,
        }
    }
}

/// An immutable piece of mesh produced by the fracturing process.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Fragment {
    mesh: Mesh,
    bounds: Aabb,
}

impl Fragment {
    /// Wraps a whole mesh into a single fragment, e.g., to start a fracture cascade.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            mesh: mesh.clone(),
            bounds: mesh.local_aabb(),
        }
    }

    /// An empty fragment with `num_submeshes` empty submeshes.
    pub fn empty(num_submeshes: usize) -> Self {
        FragmentBuilder::with_submeshes(num_submeshes).finalize()
    }

    /// The mesh of this fragment.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// A copy of the mesh of this fragment.
    pub fn to_mesh(&self) -> Mesh {
        self.mesh.clone()
    }

    /// Converts this fragment into its mesh.
    #[inline]
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// The bounding box of this fragment's vertices.
    ///
    /// Invalid if the fragment is empty.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The vertex positions of this fragment.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        self.mesh.vertices()
    }

    /// The vertex normals of this fragment.
    #[inline]
    pub fn normals(&self) -> &[Vector<Real>] {
        self.mesh.normals()
    }

    /// The texture coordinates of this fragment.
    #[inline]
    pub fn uvs(&self) -> &[TexCoords<Real>] {
        self.mesh.uvs()
    }

    /// The triangles of each submesh of this fragment.
    #[inline]
    pub fn submeshes(&self) -> &[Vec<[u32; 3]>] {
        self.mesh.submeshes()
    }

    /// The number of triangles of this fragment, across all submeshes.
    pub fn num_triangles(&self) -> usize {
        self.mesh.num_triangles()
    }

    /// Does this fragment have no triangle at all?
    pub fn is_empty(&self) -> bool {
        self.num_triangles() == 0
    }

    /// The volume enclosed by this fragment.
    pub fn volume(&self) -> Real {
        self.mesh.volume()
    }

    /// Iterates through the submesh index and vertex positions of every triangle.
    ///
    /// Triangles referencing vertices that don't exist are skipped.
    pub fn triangles(&self) -> impl Iterator<Item = (usize, [Point<Real>; 3])> + '_ {
        let vertices = self.vertices();
        self.submeshes()
            .iter()
            .enumerate()
            .flat_map(move |(submesh, triangles)| {
                triangles.iter().filter_map(move |t| {
                    Some((
                        submesh,
                        [
                            *vertices.get(t[0] as usize)?,
                            *vertices.get(t[1] as usize)?,
                            *vertices.get(t[2] as usize)?,
                        ],
                    ))
                })
            })
    }
}
