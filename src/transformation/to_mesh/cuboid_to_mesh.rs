use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, TexCoords, Vector};
use crate::shape::Mesh;

impl Aabb {
    /// Discretize the boundary of this AABB as a triangle-mesh with shared vertices.
    ///
    /// The result has 8 vertices (see [`Aabb::vertices`]) and 12 triangles wound
    /// counterclockwise when seen from outside of the box.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let mut faces = Vec::with_capacity(12);

        for (a, b, c, d) in Self::FACES_VERTEX_IDS {
            let [a, b, c, d] = [a as u32, b as u32, c as u32, d as u32];
            faces.push([a, b, c]);
            faces.push([a, c, d]);
        }

        (self.vertices().to_vec(), faces)
    }

    /// Discretize the boundary of this AABB as a renderable mesh with a single submesh.
    ///
    /// Each face gets its own four vertices so that it can have flat normals and its
    /// own texture coordinates ranging from `(0, 0)` to `(1, 1)`. The result has
    /// 24 vertices and 12 triangles wound counterclockwise when seen from outside.
    pub fn to_mesh(&self) -> Mesh {
        let corners = self.vertices();
        let face_uvs = [
            TexCoords::new(0.0, 0.0),
            TexCoords::new(1.0, 0.0),
            TexCoords::new(1.0, 1.0),
            TexCoords::new(0.0, 1.0),
        ];
        let face_normals = [
            Vector::x(),
            -Vector::x(),
            Vector::y(),
            -Vector::y(),
            Vector::z(),
            -Vector::z(),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut normals = Vec::with_capacity(24);
        let mut uvs = Vec::with_capacity(24);
        let mut triangles = Vec::with_capacity(12);

        for ((a, b, c, d), normal) in Self::FACES_VERTEX_IDS.into_iter().zip(face_normals) {
            let base = vertices.len() as u32;
            vertices.extend([corners[a], corners[b], corners[c], corners[d]]);
            normals.extend([normal; 4]);
            uvs.extend(face_uvs);
            triangles.push([base, base + 1, base + 2]);
            triangles.push([base, base + 2, base + 3]);
        }

        Mesh::new_unchecked(vertices, normals, uvs, vec![triangles])
    }
}
