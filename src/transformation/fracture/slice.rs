use crate::math::{Point, Real, TexCoords, Vector};
use crate::query::{line_toi_with_plane, Ray};
use crate::shape::{triangle_normal_direction, Plane};
use crate::transformation::fracture::{CapBuilder, Fragment, FragmentBuilder};

/// Statistics about a single slicing operation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SliceStats {
    /// Source triangles entirely on the kept side, copied unchanged.
    pub copied_triangles: usize,
    /// Source triangles entirely on the discarded side.
    pub discarded_triangles: usize,
    /// Source triangles straddling the plane.
    pub clipped_triangles: usize,
    /// Triangles emitted for the kept part of the clipped triangles.
    pub emitted_clipped_triangles: usize,
    /// Triangles emitted to close the cross-section.
    pub cap_triangles: usize,
    /// Straddling triangles skipped because they were degenerate.
    pub skipped_degenerate_triangles: usize,
    /// Source triangles skipped because they reference vertices that don't exist.
    pub skipped_invalid_triangles: usize,
}

/// A vertex created on a cut edge.
#[derive(Copy, Clone, Debug)]
struct CutVertex {
    point: Point<Real>,
    normal: Vector<Real>,
    uv: TexCoords<Real>,
}

/// Intersects the edge `vertices[from] -> vertices[to]` with the plane and interpolates
/// the vertex attributes at the intersection.
fn cut_edge(
    plane: &Plane,
    vertices: &[Point<Real>; 3],
    normals: &[Vector<Real>; 3],
    uvs: &[TexCoords<Real>; 3],
    from: usize,
    to: usize,
) -> Option<CutVertex> {
    let ray = Ray::from_segment(&vertices[from], &vertices[to]);
    // The ray direction is the edge itself, so the toi is the edge parameter.
    let t = line_toi_with_plane(plane, &ray.origin, &ray.dir)?.clamp(0.0, 1.0);

    Some(CutVertex {
        point: ray.point_at(t),
        normal: normals[from].lerp(&normals[to], t),
        uv: uvs[from].lerp(&uvs[to], t),
    })
}

fn is_degenerate(vertices: &[Point<Real>; 3]) -> bool {
    let [a, b, c] = vertices;
    triangle_normal_direction(a, b, c).is_none()
}

#[allow(clippy::type_complexity)]
fn triangle_attributes(
    fragment: &Fragment,
    idx: &[u32; 3],
) -> Option<([Point<Real>; 3], [Vector<Real>; 3], [TexCoords<Real>; 3])> {
    let mut vertices = [Point::origin(); 3];
    let mut normals = [Vector::zeros(); 3];
    let mut uvs = [TexCoords::origin(); 3];

    for (k, i) in idx.iter().enumerate() {
        let i = *i as usize;
        vertices[k] = *fragment.vertices().get(i)?;
        normals[k] = *fragment.normals().get(i)?;
        uvs[k] = *fragment.uvs().get(i)?;
    }

    Some((vertices, normals, uvs))
}

/// Cuts a fragment by a plane and keeps only one side of it.
///
/// If `keep_positive` is `true`, the part lying strictly on the positive side of the plane
/// (pointed to by its normal) is kept. Otherwise, the part on the negative side (including
/// points exactly on the plane) is kept. The cut is closed by a cap whose normal points
/// out of the kept part.
///
/// The result has as many submeshes as `fragment`, and may be empty.
pub fn slice(fragment: &Fragment, plane: &Plane, keep_positive: bool) -> Fragment {
    slice_with_stats(fragment, plane, keep_positive).0
}

/// Cuts a fragment by a plane, returning both sides.
///
/// The part on the positive side of the plane is returned first.
pub fn slice_pair(fragment: &Fragment, plane: &Plane) -> (Fragment, Fragment) {
    (slice(fragment, plane, true), slice(fragment, plane, false))
}

/// Cuts a fragment by a plane and keeps only one side of it, see [`slice`].
///
/// Also returns statistics on how each source triangle was handled.
pub fn slice_with_stats(
    fragment: &Fragment,
    plane: &Plane,
    keep_positive: bool,
) -> (Fragment, SliceStats) {
    let cap_normal = if keep_positive {
        -plane.normal
    } else {
        plane.normal
    };

    let mut builder = FragmentBuilder::with_submeshes(fragment.submeshes().len());
    let mut stats = SliceStats::default();

    for (submesh, triangles) in fragment.submeshes().iter().enumerate() {
        let mut cap = CapBuilder::new(submesh, cap_normal);

        for idx in triangles {
            let Some((vertices, normals, uvs)) = triangle_attributes(fragment, idx) else {
                stats.skipped_invalid_triangles += 1;
                continue;
            };
            let kept = vertices.map(|pt| plane.is_on_positive_side(&pt) == keep_positive);

            match kept.iter().filter(|k| **k).count() {
                0 => {
                    stats.discarded_triangles += 1;
                    continue;
                }
                3 => {
                    builder.add_triangle(submesh, vertices, normals, uvs);
                    stats.copied_triangles += 1;
                    continue;
                }
                _ => {}
            }

            stats.clipped_triangles += 1;

            if is_degenerate(&vertices) {
                stats.skipped_degenerate_triangles += 1;
                continue;
            }

            // The vertex alone on its side of the plane.
            let single = if kept[1] == kept[2] {
                0
            } else if kept[0] == kept[2] {
                1
            } else {
                2
            };
            let next1 = (single + 1) % 3;
            let next2 = (single + 2) % 3;

            let cut1 = cut_edge(plane, &vertices, &normals, &uvs, single, next1);
            let cut2 = cut_edge(plane, &vertices, &normals, &uvs, single, next2);
            let (Some(i1), Some(i2)) = (cut1, cut2) else {
                stats.skipped_degenerate_triangles += 1;
                continue;
            };

            if kept[single] {
                builder.add_triangle(
                    submesh,
                    [vertices[single], i1.point, i2.point],
                    [normals[single], i1.normal, i2.normal],
                    [uvs[single], i1.uv, i2.uv],
                );
                stats.emitted_clipped_triangles += 1;
            } else {
                builder.add_triangle(
                    submesh,
                    [i1.point, vertices[next1], vertices[next2]],
                    [i1.normal, normals[next1], normals[next2]],
                    [i1.uv, uvs[next1], uvs[next2]],
                );
                builder.add_triangle(
                    submesh,
                    [i1.point, vertices[next2], i2.point],
                    [i1.normal, normals[next2], i2.normal],
                    [i1.uv, uvs[next2], i2.uv],
                );
                stats.emitted_clipped_triangles += 2;
            }

            if cap.add_edge(&mut builder, (i1.point, i1.uv), (i2.point, i2.uv)) {
                stats.cap_triangles += 1;
            }
        }
    }

    if stats.skipped_invalid_triangles > 0 {
        log::warn!(
            "Skipped {} triangle(s) with out-of-bounds vertex indices while slicing.",
            stats.skipped_invalid_triangles
        );
    }

    if stats.skipped_degenerate_triangles > 0 {
        log::warn!(
            "Skipped {} degenerate triangle(s) straddling the cutting plane.",
            stats.skipped_degenerate_triangles
        );
    }

    (builder.finalize(), stats)
}
