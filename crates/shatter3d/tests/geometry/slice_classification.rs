use rand::SeedableRng;
use rand_isaac::IsaacRng;
use shatter3d::na::{Point3, Vector3};
use shatter3d::shape::{Mesh, Plane};
use shatter3d::transformation::fracture::{
    random_cut_plane, slice, slice_pair, slice_with_stats, Fragment, SliceStats,
};

fn build_diamond() -> Mesh {
    // Two tetrahedrons sharing a face, with triangles split across two submeshes.
    let vertices = vec![
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(-2.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, 2.0),
        Point3::new(2.0, -1.0, 0.0),
        Point3::new(0.0, 0.0, -2.0),
    ];
    let normals = vertices.iter().map(|p| p.coords.normalize()).collect();
    let uvs = vertices.iter().map(|p| p.xy()).collect();

    let top = vec![[0u32, 1, 2], [0, 2, 3], [1, 3, 2]];
    let bottom = vec![[0u32, 4, 1], [0, 3, 4], [1, 4, 3]];

    Mesh::new(vertices, normals, uvs, vec![top, bottom]).unwrap()
}

#[test]
fn diamond_is_wound_outward() {
    let mesh = build_diamond();
    let (signed_volume, _) = mesh.signed_volume_and_center_of_mass();
    assert!(signed_volume > 0.0);
    assert_relative_eq!(signed_volume, 8.0, epsilon = 1.0e-5);
}

#[test]
fn straddling_triangles_are_split_between_both_sides() {
    let fragment = Fragment::from_mesh(&build_diamond());
    let mut rng = IsaacRng::seed_from_u64(0);

    for _ in 0..50 {
        let plane = random_cut_plane(fragment.bounds(), 0.5, &mut rng).unwrap();
        let (positive, pos_stats) = slice_with_stats(&fragment, &plane, true);
        let (negative, neg_stats) = slice_with_stats(&fragment, &plane, false);

        // What is copied on one side is discarded on the other.
        assert_eq!(pos_stats.copied_triangles, neg_stats.discarded_triangles);
        assert_eq!(pos_stats.discarded_triangles, neg_stats.copied_triangles);
        assert_eq!(pos_stats.clipped_triangles, neg_stats.clipped_triangles);
        assert_eq!(
            pos_stats.copied_triangles + pos_stats.discarded_triangles + pos_stats.clipped_triangles,
            6
        );

        // A clipped triangle yields one triangle on one side, and two on the other.
        assert_eq!(pos_stats.skipped_degenerate_triangles, 0);
        assert_eq!(
            pos_stats.emitted_clipped_triangles + neg_stats.emitted_clipped_triangles,
            3 * pos_stats.clipped_triangles
        );

        assert_eq!(positive.submeshes().len(), 2);
        assert_eq!(negative.submeshes().len(), 2);
        assert_eq!(positive.vertices().len(), 3 * positive.num_triangles());
        assert_eq!(positive.normals().len(), positive.vertices().len());
        assert_eq!(negative.uvs().len(), negative.vertices().len());

        for pt in positive.vertices() {
            assert!(plane.signed_distance(pt) > -1.0e-5);
        }
        for pt in negative.vertices() {
            assert!(plane.signed_distance(pt) < 1.0e-5);
        }
    }
}

#[test]
fn slicing_is_deterministic() {
    let fragment = Fragment::from_mesh(&build_diamond());
    let plane = Plane::new(Vector3::y_axis(), 0.25);

    let first = slice(&fragment, &plane, true);
    let second = slice(&fragment, &plane, true);
    assert_eq!(first, second);
    assert_eq!(first.vertices(), second.vertices());
    assert_eq!(first.submeshes(), second.submeshes());

    let (positive, _) = slice_pair(&fragment, &plane);
    assert_eq!(positive, first);
}

/// A tetrahedron with outward-facing triangles.
fn build_tetrahedron(vertices: [Point3<f32>; 4]) -> Mesh {
    let center = Point3::from(vertices.iter().map(|p| p.coords).sum::<Vector3<f32>>() / 4.0);
    let faces = [[0u32, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]].map(|[a, b, c]| {
        let [pa, pb, pc] = [a, b, c].map(|i| vertices[i as usize]);
        if (pb - pa).cross(&(pc - pa)).dot(&(pa - center)) > 0.0 {
            [a, b, c]
        } else {
            [a, c, b]
        }
    });

    Mesh::with_single_submesh(
        vertices.to_vec(),
        vertices.iter().map(|p| (p - center).normalize()).collect(),
        vertices.iter().map(|p| p.xy()).collect(),
        faces.to_vec(),
    )
    .unwrap()
}

#[test]
fn vertex_barely_off_the_plane_keeps_the_solid_closed() {
    // The first vertex is only 1.0e-8 away from `x = 0`, and two others lie on it.
    let mesh = build_tetrahedron([
        Point3::new(1.0e-8, 0.5, 1.0),
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(-1.0, 0.5, 0.5),
    ]);
    let fragment = Fragment::from_mesh(&mesh);
    let plane = Plane::new(Vector3::x_axis(), 0.0);

    let (positive, pos_stats) = slice_with_stats(&fragment, &plane, true);
    let (negative, neg_stats) = slice_with_stats(&fragment, &plane, false);

    assert_eq!(
        neg_stats,
        SliceStats {
            copied_triangles: 1,
            clipped_triangles: 3,
            emitted_clipped_triangles: 6,
            cap_triangles: neg_stats.cap_triangles,
            ..SliceStats::default()
        }
    );
    assert!(neg_stats.cap_triangles >= 1);
    assert_eq!(pos_stats.skipped_degenerate_triangles, 0);
    assert_eq!(pos_stats.emitted_clipped_triangles, 3);

    assert_relative_eq!(negative.volume(), fragment.volume(), epsilon = 1.0e-5);
    assert_relative_eq!(positive.volume(), 0.0, epsilon = 1.0e-5);
}

