use shatter3d::bounding_volume::Aabb;
use shatter3d::na::{Point3, Vector3};
use shatter3d::shape::Plane;
use shatter3d::transformation::fracture::{slice_pair, slice_with_stats, Fragment};

fn unit_cube() -> Fragment {
    let mesh = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).to_mesh();
    Fragment::from_mesh(&mesh)
}

#[test]
fn unit_cube_sliced_in_half() {
    let cube = unit_cube();
    let plane = Plane::new(Vector3::x_axis(), 0.5);

    for keep_positive in [true, false] {
        let (half, stats) = slice_with_stats(&cube, &plane, keep_positive);

        assert_eq!(stats.copied_triangles, 2);
        assert_eq!(stats.discarded_triangles, 2);
        assert_eq!(stats.clipped_triangles, 8);
        assert_eq!(stats.emitted_clipped_triangles, 12);
        assert_eq!(stats.skipped_degenerate_triangles, 0);
        assert_relative_eq!(half.volume(), 0.5, epsilon = 1.0e-5);

        if keep_positive {
            assert_relative_eq!(half.bounds().mins, Point3::new(0.5, 0.0, 0.0));
            assert_relative_eq!(half.bounds().maxs, Point3::new(1.0, 1.0, 1.0));
        } else {
            assert_relative_eq!(half.bounds().mins, Point3::new(0.0, 0.0, 0.0));
            assert_relative_eq!(half.bounds().maxs, Point3::new(0.5, 1.0, 1.0));
        }

        // The cap is a fan anchored on a corner of the cut square, so two of the four
        // sides only produce zero-area triangles, which are dropped.
        assert_eq!(stats.cap_triangles, 4);

        let expected_normal = if keep_positive {
            -Vector3::x()
        } else {
            Vector3::x()
        };
        let caps: Vec<_> = half
            .triangles()
            .filter(|(_, tri)| tri.iter().all(|p| plane.signed_distance(p).abs() < 1.0e-6))
            .collect();
        assert_eq!(caps.len(), stats.cap_triangles);

        let mut cap_area = 0.0;
        for (submesh, [a, b, c]) in caps {
            assert_eq!(submesh, 0);
            let n = (b - a).cross(&(c - a));
            cap_area += n.norm() / 2.0;
            assert_relative_eq!(n.normalize(), expected_normal, epsilon = 1.0e-5);
        }
        assert_relative_eq!(cap_area, 1.0, epsilon = 1.0e-5);

        // Cap vertices use the cap normal.
        let num_cap_normals = half
            .normals()
            .iter()
            .filter(|n| **n == expected_normal)
            .count();
        assert!(num_cap_normals >= 3 * stats.cap_triangles);
    }
}

#[test]
fn plane_outside_of_the_mesh() {
    let cube = unit_cube();
    let plane = Plane::new(Vector3::x_axis(), 5.0);
    let (positive, negative) = slice_pair(&cube, &plane);

    assert!(positive.is_empty());
    assert!(!positive.bounds().is_valid());
    assert_eq!(positive.submeshes().len(), 1);

    assert_eq!(
        negative.triangles().collect::<Vec<_>>(),
        cube.triangles().collect::<Vec<_>>()
    );
    assert_eq!(negative.bounds(), cube.bounds());
    assert_relative_eq!(negative.volume(), 1.0, epsilon = 1.0e-5);
}

#[test]
fn diagonal_cut_preserves_volume() {
    let cube = unit_cube();
    let plane = Plane::from_normal_and_point(
        shatter3d::na::Unit::new_normalize(Vector3::new(1.0, 2.0, 3.0)),
        &Point3::new(0.4, 0.5, 0.6),
    );

    let (positive, negative) = slice_pair(&cube, &plane);
    assert!(!positive.is_empty());
    assert!(!negative.is_empty());
    assert!(positive.volume() > 0.0);
    assert!(negative.volume() > 0.0);
    assert_relative_eq!(positive.volume() + negative.volume(), 1.0, epsilon = 1.0e-4);

    for pt in positive.vertices() {
        assert!(plane.signed_distance(pt) > -1.0e-5);
    }
    for pt in negative.vertices() {
        assert!(plane.signed_distance(pt) < 1.0e-5);
    }
}

#[test]
fn tiny_cube_is_still_capped() {
    let side = 2.0e-4;
    let mesh = Aabb::new(Point3::origin(), Point3::new(side, side, side)).to_mesh();
    let cube = Fragment::from_mesh(&mesh);
    let plane = Plane::new(Vector3::x_axis(), side / 2.0);

    for keep_positive in [true, false] {
        let (half, stats) = slice_with_stats(&cube, &plane, keep_positive);
        assert_eq!(stats.cap_triangles, 4);
        assert_eq!(stats.skipped_degenerate_triangles, 0);
        assert_relative_eq!(
            half.volume(),
            side * side * side / 2.0,
            max_relative = 1.0e-3
        );
    }

    let (positive, negative) = slice_pair(&cube, &plane);
    assert_relative_eq!(
        positive.volume() + negative.volume(),
        cube.volume(),
        max_relative = 1.0e-3
    );
}

