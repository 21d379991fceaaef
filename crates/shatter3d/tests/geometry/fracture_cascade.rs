use rand::SeedableRng;
use rand_isaac::IsaacRng;
use shatter3d::bounding_volume::{Aabb, BoundingVolume};
use shatter3d::na::Point3;
use shatter3d::transformation::fracture::{fracture_mesh, FractureParameters};

#[test]
fn cascades_double_the_fragment_count() {
    let cube = Aabb::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0)).to_mesh();
    let source_volume = cube.volume();
    assert_relative_eq!(source_volume, 8.0, epsilon = 1.0e-5);

    for cut_cascades in 0..=4 {
        let params = FractureParameters {
            cut_cascades,
            ..FractureParameters::default()
        };
        let mut rng = IsaacRng::seed_from_u64(cut_cascades as u64);
        let fragments = fracture_mesh(&cube, &params, &mut rng).unwrap();

        assert_eq!(fragments.len(), 1 << cut_cascades);

        // Cutting a convex solid only produces convex pieces, which are all capped
        // properly, so no volume is lost along the way.
        let total: f32 = fragments.iter().map(|f| f.volume()).sum();
        assert_relative_eq!(total, source_volume, epsilon = 1.0e-2);

        for fragment in &fragments {
            assert_eq!(fragment.submeshes().len(), 1);
            if !fragment.is_empty() {
                assert!(cube.local_aabb().loosened(1.0e-4).contains(fragment.bounds()));
            }
        }
    }
}

#[test]
fn same_seed_same_fragments() {
    let cube = Aabb::new(Point3::origin(), Point3::new(2.0, 1.0, 0.5)).to_mesh();
    let params = FractureParameters {
        cut_cascades: 3,
        ..FractureParameters::default()
    };

    let first = fracture_mesh(&cube, &params, &mut IsaacRng::seed_from_u64(42)).unwrap();
    let second = fracture_mesh(&cube, &params, &mut IsaacRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_fragments_keep_splitting() {
    let cube = Aabb::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0)).to_mesh();
    // A huge margin makes most planes miss their fragment.
    let params = FractureParameters {
        cut_cascades: 5,
        bounds_margin: 100.0,
        ..FractureParameters::default()
    };
    let mut rng = IsaacRng::seed_from_u64(7);
    let fragments = fracture_mesh(&cube, &params, &mut rng).unwrap();

    assert_eq!(fragments.len(), 32);
    assert!(fragments.iter().any(|f| f.is_empty()));
    let total: f32 = fragments.iter().map(|f| f.volume()).sum();
    assert_relative_eq!(total, 1.0, epsilon = 1.0e-2);
}
