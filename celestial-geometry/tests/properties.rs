use celestial_geometry::ops;
use celestial_geometry::test_helpers::{assert_lonlat_close, assert_matrix_close, assert_vector_close};
use celestial_geometry::{rotate, rotation_matrix, LonLat, Matrix3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

const SEED: u64 = 0x5eed_1e55;

fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

fn random_vector(rng: &mut StdRng, scale: f64) -> Vector3 {
    Vector3::new(
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
        rng.gen_range(-scale..scale),
    )
}

fn random_unit_vector(rng: &mut StdRng) -> Vector3 {
    loop {
        let v = random_vector(rng, 1.0);
        if v.magnitude() > 0.1 {
            return v.normalize();
        }
    }
}

fn random_well_conditioned_matrix(rng: &mut StdRng) -> Matrix3 {
    loop {
        let m = Matrix3::from_rows(
            random_vector(rng, 2.0),
            random_vector(rng, 2.0),
            random_vector(rng, 2.0),
        );
        if m.determinant().abs() > 0.5 {
            return m;
        }
    }
}

fn random_orthonormal_pair(rng: &mut StdRng) -> (Vector3, Vector3) {
    let e1 = random_unit_vector(rng);
    loop {
        let c = e1.cross(&random_unit_vector(rng));
        if c.magnitude() > 0.5 {
            return (e1, c.normalize());
        }
    }
}

#[test]
fn test_lonlat_round_trip_grid() {
    let mut lat = -89.99;
    while lat < 89.999 {
        let mut lon = -179.5;
        while lon <= 180.0 {
            let ll = LonLat::new(lon, lat);
            let back = ops::xyz_to_lonlat(ops::lonlat_to_xyz(ll));
            assert_lonlat_close(back, ll, 1e-9);
            lon += 7.25;
        }
        lat += 4.99;
    }
}

#[test]
fn test_lonlat_round_trip_random() {
    let mut rng = rng();
    for _ in 0..2000 {
        let ll = LonLat::new(rng.gen_range(-179.999..=180.0), rng.gen_range(-89.998..89.998));
        let back = ll.to_xyz().to_lonlat();
        assert_lonlat_close(back, ll, 1e-9);
    }
}

#[test]
fn test_lonlat_round_trip_antimeridian() {
    let ll = LonLat::new(180.0, -12.0);
    let back = ll.to_xyz().to_lonlat();
    assert!((back.lon - 180.0).abs() < 1e-9);
    assert!((back.lat + 12.0).abs() < 1e-9);
}

#[test]
fn test_pole_collapse() {
    for lon in [-179.0, -90.0, 0.0, 45.0, 120.0, 180.0] {
        let v = ops::lonlat_to_xyz(LonLat::new(lon, 90.0));
        assert_vector_close(v, Vector3::new(0.0, 0.0, 1.0), 1e-15);

        // lossy: longitude is gone
        let back = v.to_lonlat();
        assert_eq!(back.lon, 0.0);
        assert!((back.lat - 90.0).abs() < 1e-12);
    }

    let ll = ops::xyz_to_lonlat(Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(ll.lon, 0.0);
    assert!((ll.lat - 90.0).abs() < 1e-12);
}

#[test]
fn test_concrete_lonlat_examples() {
    assert_eq!(
        ops::lonlat_to_xyz(LonLat::new(0.0, 0.0)),
        Vector3::new(1.0, 0.0, 0.0)
    );
    assert_vector_close(
        ops::lonlat_to_xyz(LonLat::new(90.0, 0.0)),
        Vector3::new(0.0, 1.0, 0.0),
        1e-15,
    );
    assert_vector_close(
        ops::lonlat_to_xyz(LonLat::new(0.0, 90.0)),
        Vector3::new(0.0, 0.0, 1.0),
        1e-15,
    );
}

#[test]
fn test_concrete_angle_example() {
    let a = ops::angle(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
    assert!((a - FRAC_PI_2).abs() < 1e-15);
}

#[test]
fn test_rotation_identity() {
    let mut rng = rng();
    for _ in 0..200 {
        let axis = random_unit_vector(&mut rng);
        let v = random_vector(&mut rng, 10.0);
        assert_vector_close(rotate(&axis, &v, 0.0), v, 1e-14);
    }
}

#[test]
fn test_rotation_composition() {
    let mut rng = rng();
    for _ in 0..200 {
        let axis = random_unit_vector(&mut rng);
        let v = random_vector(&mut rng, 5.0);
        let t1 = rng.gen_range(-PI..PI);
        let t2 = rng.gen_range(-PI..PI);

        let stepwise = rotate(&axis, &rotate(&axis, &v, t1), t2);
        let combined = rotate(&axis, &v, t1 + t2);
        assert_vector_close(stepwise, combined, 1e-13);
    }
}

#[test]
fn test_rotation_matrix_composition_matches_angle_sum() {
    let axis = Vector3::new(2.0, -1.0, 0.5).normalize();
    let a = rotation_matrix(&axis, 0.8);
    let b = rotation_matrix(&axis, -2.1);
    assert_matrix_close(a * b, rotation_matrix(&axis, 0.8 - 2.1), 1e-14);
}

#[test]
fn test_rotation_preserves_orthonormality() {
    let mut rng = rng();
    for _ in 0..200 {
        let axis = random_unit_vector(&mut rng);
        let angle = rng.gen_range(-10.0..10.0);
        let m = ops::rotation_matrix(axis, angle);

        let (e1, e2) = random_orthonormal_pair(&mut rng);

        let r1 = ops::mul_matrix_vector(m, e1);
        let r2 = ops::mul_matrix_vector(m, e2);
        assert!(r1.dot(&r2).abs() < 1e-14);
        assert!((r1.magnitude() - 1.0).abs() < 1e-14);
        assert!((r2.magnitude() - 1.0).abs() < 1e-14);
        assert!((m.determinant() - 1.0).abs() < 1e-14);
    }
}

#[test]
fn test_inverse_correctness() {
    let mut rng = rng();
    for _ in 0..500 {
        let m = random_well_conditioned_matrix(&mut rng);
        let v = random_vector(&mut rng, 3.0);
        let restored = ops::mul_matrix_vector(ops::inverse(m), ops::mul_matrix_vector(m, v));
        assert_vector_close(restored, v, 1e-9);
    }
}

#[test]
fn test_inverse_singular_policy() {
    let singular = Matrix3::from_rows(
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(4.0, 5.0, 6.0),
        Vector3::new(7.0, 8.0, 9.0),
    );
    assert_eq!(ops::determinant(singular), 0.0);
    assert!(!ops::inverse(singular).is_finite());
    assert!(singular.try_inverse().unwrap_err().is_degenerate());
}

#[test]
fn test_determinant_is_triple_product() {
    let mut rng = rng();
    for _ in 0..500 {
        let m = Matrix3::from_rows(
            random_vector(&mut rng, 2.0),
            random_vector(&mut rng, 2.0),
            random_vector(&mut rng, 2.0),
        );
        let [r0, r1, r2] = m.rows();
        let triple = ops::dot(r0, ops::cross(r1, r2));
        assert!((ops::determinant(m) - triple).abs() < 1e-12);
    }
}

#[test]
fn test_vector_algebra_laws() {
    let mut rng = rng();
    for _ in 0..500 {
        let a = random_vector(&mut rng, 100.0);
        let b = random_vector(&mut rng, 100.0);
        let c = random_vector(&mut rng, 100.0);
        let k = rng.gen_range(-5.0..5.0);

        assert_eq!(ops::add(a, b), ops::add(b, a));
        assert_vector_close(ops::add(ops::add(a, b), c), ops::add(a, ops::add(b, c)), 1e-12);
        assert_vector_close(
            ops::scale(ops::add(a, b), k),
            ops::add(ops::scale(a, k), ops::scale(b, k)),
            1e-12,
        );
        assert_eq!(ops::cross(a, b), ops::negate(ops::cross(b, a)));
        assert_eq!(ops::dot(a, b), ops::dot(b, a));
        assert_eq!(ops::distance(a, a), 0.0);
        assert!(ops::distance(a, b) >= 0.0);
        assert_eq!(ops::distance(a, b), ops::distance(b, a));
        assert!((ops::normalize(a).magnitude() - 1.0).abs() < 1e-14);
    }
}

#[test]
fn test_normalize_small_but_nonzero() {
    let v = Vector3::new(3e-11, -4e-11, 0.0);
    let n = ops::normalize(v);
    assert!((n.magnitude() - 1.0).abs() < 1e-15);
    assert_eq!(v.try_normalize().unwrap(), n);
}

#[test]
fn test_normalize_zero_policy() {
    let n = ops::normalize(Vector3::zeros());
    assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    assert!(Vector3::zeros().try_normalize().unwrap_err().is_degenerate());
}

#[test]
fn test_rotate_lonlat_about_polar_axis_shifts_longitude() {
    let mut rng = rng();
    for _ in 0..200 {
        let ll = LonLat::new(rng.gen_range(-170.0..170.0), rng.gen_range(-80.0..80.0));
        let shift = rng.gen_range(-9.0..9.0);
        let moved = ops::xyz_to_lonlat(ops::rotate(
            Vector3::z_axis(),
            ops::lonlat_to_xyz(ll),
            ops::radians(shift),
        ));
        assert_lonlat_close(moved, LonLat::new(ll.lon + shift, ll.lat), 1e-9);
    }
}

#[test]
fn test_kernel_types_are_send_sync() {
    fn _assert_send_sync<T: Send + Sync + Copy>() {}
    _assert_send_sync::<Vector3>();
    _assert_send_sync::<Matrix3>();
    _assert_send_sync::<LonLat>();
}
