use ao_coords::*;
use nalgebra::{Matrix3, Vector3};

#[test]
fn ecef_roundtrip_grid() {
    for lat in (-89..=89).step_by(7) {
        for lon in (-175..=175).step_by(25) {
            for alt in [0.0, 1_000.0, 500e3] {
                let lla = Lla::new(lat as f64, lon as f64, alt);
                let back = ecef_to_lla(&lla_to_ecef(&lla)).unwrap();
                assert!((back.lat_deg - lla.lat_deg).abs() < 1e-6, "{lla:?} -> {back:?}");
                assert!((back.lon_deg - lla.lon_deg).abs() < 1e-6, "{lla:?} -> {back:?}");
                assert!((back.alt_m - lla.alt_m).abs() < 1e-3, "{lla:?} -> {back:?}");
            }
        }
    }
}

#[test]
fn ecef_distance_matches_haversine_on_sphere_scale() {
    // Two nearby sea-level points: chord and arc agree to well under a metre.
    let a = Lla::new(45.0, 7.0, 0.0);
    let b = Lla::new(45.01, 7.0, 0.0);
    let chord = (lla_to_ecef(&a) - lla_to_ecef(&b)).norm();
    let arc = haversine_distance(a.lat_deg, a.lon_deg, b.lat_deg, b.lon_deg, EARTH_MEAN_RADIUS_M);
    assert!((chord - arc).abs() / arc < 5e-3);
}

#[test]
fn body_frame_vector_transform() {
    // Yaw of 90 deg: the inertial x axis appears along -y in the body frame.
    let dcm = euler_321_dcm_deg(0.0, 0.0, 90.0);
    let v = dcm * Vector3::x();
    assert!((v - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12);

    // Transpose undoes the rotation
    let back = dcm.transpose() * v;
    assert!((back - Vector3::x()).norm() < 1e-12);
}

#[test]
fn euler_extraction_reproduces_matrix() {
    let angles = EulerAngles::new(33.0, -12.0, -140.0);
    let dcm = euler_321_dcm(&angles);
    let back = euler_angles_from_dcm(&dcm).unwrap();
    let rebuilt: Matrix3<f64> = euler_321_dcm(&back);
    assert!((dcm - rebuilt).abs().max() < 1e-12);
}
