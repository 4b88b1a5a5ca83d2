//! Direction cosine matrices for 3-2-1 (yaw, pitch, roll) Euler sequences.
//!
//! Matrices rotate frames, not vectors: `roll_dcm(r) * v` expresses `v` in a
//! frame rolled by `r` about the x axis.

use ao_core::{AoError, AoResult};
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

/// Euler angles [deg].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub roll_deg: f64,
    pub pitch_deg: f64,
    pub yaw_deg: f64,
}

impl EulerAngles {
    pub fn new(roll_deg: f64, pitch_deg: f64, yaw_deg: f64) -> Self {
        Self {
            roll_deg,
            pitch_deg,
            yaw_deg,
        }
    }
}

/// Rotation about x.
pub fn roll_dcm(roll_deg: f64) -> Matrix3<f64> {
    let (s, c) = roll_deg.to_radians().sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Rotation about y.
pub fn pitch_dcm(pitch_deg: f64) -> Matrix3<f64> {
    let (s, c) = pitch_deg.to_radians().sin_cos();
    Matrix3::new(
        c, 0.0, -s, //
        0.0, 1.0, 0.0, //
        s, 0.0, c,
    )
}

/// Rotation about z.
pub fn yaw_dcm(yaw_deg: f64) -> Matrix3<f64> {
    let (s, c) = yaw_deg.to_radians().sin_cos();
    Matrix3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

/// Yaw, then pitch, then roll: `roll_dcm * pitch_dcm * yaw_dcm`.
pub fn euler_321_dcm(angles: &EulerAngles) -> Matrix3<f64> {
    let (s_r, c_r) = angles.roll_deg.to_radians().sin_cos();
    let (s_p, c_p) = angles.pitch_deg.to_radians().sin_cos();
    let (s_y, c_y) = angles.yaw_deg.to_radians().sin_cos();

    Matrix3::new(
        c_p * c_y,
        c_p * s_y,
        -s_p,
        s_r * s_p * c_y - c_r * s_y,
        s_r * s_p * s_y + c_r * c_y,
        s_r * c_p,
        c_r * s_p * c_y + s_r * s_y,
        c_r * s_p * s_y - s_r * c_y,
        c_r * c_p,
    )
}

pub fn euler_321_dcm_deg(roll_deg: f64, pitch_deg: f64, yaw_deg: f64) -> Matrix3<f64> {
    euler_321_dcm(&EulerAngles::new(roll_deg, pitch_deg, yaw_deg))
}

/// Recover 3-2-1 Euler angles from a DCM.
///
/// Pitch is returned in [-90, 90], roll and yaw in (-180, 180]. At pitch
/// ±90° roll and yaw are not separable and the extraction fails; close to it
/// they are poorly conditioned.
pub fn euler_angles_from_dcm(dcm: &Matrix3<f64>) -> AoResult<EulerAngles> {
    let sin_pitch = -dcm[(0, 2)];
    if !sin_pitch.is_finite() {
        return Err(AoError::NonFinite {
            what: "DCM element (0, 2)",
            value: sin_pitch,
        });
    }
    if sin_pitch.abs() >= 1.0 - 1e-12 {
        return Err(AoError::domain(
            "gimbal lock: pitch at +/-90 deg",
            sin_pitch.asin().to_degrees(),
        ));
    }

    let pitch_deg = sin_pitch.asin().to_degrees();
    if pitch_deg.abs() > 89.0 {
        tracing::warn!(pitch_deg, "euler extraction near gimbal lock");
    }

    Ok(EulerAngles {
        roll_deg: dcm[(1, 2)].atan2(dcm[(2, 2)]).to_degrees(),
        pitch_deg,
        yaw_deg: dcm[(0, 1)].atan2(dcm[(0, 0)]).to_degrees(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &Matrix3<f64>, b: &Matrix3<f64>) {
        assert!((a - b).abs().max() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn composition_order() {
        let (r, p, y) = (10.0, -20.0, 135.0);
        let composed = roll_dcm(r) * pitch_dcm(p) * yaw_dcm(y);
        assert_close(&euler_321_dcm_deg(r, p, y), &composed);
    }

    #[test]
    fn zero_angles_are_identity() {
        assert_close(&euler_321_dcm(&EulerAngles::default()), &Matrix3::identity());
    }

    #[test]
    fn single_axis_inverse() {
        assert_close(&(roll_dcm(30.0) * roll_dcm(-30.0)), &Matrix3::identity());
        assert_close(&yaw_dcm(30.0).transpose(), &yaw_dcm(-30.0));
    }

    #[test]
    fn extraction_quadrants() {
        let angles = EulerAngles::new(-150.0, 45.0, 170.0);
        let back = euler_angles_from_dcm(&euler_321_dcm(&angles)).unwrap();
        assert!((back.roll_deg - angles.roll_deg).abs() < 1e-9);
        assert!((back.pitch_deg - angles.pitch_deg).abs() < 1e-9);
        assert!((back.yaw_deg - angles.yaw_deg).abs() < 1e-9);
    }

    #[test]
    fn gimbal_lock_rejected() {
        let dcm = euler_321_dcm_deg(10.0, 90.0, 20.0);
        assert!(euler_angles_from_dcm(&dcm).unwrap_err().is_domain());

        let dcm = euler_321_dcm_deg(10.0, -90.0, 20.0);
        assert!(euler_angles_from_dcm(&dcm).is_err());

        let near = euler_321_dcm_deg(10.0, 89.5, 20.0);
        assert!(euler_angles_from_dcm(&near).is_ok());
    }
}
