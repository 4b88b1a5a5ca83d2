//! ao-coords: geodetic positions and attitude matrices.
//!
//! Angles at the public surface are in degrees, distances in meters.
//! Positions and matrices use `nalgebra` fixed-size types.

pub mod attitude;
pub mod geodetic;

pub use attitude::{
    EulerAngles, euler_321_dcm, euler_321_dcm_deg, euler_angles_from_dcm, pitch_dcm, roll_dcm,
    yaw_dcm,
};
pub use geodetic::{
    EARTH_MEAN_RADIUS_M, Ellipsoid, Lla, ecef_to_lla, ecef_to_lla_xyz, haversine_distance,
    lla_to_ecef, lla_to_ecef_deg,
};
