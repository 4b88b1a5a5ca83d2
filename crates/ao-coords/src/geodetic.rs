//! Geodetic (LLA) and Earth-centred Earth-fixed (ECEF) positions.

use ao_core::{AoError, AoResult};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle distances [m]
pub const EARTH_MEAN_RADIUS_M: f64 = 6_371e3;

/// Reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis [m]
    pub semi_major: f64,
    /// Semi-minor axis [m]
    pub semi_minor: f64,
}

impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid {
        semi_major: 6_378_137.0,
        semi_minor: 6_356_752.3142,
    };

    /// First eccentricity squared.
    pub fn eccentricity_sq(&self) -> f64 {
        let ratio = self.semi_minor / self.semi_major;
        1.0 - ratio * ratio
    }

    pub fn lla_to_ecef(&self, lla: &Lla) -> Vector3<f64> {
        let (s_lat, c_lat) = lla.lat_deg.to_radians().sin_cos();
        let (s_lon, c_lon) = lla.lon_deg.to_radians().sin_cos();
        let e2 = self.eccentricity_sq();

        // Prime vertical radius of curvature
        let n = self.semi_major / (1.0 - e2 * s_lat * s_lat).sqrt();

        Vector3::new(
            (n + lla.alt_m) * c_lat * c_lon,
            (n + lla.alt_m) * c_lat * s_lon,
            ((1.0 - e2) * n + lla.alt_m) * s_lat,
        )
    }

    /// Closed-form ECEF to geodetic conversion (Olson, 1996).
    ///
    /// Two algebraic branches are used depending on whether the point is
    /// closer to the equatorial plane (c² > 0.3) or to the polar axis.
    pub fn ecef_to_lla(&self, ecef: &Vector3<f64>) -> AoResult<Lla> {
        let (x, y, z) = (ecef.x, ecef.y, ecef.z);
        let r = ecef.norm();
        if !r.is_finite() {
            return Err(AoError::NonFinite {
                what: "ECEF position",
                value: r,
            });
        }
        if r == 0.0 {
            return Err(AoError::domain("latitude undefined at the Earth's centre", r));
        }

        let a = self.semi_major;
        let e2 = self.eccentricity_sq();
        let a1 = a * e2;
        let a2 = a1 * a1;
        let a3 = 0.5 * a1 * e2;
        let a4 = 2.5 * a2;
        let a5 = a1 + a3;
        let a6 = 1.0 - e2;

        let u = a2 / r;
        let v = a3 - a4 / r;
        let s2 = (z / r).powi(2);
        let c2 = (x * x + y * y) / (r * r);
        let lon = y.atan2(x);

        let (lat, s, c) = if c2 > 0.3 {
            let s = (z.abs() / r) * (1.0 + c2 * (a1 + u + s2 * v) / r);
            (s.asin(), s, (1.0 - s * s).sqrt())
        } else {
            let c = c2.sqrt() * (1.0 - s2 * (a5 - u - c2 * v) / r);
            (c.acos(), (1.0 - c * c).sqrt(), c)
        };

        let g = 1.0 - e2 * s * s;
        let rg = a / g.sqrt();
        let rf = a6 * rg;
        let u = c2.sqrt() * r - rg * c;
        let v = z.abs() - rf * s;
        let f = c * u + s * v;
        let m = c * v - s * u;
        let p = m / (rf / g + f);

        let mut lat_deg = (lat + p).to_degrees();
        if z < 0.0 {
            lat_deg = -lat_deg;
        }

        Ok(Lla {
            lat_deg,
            lon_deg: lon.to_degrees(),
            alt_m: f + 0.5 * m * p,
        })
    }
}

/// Geodetic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lla {
    /// Latitude [deg]
    pub lat_deg: f64,
    /// Longitude [deg]
    pub lon_deg: f64,
    /// Altitude above the ellipsoid [m]
    pub alt_m: f64,
}

impl Lla {
    pub fn new(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_m,
        }
    }
}

impl From<Vector3<f64>> for Lla {
    /// Components ordered (lat_deg, lon_deg, alt_m).
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Lla> for Vector3<f64> {
    fn from(lla: Lla) -> Self {
        Vector3::new(lla.lat_deg, lla.lon_deg, lla.alt_m)
    }
}

/// WGS-84 geodetic to ECEF [m].
pub fn lla_to_ecef(lla: &Lla) -> Vector3<f64> {
    Ellipsoid::WGS84.lla_to_ecef(lla)
}

pub fn lla_to_ecef_deg(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Vector3<f64> {
    lla_to_ecef(&Lla::new(lat_deg, lon_deg, alt_m))
}

/// ECEF [m] to WGS-84 geodetic.
pub fn ecef_to_lla(ecef: &Vector3<f64>) -> AoResult<Lla> {
    Ellipsoid::WGS84.ecef_to_lla(ecef)
}

pub fn ecef_to_lla_xyz(x: f64, y: f64, z: f64) -> AoResult<Lla> {
    ecef_to_lla(&Vector3::new(x, y, z))
}

/// Great-circle distance between two points given in degrees.
///
/// The result carries the unit of `sphere_radius`.
pub fn haversine_distance(
    lat_1_deg: f64,
    lon_1_deg: f64,
    lat_2_deg: f64,
    lon_2_deg: f64,
    sphere_radius: f64,
) -> f64 {
    let d_lat = (lat_2_deg - lat_1_deg).to_radians();
    let d_lon = (lon_2_deg - lon_1_deg).to_radians();
    let lat_1 = lat_1_deg.to_radians();
    let lat_2 = lat_2_deg.to_radians();

    let h = (1.0 - d_lat.cos() + lat_1.cos() * lat_2.cos() * (1.0 - d_lon.cos())) / 2.0;
    // Rounding can push h a hair outside [0, 1] for antipodal points
    2.0 * sphere_radius * h.clamp(0.0, 1.0).sqrt().asin()
}
