//! Standard atmosphere.
//!
//! `Isa1976` is the U.S. Standard Atmosphere 1976 below 80 km geopotential
//! altitude (about 81 km geometric), extended down to -5 km.

use ao_core::units::constants::G0_MPS2;
use ao_core::units::{Density, Length, Pressure, Temperature, k, kgpm3, pa};
use ao_core::{AoError, AoResult};

/// Thermodynamic state of the atmosphere at one altitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereState {
    pub temperature: Temperature,
    pub pressure: Pressure,
    pub density: Density,
}

/// Altitude to atmospheric state.
pub trait StandardAtmosphere: Send + Sync {
    /// State at a geometric altitude above mean sea level.
    fn at(&self, altitude: Length) -> AoResult<AtmosphereState>;
}

/// Specific gas constant for dry air [J/(kg·K)]
const R_AIR: f64 = 287.052_87;

/// Effective Earth radius for the geopotential conversion [m]
const EARTH_RADIUS_M: f64 = 6_356_766.0;

struct Layer {
    base: f64,
    base_temperature: f64,
    base_pressure: f64,
    gradient: f64,
}

const LAYERS: [Layer; 8] = [
    Layer {
        base: -5_000.0,
        base_temperature: 320.65,
        base_pressure: 1.776_97e5,
        gradient: -6.5e-3,
    },
    Layer {
        base: 0.0,
        base_temperature: 288.15,
        base_pressure: 1.013_25e5,
        gradient: -6.5e-3,
    },
    Layer {
        base: 11_000.0,
        base_temperature: 216.65,
        base_pressure: 2.263_20e4,
        gradient: 0.0,
    },
    Layer {
        base: 20_000.0,
        base_temperature: 216.65,
        base_pressure: 5.474_87e3,
        gradient: 1.0e-3,
    },
    Layer {
        base: 32_000.0,
        base_temperature: 228.65,
        base_pressure: 8.680_14e2,
        gradient: 2.8e-3,
    },
    Layer {
        base: 47_000.0,
        base_temperature: 270.65,
        base_pressure: 1.109_06e2,
        gradient: 0.0,
    },
    Layer {
        base: 51_000.0,
        base_temperature: 270.65,
        base_pressure: 6.693_84e1,
        gradient: -2.8e-3,
    },
    Layer {
        base: 71_000.0,
        base_temperature: 214.65,
        base_pressure: 3.956_39,
        gradient: -2.0e-3,
    },
];

/// Top of the modelled range [m, geopotential]
const TOP_GEOPOTENTIAL_M: f64 = 80_000.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Isa1976;

impl Isa1976 {
    pub fn geopotential_altitude(geometric_m: f64) -> f64 {
        EARTH_RADIUS_M * geometric_m / (EARTH_RADIUS_M + geometric_m)
    }

    fn layer(h: f64) -> &'static Layer {
        LAYERS
            .iter()
            .rev()
            .find(|layer| h >= layer.base)
            .unwrap_or(&LAYERS[0])
    }
}

impl StandardAtmosphere for Isa1976 {
    fn at(&self, altitude: Length) -> AoResult<AtmosphereState> {
        let z = altitude.value;
        if !z.is_finite() {
            return Err(AoError::NonFinite {
                what: "altitude",
                value: z,
            });
        }
        let h = Self::geopotential_altitude(z);
        if !(LAYERS[0].base..=TOP_GEOPOTENTIAL_M).contains(&h) {
            return Err(AoError::domain(
                "altitude outside the standard atmosphere range",
                z,
            ));
        }

        let layer = Self::layer(h);
        let dh = h - layer.base;
        let t = layer.base_temperature + layer.gradient * dh;
        let p = if layer.gradient == 0.0 {
            layer.base_pressure * (-G0_MPS2 * dh / (R_AIR * layer.base_temperature)).exp()
        } else {
            layer.base_pressure
                * (layer.base_temperature / t).powf(G0_MPS2 / (layer.gradient * R_AIR))
        };
        let rho = p / (R_AIR * t);

        Ok(AtmosphereState {
            temperature: k(t),
            pressure: pa(p),
            density: kgpm3(rho),
        })
    }
}
