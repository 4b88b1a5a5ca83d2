//! Typed constant records, one per table.
//!
//! Every record can be flattened into a name -> value map via `as_map`, which
//! is what the string-keyed `get_constants` lookup returns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sutherland's law reference values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SutherlandConstants {
    /// Reference temperature [K]
    pub temperature_ref: f64,
    /// Viscosity at the reference temperature [Pa·s]
    pub viscosity_ref: f64,
    /// Sutherland temperature for viscosity [K]
    pub sutherland_visc: f64,
    /// Thermal conductivity at the reference temperature [W/(m·K)]
    pub conductivity_ref: f64,
    /// Sutherland temperature for conductivity [K]
    pub sutherland_cond: f64,
}

impl SutherlandConstants {
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("temperature_ref", self.temperature_ref),
            ("viscosity_ref", self.viscosity_ref),
            ("sutherland_visc", self.sutherland_visc),
            ("conductivity_ref", self.conductivity_ref),
            ("sutherland_cond", self.sutherland_cond),
        ])
    }
}

/// Ground electronic state spectroscopic constants of a diatomic molecule.
///
/// All energies are wavenumbers [cm⁻¹]; `r_e` is in ångström.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectroscopicConstants {
    /// Harmonic vibrational frequency ω_e
    pub omega_e: f64,
    /// First anharmonicity ω_e x_e
    pub omega_xe: f64,
    /// Second anharmonicity ω_e y_e
    pub omega_ye: f64,
    /// Equilibrium rotational constant B_e
    pub b_e: f64,
    /// Vibration-rotation interaction α_e
    pub alpha_e: f64,
    /// Centrifugal distortion D_e
    pub d_e: f64,
    /// Equilibrium internuclear distance [Å]
    pub r_e: f64,
}

impl SpectroscopicConstants {
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("omega_e", self.omega_e),
            ("omega_xe", self.omega_xe),
            ("omega_ye", self.omega_ye),
            ("B_e", self.b_e),
            ("alpha_e", self.alpha_e),
            ("D_e", self.d_e),
            ("r_e", self.r_e),
        ])
    }

    /// B_e / ω_e, the small parameter of the Dunham and Buldakov expansions.
    pub fn be_over_we(&self) -> f64 {
        self.b_e / self.omega_e
    }
}

/// Kerl's temperature/frequency polarizability fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KerlConstants {
    /// Static polarizability α₀ [m³]
    pub ground_polarizability: f64,
    /// Effective resonance angular frequency ω₀ [rad/s]
    pub ground_frequency: f64,
    /// Linear temperature coefficient [1/K]
    pub b: f64,
    /// Quadratic temperature coefficient [1/K²]
    pub c: f64,
}

impl KerlConstants {
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("groundPolarizability", self.ground_polarizability),
            ("groundFrequency", self.ground_frequency),
            ("b", self.b),
            ("c", self.c),
        ])
    }
}

/// Mean polarizability and its first three derivatives with respect to the
/// reduced internuclear distance, in atomic units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarizabilityDerivatives {
    pub zeroth: f64,
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

impl PolarizabilityDerivatives {
    pub fn as_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("zeroth", self.zeroth),
            ("first", self.first),
            ("second", self.second),
            ("third", self.third),
        ])
    }
}

/// Smith-Weintraub empirical refractivity constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmithConstants {
    /// Dry term [K/mbar]
    pub k1: f64,
    /// Water vapour term [K]
    pub k2: f64,
}

impl Default for SmithConstants {
    fn default() -> Self {
        Self {
            k1: 77.6,
            k2: 4810.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectroscopy_map_uses_conventional_names() {
        let rec = SpectroscopicConstants {
            omega_e: 2358.57,
            omega_xe: 14.324,
            omega_ye: -0.00226,
            b_e: 1.99824,
            alpha_e: 0.017318,
            d_e: 5.76e-6,
            r_e: 1.09768,
        };
        let map = rec.as_map();
        assert_eq!(map.len(), 7);
        assert_eq!(map["B_e"], 1.99824);
        assert_eq!(map["omega_xe"], 14.324);
        assert!(rec.be_over_we() < 1e-3);
    }

    #[test]
    fn kerl_map_keys() {
        let rec = KerlConstants {
            ground_polarizability: 1.0,
            ground_frequency: 2.0,
            b: 3.0,
            c: 4.0,
        };
        let keys: Vec<_> = rec.as_map().into_keys().collect();
        assert_eq!(keys, vec!["b", "c", "groundFrequency", "groundPolarizability"]);
    }

    #[test]
    fn smith_defaults() {
        let smith = SmithConstants::default();
        assert_eq!(smith.k1, 77.6);
        assert_eq!(smith.k2, 4810.0);
    }
}
