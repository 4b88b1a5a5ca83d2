//! Fixed-factor unit conversions.

use crate::units::constants::{AVOGADRO, ELECTRON_VOLT, EPSILON_0, PLANCK, SPEED_OF_LIGHT};
use std::f64::consts::PI;

/// Volumetric polarizability [cm^3] to atomic polarizability [F m^2].
pub fn polarizability_cgs_to_si(polarizability_cm3: f64) -> f64 {
    polarizability_cm3 * 4.0 * PI * EPSILON_0 * 1e-6
}

/// Atomic polarizability [F m^2] to volumetric polarizability [cm^3].
pub fn polarizability_si_to_cgs(polarizability_si: f64) -> f64 {
    polarizability_si * 1e6 / (4.0 * PI * EPSILON_0)
}

/// Wavenumber [1/cm] to energy [J].
pub fn wavenumber_to_joules(wavenumber_cm: f64) -> f64 {
    wavenumber_cm * SPEED_OF_LIGHT * 100.0 * PLANCK
}

/// Wavenumber [1/cm] to energy [eV].
pub fn wavenumber_to_electronvolt(wavenumber_cm: f64) -> f64 {
    wavenumber_to_joules(wavenumber_cm) / ELECTRON_VOLT
}

/// Molar mass [g/mol] to the mass of one particle [kg].
pub fn molar_mass_to_kilogram(molar_mass_gmol: f64) -> f64 {
    molar_mass_gmol * 1e-3 / AVOGADRO
}
