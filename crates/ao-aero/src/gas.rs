//! Ideal-gas helpers for air and other mixtures.

use ao_constants::{Composition, Molecule};
use ao_core::units::constants::GAS_CONSTANT;
use ao_core::units::{Temperature, Velocity, k, mps};
use ao_core::{AoError, AoResult, ensure_finite, ensure_positive, map_batch};
use std::collections::BTreeMap;

/// Heat capacity ratio of diatomic air at moderate temperature.
pub const DEFAULT_GAMMA: f64 = 1.4;

pub(crate) fn check_gamma(gamma: f64) -> AoResult<f64> {
    let gamma = ensure_finite(gamma, "adiabatic index")?;
    if gamma <= 1.0 {
        return Err(AoError::domain("adiabatic index must exceed 1", gamma));
    }
    Ok(gamma)
}

/// Speed of sound in standard dry air: a = sqrt(γ R T / M).
pub fn speed_of_sound(temperature: Temperature, gamma: f64) -> AoResult<Velocity> {
    speed_of_sound_in(&Composition::standard_air(), temperature, gamma)
}

/// Speed of sound in an ideal-gas mixture of molar mass M = Σ x_i M_i.
pub fn speed_of_sound_in(
    mixture: &Composition,
    temperature: Temperature,
    gamma: f64,
) -> AoResult<Velocity> {
    let t = ensure_positive(temperature.value, "temperature must be positive")?;
    let gamma = check_gamma(gamma)?;
    // g/mol -> kg/mol
    let molar_mass = mixture.molar_mass()? * 1e-3;
    Ok(mps((gamma * GAS_CONSTANT * t / molar_mass).sqrt()))
}

/// Speed of sound [m/s] over an array of temperatures [K].
pub fn speed_of_sound_batch(temperatures_k: &[f64], gamma: f64) -> AoResult<Vec<f64>> {
    map_batch(temperatures_k, |t| speed_of_sound(k(t), gamma).map(|a| a.value))
}

/// Molar masses [g/mol] keyed by species.
///
/// Defaults to the ten-species high-temperature air set.
pub fn air_molar_masses(species: Option<&[Molecule]>) -> AoResult<BTreeMap<Molecule, f64>> {
    let species = species.unwrap_or(&Molecule::AIR_SPECIES);
    species
        .iter()
        .map(|m| {
            m.molar_mass()
                .map(|mass| (*m, mass))
                .map_err(AoError::from)
        })
        .collect()
}
