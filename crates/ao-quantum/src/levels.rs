//! Rovibrational level energies [cm⁻¹].

use ao_constants::{ConstantsProvider, Molecule, SpectroscopicConstants};
use ao_core::{AoError, AoResult};
use serde::{Deserialize, Serialize};

/// How a (v, j) level energy is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyModel {
    /// Harmonic oscillator plus rigid rotor, summed independently.
    #[default]
    Separable,
    /// Anharmonic, centrifugally distorted levels with vibration-rotation
    /// coupling. Needs both quantum numbers.
    BornOppenheimer,
}

/// Validate a signed quantum number.
pub fn quantum_number(n: i64) -> AoResult<u32> {
    u32::try_from(n).map_err(|_| AoError::domain("quantum number must be a non-negative integer", n as f64))
}

pub(crate) fn vib_energy(c: &SpectroscopicConstants, v: u32) -> f64 {
    c.omega_e * (v as f64 + 0.5)
}

pub(crate) fn rot_energy(c: &SpectroscopicConstants, j: u32) -> f64 {
    let j = j as f64;
    c.b_e * j * (j + 1.0)
}

pub(crate) fn bo_energy(c: &SpectroscopicConstants, v: u32, j: u32) -> f64 {
    let vib = v as f64 + 0.5;
    let j = j as f64;
    let rot = j * (j + 1.0);

    let harmonic = c.omega_e * vib + c.b_e * rot;
    let anharmonic = c.omega_xe * vib * vib + c.d_e * rot * rot;
    let interaction = c.alpha_e * vib * rot;
    harmonic - anharmonic - interaction
}

/// Harmonic vibrational energy ω_e (v + ½).
pub fn vibrational_energy_level(
    v: u32,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    Ok(vib_energy(&constants.spectroscopy(molecule)?, v))
}

/// Rigid-rotor energy B_e j (j + 1).
pub fn rotational_energy_level(
    j: u32,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    Ok(rot_energy(&constants.spectroscopy(molecule)?, j))
}

/// E = ω_e(v+½) + B_e j(j+1) − ω_xe(v+½)² − D_e[j(j+1)]² − α_e(v+½)j(j+1)
pub fn born_oppenheimer_energy(
    v: u32,
    j: u32,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    Ok(bo_energy(&constants.spectroscopy(molecule)?, v, j))
}

/// Vibrational zero-point energy including anharmonic and rotational
/// corrections (Irikura, 2007).
pub fn zero_point_energy(molecule: Molecule, constants: &dyn ConstantsProvider) -> AoResult<f64> {
    let c = constants.spectroscopy(molecule)?;
    let scope = c.alpha_e * c.omega_e / c.b_e;
    Ok(c.omega_e / 2.0 - c.omega_xe / 2.0
        + c.omega_ye / 8.0
        + c.b_e / 4.0
        + scope / 12.0
        + scope * scope / (144.0 * c.b_e))
}

pub(crate) fn last_bound_vibrational(c: &SpectroscopicConstants) -> u32 {
    if c.omega_xe <= 0.0 {
        return u32::MAX;
    }
    // dE/dv = ω_e − 2 ω_xe (v + ½) stays positive
    let v = (c.omega_e / (2.0 * c.omega_xe) - 0.5).floor();
    v.clamp(0.0, u32::MAX as f64) as u32
}

pub(crate) fn last_bound_rotational(c: &SpectroscopicConstants) -> u32 {
    if c.d_e <= 0.0 {
        return u32::MAX;
    }
    // B_e x − D_e x² increases while x = j(j+1) < B_e / (2 D_e)
    let x = c.b_e / (2.0 * c.d_e);
    let j = ((-1.0 + (1.0 + 4.0 * x).sqrt()) / 2.0).floor();
    j.clamp(0.0, u32::MAX as f64) as u32
}

/// Highest vibrational level below the anharmonic turning point.
pub fn max_vibrational_level(molecule: Molecule, constants: &dyn ConstantsProvider) -> AoResult<u32> {
    Ok(last_bound_vibrational(&constants.spectroscopy(molecule)?))
}

/// Highest rotational level before centrifugal distortion dominates.
pub fn max_rotational_level(molecule: Molecule, constants: &dyn ConstantsProvider) -> AoResult<u32> {
    Ok(last_bound_rotational(&constants.spectroscopy(molecule)?))
}

/// Particle-in-a-box translational energy.
pub fn translational_energy(_n_x: u32, _n_y: u32, _n_z: u32) -> AoResult<f64> {
    Err(AoError::NotImplemented {
        what: "translational energy",
    })
}
