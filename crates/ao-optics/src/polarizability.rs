//! Molecular polarizability models.
//!
//! - Kerl: temperature and frequency dependence of the mean polarizability,
//!   fitted for Air, H2, N2 and O2 [m³].
//! - Buldakov: polarizability of a single rovibrational level (v, j) from the
//!   polarizability derivatives at r_e and the Dunham potential [a.u.].

use ao_constants::{ConstantsProvider, Molecule};
use ao_core::units::constants::SPEED_OF_LIGHT;
use ao_core::{AoError, AoResult, ensure_finite, ensure_non_negative, ensure_positive};
use ao_quantum::{
    max_rotational_level, max_vibrational_level, potential_dunham_coef_012, potential_dunham_coeff_m,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Helium-neon laser line [nm]
pub const DEFAULT_WAVELENGTH_NM: f64 = 633.0;

/// Kerl polarizability α(ω, T) = α₀ (1 + bT + cT²) / (1 − (ω/ω₀)²) [m³].
///
/// Fails for T < 0, λ ≤ 0, a molecule outside {Air, H2, N2, O2}, or a
/// wavelength at or beyond the ground resonance ω₀.
pub fn kerl_polarizability_temperature(
    temperature_k: f64,
    molecule: Molecule,
    wavelength_nm: f64,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    let t = ensure_non_negative(temperature_k, "temperature must not be negative")?;
    let lambda = ensure_positive(wavelength_nm, "wavelength must be positive")?;
    let c = constants.kerl(molecule)?;

    let omega = 2.0 * PI * SPEED_OF_LIGHT / (lambda * 1e-9);
    let detuning = 1.0 - (omega / c.ground_frequency).powi(2);
    if detuning <= 0.0 {
        return Err(AoError::domain(
            "wavelength at or below the ground resonance",
            wavelength_nm,
        ));
    }

    let thermal = 1.0 + c.b * t + c.c * t * t;
    ensure_finite(c.ground_polarizability * thermal / detuning, "Kerl polarizability")
}

/// Contributions to the Buldakov level polarizability, in atomic units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuldakovTerms {
    /// α at the equilibrium distance.
    pub equilibrium: f64,
    /// First order in B_e/ω_e, proportional to (2v + 1).
    pub vibrational: f64,
    /// Centrifugal stretching, proportional to j(j + 1).
    pub rotational: f64,
    /// Second order in B_e/ω_e.
    pub anharmonic: f64,
    /// Third-order vibration-rotation coupling.
    pub coupling: f64,
}

impl BuldakovTerms {
    pub fn total(&self) -> f64 {
        self.equilibrium + self.vibrational + self.rotational + self.anharmonic + self.coupling
    }
}

/// Each term of the Buldakov expansion for level (v, j).
///
/// Supported molecules: H2, N2, O2. Quantum numbers above the last bound
/// vibrational level, or past the centrifugal limit, are rejected.
pub fn buldakov_terms(
    v: u32,
    j: u32,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<BuldakovTerms> {
    let d = constants.buldakov_derivatives(molecule)?;
    let s = constants.spectroscopy(molecule)?;

    let v_max = max_vibrational_level(molecule, constants)?;
    if v > v_max {
        return Err(AoError::domain(
            "vibrational number beyond the last bound level",
            v as f64,
        ));
    }
    let j_max = max_rotational_level(molecule, constants)?;
    if j > j_max {
        return Err(AoError::domain(
            "rotational number beyond the centrifugal limit",
            j as f64,
        ));
    }

    let dunham = potential_dunham_coef_012(molecule, constants)?;
    let (a1, a2) = (dunham.a1, dunham.a2);
    let a3 = potential_dunham_coeff_m(a1, a2, 3)?;

    let x = s.be_over_we();
    let vd = 2.0 * v as f64 + 1.0;
    let vd2 = vd * vd;
    let rd = j as f64 * (j as f64 + 1.0);

    let vibrational = x * (-3.0 * a1 * d.first + d.second) * vd / 2.0;
    let rotational = 4.0 * x * x * d.first * rd;

    let first = d.first
        * (-3.0 / 8.0 * a1.powi(3) * (7.0 + 15.0 * vd2)
            + 0.25 * a2 * a1 * (23.0 + 39.0 * vd2)
            - 15.0 / 4.0 * a3 * (5.0 + vd2));
    let second = d.second * (a1 * a1 / 8.0 * (7.0 + 15.0 * vd2) - 0.75 * a2 * (5.0 + vd2));
    let third = -a1 * d.third * (7.0 + 15.0 * vd2) / 24.0;
    let anharmonic = (first + second + third) * x * x;

    let coupling = (d.first * (24.0 * (1.0 - a2) + 27.0 * a1 * (1.0 + a1))
        - 3.0 * d.second * (1.0 + 3.0 * a1)
        + d.third / 8.0)
        * rd
        * vd
        * x.powi(3);

    Ok(BuldakovTerms {
        equilibrium: d.zeroth,
        vibrational,
        rotational,
        anharmonic,
        coupling,
    })
}

/// Polarizability of level (v, j) from the Buldakov expansion [a.u.].
pub fn buldakov_expansion(
    v: u32,
    j: u32,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    buldakov_terms(v, j, molecule, constants).map(|terms| terms.total())
}

/// Tropina's resonance approximation of the level polarizability.
pub fn tropina_approximation(_v: u32, _j: u32, _molecule: Molecule) -> AoResult<f64> {
    Err(AoError::NotImplemented {
        what: "Tropina resonance approximation",
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use ao_constants::BuiltinConstants;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn kerl_positive_in_the_visible(
            t in 0.0_f64..3000.0,
            lambda in 380.0_f64..780.0,
            idx in 0usize..4,
        ) {
            let molecule = [Molecule::Air, Molecule::H2, Molecule::N2, Molecule::O2][idx];
            let alpha = kerl_polarizability_temperature(t, molecule, lambda, &BuiltinConstants)
                .unwrap();
            prop_assert!(alpha > 0.0);
        }

        #[test]
        fn buldakov_finite_for_bound_levels(v in 0u32..10, j in 0u32..20) {
            for molecule in [Molecule::H2, Molecule::N2, Molecule::O2] {
                let alpha = buldakov_expansion(v, j, molecule, &BuiltinConstants).unwrap();
                prop_assert!(alpha.is_finite());
            }
        }
    }
}
