//! Dunham potential coefficients and reduced masses.
//!
//! The Dunham potential expands the internuclear potential in
//! ξ = (r − r_e)/r_e as V(ξ) = a₀ ξ² (1 + a₁ ξ + a₂ ξ² + …). The low-order
//! coefficients follow from the spectroscopic constants, the higher ones from
//! a recursion in a₁ and a₂ (J. Mol. Struct. THEOCHEM, 2004).

use ao_constants::{ConstantsProvider, Molecule, formula_mass};
use ao_core::conversions::molar_mass_to_kilogram;
use ao_core::{AoError, AoResult};
use serde::{Deserialize, Serialize};

/// a₀ [cm⁻¹] and the dimensionless a₁, a₂.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DunhamCoefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl DunhamCoefficients {
    /// Coefficient of order `m` (a₀ included).
    pub fn coefficient(&self, m: u32) -> AoResult<f64> {
        match m {
            0 => Ok(self.a0),
            _ => potential_dunham_coeff_m(self.a1, self.a2, m),
        }
    }
}

/// a₀ = ω_e²/(4B_e), a₁ = −(α_e ω_e/(6B_e²) + 1), a₂ = 5/4 a₁² − 2/3 ω_ex_e/B_e.
pub fn potential_dunham_coef_012(
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<DunhamCoefficients> {
    let c = constants.spectroscopy(molecule)?;
    let a0 = c.omega_e * c.omega_e / (4.0 * c.b_e);
    let a1 = -(c.alpha_e * c.omega_e / (6.0 * c.b_e * c.b_e) + 1.0);
    let a2 = 1.25 * a1 * a1 - (2.0 / 3.0) * (c.omega_xe / c.b_e);
    Ok(DunhamCoefficients { a0, a1, a2 })
}

/// Dunham coefficient a_m for m ≥ 1 from a₁ and a₂.
///
/// For m ≥ 3:
/// a_m = (12/a₁)^(m−2) · (2^(m+1) − 1) · (a₂/7)^(m−1) · Π_{i=0}^{m−3} 1/(m+2−i)
///
/// which reproduces a₂ at m = 2. a₀ is not part of the recursion.
pub fn potential_dunham_coeff_m(a1: f64, a2: f64, m: u32) -> AoResult<f64> {
    match m {
        0 => Err(AoError::InvalidArg {
            what: "a0 is not given by the Dunham recursion",
        }),
        1 => Ok(a1),
        2 => Ok(a2),
        _ => {
            let m_i = i32::try_from(m)
                .map_err(|_| AoError::domain("Dunham order too large", m as f64))?;
            let mut a = (12.0 / a1).powi(m_i - 2);
            a *= 2.0_f64.powi(m_i + 1) - 1.0;
            a *= (a2 / 7.0).powi(m_i - 1);
            for i in 0..(m_i - 2) {
                a /= f64::from(m_i + 2 - i);
            }
            if !a.is_finite() {
                return Err(AoError::NonFinite {
                    what: "Dunham coefficient",
                    value: a,
                });
            }
            Ok(a)
        }
    }
}

/// μ = m₁m₂/(m₁ + m₂) of two species given by formula [kg].
pub fn reduced_mass(formula_1: &str, formula_2: &str) -> AoResult<f64> {
    let m1 = formula_mass(formula_1)?;
    let m2 = formula_mass(formula_2)?;
    Ok(molar_mass_to_kilogram(m1 * m2 / (m1 + m2)))
}
