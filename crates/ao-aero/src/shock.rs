//! Normal and oblique shock relations for a calorically perfect gas.

use crate::gas::check_gamma;
use ao_core::{AoError, AoResult, ensure_finite};

/// Property ratios across a normal shock (downstream / upstream).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalShock {
    pub mach_2: f64,
    pub pressure_ratio: f64,
    pub temperature_ratio: f64,
    pub density_ratio: f64,
    pub stagnation_pressure_ratio: f64,
    /// Always 1: the shock is adiabatic.
    pub stagnation_temperature_ratio: f64,
}

/// Property ratios across a weak oblique shock (downstream / upstream).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObliqueShock {
    pub mach_2: f64,
    pub pressure_ratio: f64,
    pub temperature_ratio: f64,
    pub density_ratio: f64,
    /// Flow deflection θ [deg]
    pub deflection_angle_deg: f64,
    /// Upstream Mach number normal to the shock
    pub normal_mach_1: f64,
    /// Downstream Mach number normal to the shock
    pub normal_mach_2: f64,
}

/// Rankine-Hugoniot relations for a normal shock.
///
/// Fails for M1 < 1; a normal shock cannot stand in subsonic flow.
pub fn normal_shock_relations(mach_1: f64, gamma: f64) -> AoResult<NormalShock> {
    let mach_1 = ensure_finite(mach_1, "upstream Mach number")?;
    if mach_1 < 1.0 {
        return Err(AoError::domain(
            "normal shock needs supersonic upstream Mach number",
            mach_1,
        ));
    }
    let gamma = check_gamma(gamma)?;

    let gm = gamma - 1.0;
    let gp = gamma + 1.0;
    let m11 = mach_1 * mach_1;

    let mach_2 = ((gm * m11 + 2.0) / (2.0 * gamma * m11 - gm)).sqrt();
    let pressure_ratio = (2.0 * gamma * m11 - gm) / gp;
    let temperature_ratio = (2.0 * gamma * m11 - gm) * (gm * m11 + 2.0) / (gp * gp * m11);
    let density_ratio = gp * m11 / (gm * m11 + 2.0);
    let stagnation_pressure_ratio = (gp / (2.0 * gamma * m11 - gm)).powf(1.0 / gm)
        * density_ratio.powf(gamma / gm);

    Ok(NormalShock {
        mach_2,
        pressure_ratio,
        temperature_ratio,
        density_ratio,
        stagnation_pressure_ratio,
        stagnation_temperature_ratio: 1.0,
    })
}

/// Mach angle μ = asin(1/M) [deg].
pub fn mach_angle_deg(mach_1: f64) -> AoResult<f64> {
    let mach_1 = ensure_finite(mach_1, "upstream Mach number")?;
    if mach_1 <= 1.0 {
        return Err(AoError::domain(
            "Mach angle needs supersonic Mach number",
            mach_1,
        ));
    }
    Ok((1.0 / mach_1).asin().to_degrees())
}

/// Shock angle of maximum deflection [deg], the upper end of the weak branch.
pub fn max_weak_shock_angle_deg(mach_1: f64, gamma: f64) -> AoResult<f64> {
    mach_angle_deg(mach_1)?;
    let gamma = check_gamma(gamma)?;
    let m2 = mach_1 * mach_1;
    let gp = gamma + 1.0;
    let root = (gp * (1.0 + 0.5 * (gamma - 1.0) * m2 + gp * m2 * m2 / 16.0)).sqrt();
    let sin2 = (0.25 * gp * m2 - 1.0 + root) / (gamma * m2);
    Ok(sin2.sqrt().asin().to_degrees())
}

/// Oblique shock relations from the shock angle β.
///
/// The deflection follows explicitly from the θ-β-M relation
/// tan θ = 2 cot β (M² sin² β − 1) / (M² (γ + cos 2β) + 2).
/// Only the weak branch is accepted: β must lie in (μ, β_max], where μ is the
/// Mach angle and β_max the shock angle of maximum deflection.
pub fn oblique_shock_relations(
    mach_1: f64,
    shock_angle_deg: f64,
    gamma: f64,
) -> AoResult<ObliqueShock> {
    let mach_angle = mach_angle_deg(mach_1)?;
    let gamma = check_gamma(gamma)?;
    let beta_deg = ensure_finite(shock_angle_deg, "shock angle")?;
    if beta_deg <= mach_angle {
        return Err(AoError::domain(
            "shock angle must exceed the Mach angle",
            beta_deg,
        ));
    }
    let beta_max = max_weak_shock_angle_deg(mach_1, gamma)?;
    if beta_deg > beta_max {
        return Err(AoError::domain(
            "shock angle beyond the weak-shock branch (detached shock)",
            beta_deg,
        ));
    }

    let beta = beta_deg.to_radians();
    let m11 = mach_1 * mach_1;
    let mn1 = mach_1 * beta.sin();
    let mn11 = mn1 * mn1;

    let tan_theta =
        2.0 / beta.tan() * (mn11 - 1.0) / (m11 * (gamma + (2.0 * beta).cos()) + 2.0);
    let theta = tan_theta.atan();

    let gm = gamma - 1.0;
    let gp = gamma + 1.0;
    let density_ratio = gp * mn11 / (gm * mn11 + 2.0);
    let pressure_ratio = 1.0 + 2.0 * gamma * (mn11 - 1.0) / gp;
    let temperature_ratio = pressure_ratio / density_ratio;
    let mn2 = ((mn11 + 2.0 / gm) / (2.0 * gamma / gm * mn11 - 1.0)).sqrt();
    let mach_2 = mn2 / (beta - theta).sin();

    Ok(ObliqueShock {
        mach_2,
        pressure_ratio,
        temperature_ratio,
        density_ratio,
        deflection_angle_deg: theta.to_degrees(),
        normal_mach_1: mn1,
        normal_mach_2: mn2,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::gas::DEFAULT_GAMMA;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normal_shock_compresses(mach_1 in 1.0001_f64..20.0) {
            let s = normal_shock_relations(mach_1, DEFAULT_GAMMA).unwrap();
            prop_assert!(s.mach_2 < 1.0);
            prop_assert!(s.pressure_ratio > 1.0);
            prop_assert!(s.density_ratio > 1.0);
            prop_assert!(s.density_ratio < 6.0);
            prop_assert!(s.stagnation_pressure_ratio < 1.0);
        }

        #[test]
        fn weak_branch_never_nan(mach_1 in 1.05_f64..10.0, frac in 0.01_f64..1.0) {
            let mu = mach_angle_deg(mach_1).unwrap();
            let beta_max = max_weak_shock_angle_deg(mach_1, DEFAULT_GAMMA).unwrap();
            let beta = mu + frac * (beta_max - mu);
            let s = oblique_shock_relations(mach_1, beta, DEFAULT_GAMMA).unwrap();
            prop_assert!(s.mach_2.is_finite());
            prop_assert!(s.deflection_angle_deg > 0.0);
            prop_assert!(s.pressure_ratio >= 1.0);
        }
    }
}
