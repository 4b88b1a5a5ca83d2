//! Isentropic flow relations.

use crate::gas::check_gamma;
use ao_core::{AoError, AoResult, ensure_finite};

/// Stagnation-to-static ratios at one Mach number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsentropicRatios {
    /// p0 / p
    pub pressure_ratio: f64,
    /// T0 / T
    pub temperature_ratio: f64,
    /// ρ0 / ρ
    pub density_ratio: f64,
    /// A / A*
    pub area_ratio: f64,
}

pub fn isentropic_relations(mach: f64, gamma: f64) -> AoResult<IsentropicRatios> {
    let mach = ensure_finite(mach, "Mach number")?;
    if mach <= 0.0 {
        return Err(AoError::domain("Mach number must be positive", mach));
    }
    let gamma = check_gamma(gamma)?;
    let gm = gamma - 1.0;

    let temperature_ratio = 1.0 + 0.5 * gm * mach * mach;
    let pressure_ratio = temperature_ratio.powf(gamma / gm);
    let density_ratio = temperature_ratio.powf(1.0 / gm);
    let area_ratio =
        (2.0 / (gamma + 1.0) * temperature_ratio).powf((gamma + 1.0) / (2.0 * gm)) / mach;

    Ok(IsentropicRatios {
        pressure_ratio,
        temperature_ratio,
        density_ratio,
        area_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gas::DEFAULT_GAMMA;

    #[test]
    fn mach_2_table_values() {
        let r = isentropic_relations(2.0, DEFAULT_GAMMA).unwrap();
        assert!((r.temperature_ratio - 1.8).abs() < 1e-12);
        assert!((r.pressure_ratio - 7.8244).abs() < 1e-4);
        assert!((r.density_ratio - 4.3469).abs() < 1e-4);
        assert!((r.area_ratio - 1.6875).abs() < 1e-4);
    }

    #[test]
    fn sonic_throat() {
        let r = isentropic_relations(1.0, DEFAULT_GAMMA).unwrap();
        assert!((r.area_ratio - 1.0).abs() < 1e-12);
        assert!((r.temperature_ratio - 1.2).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_positive_mach() {
        assert!(isentropic_relations(0.0, DEFAULT_GAMMA).unwrap_err().is_domain());
        assert!(isentropic_relations(-1.0, DEFAULT_GAMMA).unwrap_err().is_domain());
    }

    #[test]
    fn consistent_with_ideal_gas() {
        let r = isentropic_relations(3.3, 1.3).unwrap();
        // p0/p = (rho0/rho)(T0/T)
        assert!((r.pressure_ratio - r.density_ratio * r.temperature_ratio).abs() < 1e-9);
    }
}
