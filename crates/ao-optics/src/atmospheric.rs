//! Radio refractivity of the standard atmosphere (Smith-Weintraub).
//!
//! N = (K₁ / T) (P + K₂ e / T),  n = 1 + N · 10⁻⁶
//!
//! with P the total pressure and e the water vapour partial pressure, both
//! in millibar.

use ao_constants::{ConstantsProvider, StandardAtmosphere};
use ao_core::units::{Length, m};
use ao_core::{AoResult, ensure_non_negative, map_batch};

const PA_PER_MBAR: f64 = 100.0;

/// Refractive index at `altitude` with water vapour pressure `vapor_mbar`.
pub fn atmospheric_index_of_refraction(
    altitude: Length,
    vapor_mbar: f64,
    atmosphere: &dyn StandardAtmosphere,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    let e = ensure_non_negative(vapor_mbar, "vapour pressure must not be negative")?;
    let state = atmosphere.at(altitude)?;
    let t = state.temperature.value;
    let p = state.pressure.value / PA_PER_MBAR;
    let smith = constants.smith_atmospheric();

    let refractivity = smith.k1 / t * (p + smith.k2 * e / t);
    Ok(1.0 + refractivity * 1e-6)
}

/// Index of refraction over an altitude profile [m] at constant vapour
/// pressure.
pub fn atmospheric_index_profile(
    altitudes_m: &[f64],
    vapor_mbar: f64,
    atmosphere: &dyn StandardAtmosphere,
    constants: &dyn ConstantsProvider,
) -> AoResult<Vec<f64>> {
    tracing::debug!(points = altitudes_m.len(), vapor_mbar, "atmospheric index profile");
    map_batch(altitudes_m, |z| {
        atmospheric_index_of_refraction(m(z), vapor_mbar, atmosphere, constants)
    })
}
