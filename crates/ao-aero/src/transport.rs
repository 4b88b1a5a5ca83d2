//! Sutherland's law transport properties.

use ao_constants::{ConstantsProvider, Molecule, SutherlandConstants};
use ao_core::units::{DynVisc, Temperature, ThermalCond, k, pa_s, w_per_m_k};
use ao_core::{AoResult, ensure_positive, map_batch};

fn lookup(
    temperature: Temperature,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<(f64, SutherlandConstants)> {
    let t = ensure_positive(temperature.value, "temperature must be positive")?;
    let c = constants.sutherland(molecule)?;
    Ok((t, c))
}

/// Dynamic viscosity from Sutherland's law.
///
/// μ = μ_ref · (T_ref + S) / (T + S) · (T / T_ref)^1.5
///
/// Supported molecules: Air, Ar, N2, O2.
pub fn sutherland_viscosity(
    temperature: Temperature,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<DynVisc> {
    let (t, c) = lookup(temperature, molecule, constants)?;
    let s = c.sutherland_visc;
    let mu = c.viscosity_ref * (c.temperature_ref + s) / (t + s)
        * (t / c.temperature_ref).powf(1.5);
    Ok(pa_s(mu))
}

/// Thermal conductivity from Sutherland's law.
///
/// κ = κ_ref · [(T_ref + S_κ) / (T + S_κ) · (T / T_ref)]^1.5
pub fn sutherland_conductivity(
    temperature: Temperature,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<ThermalCond> {
    let (t, c) = lookup(temperature, molecule, constants)?;
    let s = c.sutherland_cond;
    let ratio = (c.temperature_ref + s) / (t + s) * (t / c.temperature_ref);
    Ok(w_per_m_k(c.conductivity_ref * ratio.powf(1.5)))
}

/// Viscosity [Pa·s] over an array of temperatures [K].
pub fn sutherland_viscosity_batch(
    temperatures_k: &[f64],
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<Vec<f64>> {
    map_batch(temperatures_k, |t| {
        sutherland_viscosity(k(t), molecule, constants).map(|mu| mu.value)
    })
}

/// Conductivity [W/(m·K)] over an array of temperatures [K].
pub fn sutherland_conductivity_batch(
    temperatures_k: &[f64],
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<Vec<f64>> {
    map_batch(temperatures_k, |t| {
        sutherland_conductivity(k(t), molecule, constants).map(|kappa| kappa.value)
    })
}
