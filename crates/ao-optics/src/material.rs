//! Dielectric properties and optical path lengths of a medium with index n.

use crate::refraction::{DiluteDense, RefractiveIndex};
use ao_core::batch::zip_batch;
use ao_core::units::constants::EPSILON_0;
use ao_core::{AoError, AoResult, ensure_non_negative};

fn check_index(n: f64) -> AoResult<f64> {
    if n.is_nan() || n < 1.0 {
        return Err(AoError::domain("refractive index must be at least 1", n));
    }
    Ok(n)
}

/// Relative permittivity ε_r = n² of a non-magnetic medium.
pub fn permittivity_material(n: f64) -> AoResult<f64> {
    let n = check_index(n)?;
    Ok(n * n)
}

/// Electric susceptibility χ = n² − 1.
pub fn electric_susceptibility(n: f64) -> AoResult<f64> {
    permittivity_material(n).map(|eps_r| eps_r - 1.0)
}

/// Absolute permittivity ε = ε₀ n² [F/m] for both formulations.
pub fn dielectric_material_const(n: &RefractiveIndex) -> AoResult<DiluteDense> {
    n.try_map(|n| permittivity_material(n).map(|eps_r| EPSILON_0 * eps_r))
}

fn optical_path(n: f64, distance: f64) -> AoResult<f64> {
    let n = check_index(n)?;
    let d = ensure_non_negative(distance, "distance must not be negative")?;
    Ok(n * d)
}

/// Optical path length n·d for both formulations, in the unit of `distance`.
pub fn optical_path_length(n: &RefractiveIndex, distance: f64) -> AoResult<DiluteDense> {
    n.try_map(|n| optical_path(n, distance))
}

/// Element-wise optical path lengths; `indices` and `distances` must have
/// the same length.
pub fn optical_path_lengths(indices: &[f64], distances: &[f64]) -> AoResult<Vec<f64>> {
    zip_batch(indices, distances, "optical path distances", optical_path)
}
