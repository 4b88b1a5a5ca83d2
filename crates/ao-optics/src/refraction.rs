//! Refractive index of gas mixtures from molecular polarizability.
//!
//! With N the number density and α the SI polarizability [F·m²], the
//! Lorentz-Lorenz relation gives
//!
//! - dilute: n = 1 + Nα / (2ε₀)
//! - dense:  n = √((2x + 1) / (1 − x)),  x = Nα / (3ε₀)
//!
//! The dilute form is the first-order expansion of the dense one.

use crate::polarizability::kerl_polarizability_temperature;
use ao_constants::{ConstantsProvider, Molecule, mass_density_to_number_density};
use ao_core::conversions::polarizability_cgs_to_si;
use ao_core::units::constants::{AVOGADRO, EPSILON_0};
use ao_core::{AoError, AoResult, ensure_non_negative, ensure_positive};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A quantity evaluated with both Lorentz-Lorenz formulations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiluteDense {
    pub dilute: f64,
    pub dense: f64,
}

pub type RefractiveIndex = DiluteDense;

impl DiluteDense {
    /// Apply `f` to both formulations.
    pub fn try_map<F>(&self, f: F) -> AoResult<DiluteDense>
    where
        F: Fn(f64) -> AoResult<f64>,
    {
        Ok(DiluteDense {
            dilute: f(self.dilute)?,
            dense: f(self.dense)?,
        })
    }
}

/// Both formulations from the polarization density Σ N_i α_i [F/m].
fn lorentz_lorenz(polarization: f64) -> AoResult<RefractiveIndex> {
    let x = polarization / (3.0 * EPSILON_0);
    if x >= 1.0 {
        return Err(AoError::domain(
            "dense Lorentz-Lorenz formulation diverges at this density",
            x,
        ));
    }
    Ok(RefractiveIndex {
        dilute: 1.0 + polarization / (2.0 * EPSILON_0),
        dense: ((2.0 * x + 1.0) / (1.0 - x)).sqrt(),
    })
}

/// Refractive index of a single gas from its mass density and temperature.
///
/// The polarizability comes from the Kerl model for `molecule`, so the
/// supported set is {Air, H2, N2, O2}. Air uses the standard dry composition
/// for its molar mass.
pub fn index_of_refraction_density_temperature(
    temperature_k: f64,
    mass_density: f64,
    molecule: Molecule,
    wavelength_nm: f64,
    constants: &dyn ConstantsProvider,
) -> AoResult<RefractiveIndex> {
    let t = ensure_positive(temperature_k, "temperature must be positive")?;
    let rho = ensure_non_negative(mass_density, "mass density must not be negative")?;

    let alpha_m3 = kerl_polarizability_temperature(t, molecule, wavelength_nm, constants)?;
    let alpha_si = polarizability_cgs_to_si(alpha_m3 * 1e6);
    let number_density = mass_density_to_number_density(rho, molecule)?;

    lorentz_lorenz(number_density * alpha_si)
}

fn check_densities(
    mass_density: &BTreeMap<Molecule, f64>,
    constants: &dyn ConstantsProvider,
) -> AoResult<()> {
    if mass_density.is_empty() {
        return Err(AoError::InvalidArg {
            what: "species mass densities must not be empty",
        });
    }
    let species = constants.polarizability_species();
    for (&molecule, &rho) in mass_density {
        if !species.contains(&molecule) {
            return Err(AoError::UnsupportedMolecule {
                molecule: molecule.to_string(),
                table: "polarizability",
            });
        }
        ensure_non_negative(rho, "mass density must not be negative")?;
    }
    Ok(())
}

/// Refractive index of a mixture from per-species mass densities [kg/m³].
///
/// Every key must carry a tabulated static polarizability (the ten-species
/// air set of the built-in table).
pub fn index_of_refraction(
    mass_density: &BTreeMap<Molecule, f64>,
    constants: &dyn ConstantsProvider,
) -> AoResult<RefractiveIndex> {
    check_densities(mass_density, constants)?;

    let mut polarization = 0.0;
    for (&molecule, &rho) in mass_density {
        let alpha = polarizability_cgs_to_si(constants.polarizability(molecule)?);
        polarization += alpha * mass_density_to_number_density(rho, molecule)?;
    }
    tracing::trace!(species = mass_density.len(), polarization, "mixture polarization");
    lorentz_lorenz(polarization)
}

/// Gladstone-Dale constants [m³/kg].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GladstoneDale {
    /// K_i for every species with a tabulated polarizability.
    pub species: BTreeMap<Molecule, f64>,
    /// Mass-fraction weighted Σ K_i ρ_i / ρ, when densities were given.
    pub total: Option<f64>,
}

/// Per-species Gladstone-Dale constants K_i = α_i N_A / (2ε₀ M_i), and the
/// mixture constant when `mass_density` is given.
///
/// n − 1 = K ρ reproduces the dilute index of [`index_of_refraction`].
pub fn gladstone_dale_constant(
    mass_density: Option<&BTreeMap<Molecule, f64>>,
    constants: &dyn ConstantsProvider,
) -> AoResult<GladstoneDale> {
    let mut species = BTreeMap::new();
    for molecule in constants.polarizability_species() {
        let alpha = polarizability_cgs_to_si(constants.polarizability(molecule)?);
        let molar_mass = molecule.molar_mass()?;
        // molar mass in g/mol, so 1e3 brings K to m³/kg
        species.insert(molecule, alpha * AVOGADRO / molar_mass / (2.0 * EPSILON_0) * 1e3);
    }

    let total = match mass_density {
        None => None,
        Some(densities) => {
            check_densities(densities, constants)?;
            let rho: f64 = densities.values().sum();
            if rho <= 0.0 {
                return Err(AoError::domain("total mass density must be positive", rho));
            }
            let weighted = densities
                .iter()
                .map(|(m, &rho_i)| species.get(m).copied().unwrap_or(0.0) * rho_i)
                .sum::<f64>();
            Some(weighted / rho)
        }
    };

    Ok(GladstoneDale { species, total })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ao_constants::BuiltinConstants;

    const C: BuiltinConstants = BuiltinConstants;

    #[test]
    fn sea_level_air_at_633nm() {
        let n = index_of_refraction_density_temperature(288.15, 1.225, Molecule::Air, 633.0, &C)
            .unwrap();
        assert!((n.dilute - 1.000_276_6).abs() < 2e-7, "n = {n:?}");
        assert!((n.dense - n.dilute).abs() < 1e-7);
        assert!(n.dense > 1.0);
    }

    #[test]
    fn vacuum_has_unit_index() {
        let n = index_of_refraction_density_temperature(300.0, 0.0, Molecule::N2, 633.0, &C)
            .unwrap();
        assert_eq!(n, RefractiveIndex { dilute: 1.0, dense: 1.0 });
    }

    #[test]
    fn single_gas_rejects_invalid_input() {
        let f = |t, rho, m, l| index_of_refraction_density_temperature(t, rho, m, l, &C);
        assert!(f(0.0, 1.0, Molecule::Air, 633.0).unwrap_err().is_domain());
        assert!(f(300.0, -1.0, Molecule::Air, 633.0).unwrap_err().is_domain());
        assert!(f(300.0, 1.0, Molecule::Air, -5.0).unwrap_err().is_domain());
        assert!(matches!(
            f(300.0, 1.0, Molecule::Ar, 633.0),
            Err(AoError::UnsupportedMolecule { .. })
        ));
    }

    #[test]
    fn mixture_is_linear_in_dilute_limit() {
        let one = BTreeMap::from([(Molecule::N2, 0.5)]);
        let two = BTreeMap::from([(Molecule::N2, 1.0)]);
        let n1 = index_of_refraction(&one, &C).unwrap();
        let n2 = index_of_refraction(&two, &C).unwrap();
        assert!(((n2.dilute - 1.0) - 2.0 * (n1.dilute - 1.0)).abs() < 1e-15);
    }

    #[test]
    fn mixture_rejects_bad_keys_and_values() {
        let empty = BTreeMap::new();
        assert!(matches!(
            index_of_refraction(&empty, &C),
            Err(AoError::InvalidArg { .. })
        ));

        let h2 = BTreeMap::from([(Molecule::N2, 1.0), (Molecule::H2, 0.1)]);
        assert!(matches!(
            index_of_refraction(&h2, &C),
            Err(AoError::UnsupportedMolecule { table: "polarizability", .. })
        ));

        let negative = BTreeMap::from([(Molecule::O, -0.1)]);
        assert!(index_of_refraction(&negative, &C).unwrap_err().is_domain());
    }

    #[test]
    fn dense_formulation_diverges() {
        assert!(lorentz_lorenz(3.0 * EPSILON_0).unwrap_err().is_domain());
        assert!(lorentz_lorenz(2.0 * EPSILON_0).is_ok());
    }

    #[test]
    fn nitrogen_gladstone_dale() {
        let gd = gladstone_dale_constant(None, &C).unwrap();
        assert_eq!(gd.species.len(), 10);
        assert_eq!(gd.total, None);
        let k = gd.species[&Molecule::N2];
        assert!((k - 2.3507e-4).abs() < 1e-7, "K_N2 = {k:e}");
    }

    #[test]
    fn gladstone_dale_total_is_mass_weighted() {
        let rho = BTreeMap::from([(Molecule::N2, 0.75), (Molecule::O2, 0.25)]);
        let gd = gladstone_dale_constant(Some(&rho), &C).unwrap();
        let expected = 0.75 * gd.species[&Molecule::N2] + 0.25 * gd.species[&Molecule::O2];
        assert!((gd.total.unwrap() - expected).abs() < 1e-18);

        let zero = BTreeMap::from([(Molecule::N2, 0.0)]);
        assert!(gladstone_dale_constant(Some(&zero), &C).unwrap_err().is_domain());
    }

    #[test]
    fn try_map_short_circuits() {
        let n = RefractiveIndex { dilute: 1.1, dense: 1.2 };
        let doubled = n.try_map(|x| Ok(2.0 * x)).unwrap();
        assert_eq!(doubled.dense, 2.4);
        assert!(n.try_map(|x| ensure_positive(x - 1.15, "x")).is_err());
    }
}
