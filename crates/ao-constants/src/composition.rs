//! Gas mixtures by mole fraction.

use crate::error::{ConstantsError, ConstantsResult};
use crate::molecule::Molecule;
use std::collections::BTreeMap;

/// Mixture of air species. Fractions always sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    fractions: BTreeMap<Molecule, f64>,
}

impl Composition {
    /// Dry air: 78 % N2, 21 % O2, 0.93 % Ar, 0.07 % CO2.
    pub fn standard_air() -> Self {
        Self {
            fractions: BTreeMap::from([
                (Molecule::N2, 0.78),
                (Molecule::O2, 0.21),
                (Molecule::Ar, 0.0093),
                (Molecule::CO2, 0.0007),
            ]),
        }
    }

    /// Normalize relative amounts into mole fractions.
    ///
    /// Repeated species are merged. `Air` is rejected since it is itself a
    /// mixture; list its constituents instead.
    pub fn from_mole_fractions(
        amounts: impl IntoIterator<Item = (Molecule, f64)>,
    ) -> ConstantsResult<Self> {
        let invalid = |what| ConstantsError::InvalidComposition { what };

        let mut fractions = BTreeMap::new();
        for (molecule, amount) in amounts {
            if molecule == Molecule::Air {
                return Err(invalid("air is a mixture, list its constituents"));
            }
            if !amount.is_finite() || amount < 0.0 {
                return Err(invalid("mole fractions must be finite and non-negative"));
            }
            *fractions.entry(molecule).or_insert(0.0) += amount;
        }

        let sum: f64 = fractions.values().sum();
        if !(sum > 0.0 && sum.is_finite()) {
            return Err(invalid("mole fractions must have a positive sum"));
        }
        fractions.retain(|_, x| *x > 0.0);
        fractions.values_mut().for_each(|x| *x /= sum);
        Ok(Self { fractions })
    }

    /// (species, mole fraction) in species order.
    pub fn fractions(&self) -> impl Iterator<Item = (Molecule, f64)> + '_ {
        self.fractions.iter().map(|(m, x)| (*m, *x))
    }

    /// Mixture molar mass [g/mol]: M = Σ x_i M_i.
    pub fn molar_mass(&self) -> ConstantsResult<f64> {
        self.fractions()
            .map(|(molecule, x)| molecule.molar_mass().map(|m| m * x))
            .sum()
    }
}
