//! Molar masses from chemical formulas.
//!
//! Formulas are element symbols followed by optional counts, with an
//! optional trailing charge made of `+`/`-` signs (`"N2+"`, `"CO2"`,
//! `"O--"`). Each unit of positive charge removes one electron mass.

use crate::composition::Composition;
use crate::error::{ConstantsError, ConstantsResult};
use crate::molecule::Molecule;
use ao_core::units::constants::{AVOGADRO, ELECTRON_MOLAR_MASS};

/// Standard atomic weights [g/mol] (IUPAC conventional values).
fn atomic_weight(symbol: &str) -> Option<f64> {
    let w = match symbol {
        "H" => 1.00794,
        "He" => 4.002602,
        "C" => 12.0107,
        "N" => 14.0067,
        "O" => 15.9994,
        "F" => 18.998403,
        "Ne" => 20.1797,
        "S" => 32.065,
        "Cl" => 35.453,
        "Ar" => 39.948,
        "Kr" => 83.798,
        "Xe" => 131.293,
        _ => return None,
    };
    Some(w)
}

/// Molar mass of a formula [g/mol].
pub fn formula_mass(formula: &str) -> ConstantsResult<f64> {
    let malformed = || ConstantsError::MalformedFormula {
        formula: formula.to_string(),
    };

    let trimmed = formula.trim();
    let body = trimmed.trim_end_matches(['+', '-']);
    let charge_signs = &trimmed[body.len()..];
    let charge: i64 = charge_signs
        .chars()
        .map(|c| if c == '+' { 1 } else { -1 })
        .sum();

    let mut chars = body.chars().peekable();
    let mut total = 0.0;
    let mut atoms = 0usize;

    while let Some(c) = chars.next() {
        if !c.is_ascii_uppercase() {
            return Err(malformed());
        }
        let mut symbol = String::from(c);
        while let Some(&next) = chars.peek() {
            if next.is_ascii_lowercase() {
                symbol.push(next);
                chars.next();
            } else {
                break;
            }
        }

        let mut digits = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_digit() {
                digits.push(next);
                chars.next();
            } else {
                break;
            }
        }
        let count: u32 = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| malformed())?
        };
        if count == 0 {
            return Err(malformed());
        }

        let weight = atomic_weight(&symbol).ok_or(ConstantsError::UnknownElement { symbol })?;
        total += weight * count as f64;
        atoms += count as usize;
    }

    if atoms == 0 {
        return Err(malformed());
    }

    Ok(total - charge as f64 * ELECTRON_MOLAR_MASS)
}

impl Molecule {
    /// Molar mass [g/mol]. Air uses the standard dry composition.
    pub fn molar_mass(&self) -> ConstantsResult<f64> {
        match self.formula() {
            Some(formula) => formula_mass(formula),
            None => Composition::standard_air().molar_mass(),
        }
    }
}

/// Number density [1/m³] of a species from its mass density [kg/m³].
pub fn mass_density_to_number_density(
    mass_density: f64,
    molecule: Molecule,
) -> ConstantsResult<f64> {
    let molar_mass = molecule.molar_mass()?;
    Ok(mass_density * AVOGADRO / molar_mass * 1e3)
}
