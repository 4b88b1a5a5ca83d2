//! Molecule identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Species relevant to high-temperature air and the diatomic formulas.
///
/// Serialized by chemical key (`"N2+"`, `"Ar"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Molecule {
    /// Nitrogen (N₂)
    N2,
    /// Oxygen (O₂)
    O2,
    /// Nitric oxide (NO)
    NO,
    /// Nitrogen cation (N₂⁺)
    #[serde(rename = "N2+")]
    N2Plus,
    /// Oxygen cation (O₂⁺)
    #[serde(rename = "O2+")]
    O2Plus,
    /// Nitrosonium (NO⁺)
    #[serde(rename = "NO+")]
    NOPlus,
    /// Atomic nitrogen
    N,
    /// Atomic oxygen
    O,
    /// Atomic nitrogen cation
    #[serde(rename = "N+")]
    NPlus,
    /// Atomic oxygen cation
    #[serde(rename = "O+")]
    OPlus,
    /// Air (standard dry mixture)
    Air,
    /// Hydrogen (H₂)
    H2,
    /// Argon
    Ar,
    /// Carbon dioxide (CO₂)
    CO2,
}

impl Molecule {
    pub const ALL: [Molecule; 14] = [
        Molecule::N2,
        Molecule::O2,
        Molecule::NO,
        Molecule::N2Plus,
        Molecule::O2Plus,
        Molecule::NOPlus,
        Molecule::N,
        Molecule::O,
        Molecule::NPlus,
        Molecule::OPlus,
        Molecule::Air,
        Molecule::H2,
        Molecule::Ar,
        Molecule::CO2,
    ];

    /// Ten-species high-temperature air, ions first.
    pub const AIR_SPECIES: [Molecule; 10] = [
        Molecule::NPlus,
        Molecule::OPlus,
        Molecule::NOPlus,
        Molecule::N2Plus,
        Molecule::O2Plus,
        Molecule::N,
        Molecule::O,
        Molecule::NO,
        Molecule::N2,
        Molecule::O2,
    ];

    /// Canonical key; doubles as the chemical formula for everything but Air.
    pub fn key(&self) -> &'static str {
        match self {
            Molecule::N2 => "N2",
            Molecule::O2 => "O2",
            Molecule::NO => "NO",
            Molecule::N2Plus => "N2+",
            Molecule::O2Plus => "O2+",
            Molecule::NOPlus => "NO+",
            Molecule::N => "N",
            Molecule::O => "O",
            Molecule::NPlus => "N+",
            Molecule::OPlus => "O+",
            Molecule::Air => "Air",
            Molecule::H2 => "H2",
            Molecule::Ar => "Ar",
            Molecule::CO2 => "CO2",
        }
    }

    /// Chemical formula, `None` for mixtures.
    pub fn formula(&self) -> Option<&'static str> {
        match self {
            Molecule::Air => None,
            other => Some(other.key()),
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Molecule::N2 => "Nitrogen",
            Molecule::O2 => "Oxygen",
            Molecule::NO => "Nitric Oxide",
            Molecule::N2Plus => "Nitrogen Cation",
            Molecule::O2Plus => "Oxygen Cation",
            Molecule::NOPlus => "Nitrosonium",
            Molecule::N => "Atomic Nitrogen",
            Molecule::O => "Atomic Oxygen",
            Molecule::NPlus => "Atomic Nitrogen Cation",
            Molecule::OPlus => "Atomic Oxygen Cation",
            Molecule::Air => "Air",
            Molecule::H2 => "Hydrogen",
            Molecule::Ar => "Argon",
            Molecule::CO2 => "Carbon Dioxide",
        }
    }

    /// True for two-atom species (the ones with rovibrational structure).
    pub fn is_diatomic(&self) -> bool {
        matches!(
            self,
            Molecule::N2
                | Molecule::O2
                | Molecule::NO
                | Molecule::N2Plus
                | Molecule::O2Plus
                | Molecule::NOPlus
                | Molecule::H2
        )
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Molecule {
    type Err = crate::error::ConstantsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "N2" | "NITROGEN" => Ok(Molecule::N2),
            "O2" | "OXYGEN" => Ok(Molecule::O2),
            "NO" | "NITRIC OXIDE" | "NITRICOXIDE" => Ok(Molecule::NO),
            "N2+" => Ok(Molecule::N2Plus),
            "O2+" => Ok(Molecule::O2Plus),
            "NO+" | "NITROSONIUM" => Ok(Molecule::NOPlus),
            "N" => Ok(Molecule::N),
            "O" => Ok(Molecule::O),
            "N+" => Ok(Molecule::NPlus),
            "O+" => Ok(Molecule::OPlus),
            "AIR" => Ok(Molecule::Air),
            "H2" | "HYDROGEN" => Ok(Molecule::H2),
            "AR" | "ARGON" => Ok(Molecule::Ar),
            "CO2" | "CARBONDIOXIDE" | "CARBON DIOXIDE" => Ok(Molecule::CO2),
            _ => Err(crate::error::ConstantsError::UnknownMolecule {
                name: s.to_string(),
            }),
        }
    }
}
