//! Constants provider trait.

use crate::error::{ConstantsError, ConstantsResult};
use crate::molecule::Molecule;
use crate::records::{
    KerlConstants, PolarizabilityDerivatives, SmithConstants, SpectroscopicConstants,
    SutherlandConstants,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-molecule tables a provider can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Sutherland,
    Spectroscopy,
    Kerl,
    Polarizability,
    #[serde(rename = "buldakov")]
    BuldakovDerivatives,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Sutherland,
        Table::Spectroscopy,
        Table::Kerl,
        Table::Polarizability,
        Table::BuldakovDerivatives,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::Sutherland => "sutherland",
            Table::Spectroscopy => "spectroscopy",
            Table::Kerl => "kerl",
            Table::Polarizability => "polarizability",
            Table::BuldakovDerivatives => "buldakov",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Table {
    type Err = ConstantsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Table::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or(ConstantsError::UnknownTable { name: s.to_string() })
    }
}

/// Source of tabulated physical constants.
///
/// Implementations must be thread-safe (Send + Sync) so formulas can be
/// evaluated in parallel against one shared provider. Every lookup fails with
/// `ConstantsError::UnsupportedMolecule` when the molecule is absent from the
/// requested table.
pub trait ConstantsProvider: Send + Sync {
    /// Provider name (for debugging/logging).
    fn name(&self) -> &str;

    fn sutherland(&self, molecule: Molecule) -> ConstantsResult<SutherlandConstants>;

    fn spectroscopy(&self, molecule: Molecule) -> ConstantsResult<SpectroscopicConstants>;

    fn kerl(&self, molecule: Molecule) -> ConstantsResult<KerlConstants>;

    /// Static mean polarizability [cm³].
    fn polarizability(&self, molecule: Molecule) -> ConstantsResult<f64>;

    /// Species with a static polarizability entry, in table order.
    fn polarizability_species(&self) -> Vec<Molecule>;

    fn buldakov_derivatives(&self, molecule: Molecule)
    -> ConstantsResult<PolarizabilityDerivatives>;

    fn smith_atmospheric(&self) -> SmithConstants;

    /// String-keyed view of one table row.
    fn get_constants(
        &self,
        molecule: Molecule,
        table: Table,
    ) -> ConstantsResult<BTreeMap<&'static str, f64>> {
        tracing::trace!(provider = self.name(), %molecule, %table, "constants lookup");
        match table {
            Table::Sutherland => self.sutherland(molecule).map(|c| c.as_map()),
            Table::Spectroscopy => self.spectroscopy(molecule).map(|c| c.as_map()),
            Table::Kerl => self.kerl(molecule).map(|c| c.as_map()),
            Table::Polarizability => self
                .polarizability(molecule)
                .map(|a| BTreeMap::from([("polarizability", a)])),
            Table::BuldakovDerivatives => self.buldakov_derivatives(molecule).map(|c| c.as_map()),
        }
    }

    /// Check membership without materializing the record.
    fn supports(&self, molecule: Molecule, table: Table) -> bool {
        self.get_constants(molecule, table).is_ok()
    }
}

/// Shorthand for the error every provider returns on a missing row.
pub(crate) fn unsupported(molecule: Molecule, table: Table) -> ConstantsError {
    ConstantsError::UnsupportedMolecule { molecule, table }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_roundtrip() {
        for table in Table::ALL {
            assert_eq!(table.name().parse::<Table>().unwrap(), table);
        }
        assert!("viscosity".parse::<Table>().is_err());
    }

    #[test]
    fn table_serializes_by_name() {
        let json = serde_json::to_string(&Table::BuldakovDerivatives).unwrap();
        assert_eq!(json, "\"buldakov\"");
        let json = serde_json::to_string(&Table::Kerl).unwrap();
        assert_eq!(json, "\"kerl\"");
    }
}
