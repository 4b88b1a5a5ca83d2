//! Serializable constants table.
//!
//! A `ConstantsTable` holds the same rows as the built-in provider in plain
//! maps, so a table can be exported to YAML, edited and loaded back.

use crate::error::ConstantsResult;
use crate::molecule::Molecule;
use crate::provider::{ConstantsProvider, Table, unsupported};
use crate::records::{
    KerlConstants, PolarizabilityDerivatives, SmithConstants, SpectroscopicConstants,
    SutherlandConstants,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstantsTable {
    #[serde(default)]
    pub sutherland: BTreeMap<Molecule, SutherlandConstants>,
    #[serde(default)]
    pub spectroscopy: BTreeMap<Molecule, SpectroscopicConstants>,
    #[serde(default)]
    pub kerl: BTreeMap<Molecule, KerlConstants>,
    /// Static mean polarizability [cm³]
    #[serde(default)]
    pub polarizability: BTreeMap<Molecule, f64>,
    #[serde(default)]
    pub buldakov: BTreeMap<Molecule, PolarizabilityDerivatives>,
    #[serde(default)]
    pub smith: SmithConstants,
}

impl ConstantsTable {
    /// Snapshot every row another provider knows about.
    pub fn from_provider(provider: &dyn ConstantsProvider) -> Self {
        fn collect<T>(
            lookup: impl Fn(Molecule) -> ConstantsResult<T>,
        ) -> BTreeMap<Molecule, T> {
            Molecule::ALL
                .into_iter()
                .filter_map(|m| lookup(m).ok().map(|row| (m, row)))
                .collect()
        }

        Self {
            sutherland: collect(|m| provider.sutherland(m)),
            spectroscopy: collect(|m| provider.spectroscopy(m)),
            kerl: collect(|m| provider.kerl(m)),
            polarizability: collect(|m| provider.polarizability(m)),
            buldakov: collect(|m| provider.buldakov_derivatives(m)),
            smith: provider.smith_atmospheric(),
        }
    }

    pub fn from_yaml_str(content: &str) -> ConstantsResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> ConstantsResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load_yaml(path: &Path) -> ConstantsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            spectroscopy_rows = table.spectroscopy.len(),
            "loaded constants table"
        );
        Ok(table)
    }

    pub fn save_yaml(&self, path: &Path) -> ConstantsResult<()> {
        std::fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    pub fn to_yaml_string(&self) -> ConstantsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> ConstantsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn row<T: Copy>(
    rows: &BTreeMap<Molecule, T>,
    molecule: Molecule,
    table: Table,
) -> ConstantsResult<T> {
    rows.get(&molecule)
        .copied()
        .ok_or_else(|| unsupported(molecule, table))
}

impl ConstantsProvider for ConstantsTable {
    fn name(&self) -> &str {
        "table"
    }

    fn sutherland(&self, molecule: Molecule) -> ConstantsResult<SutherlandConstants> {
        row(&self.sutherland, molecule, Table::Sutherland)
    }

    fn spectroscopy(&self, molecule: Molecule) -> ConstantsResult<SpectroscopicConstants> {
        row(&self.spectroscopy, molecule, Table::Spectroscopy)
    }

    fn kerl(&self, molecule: Molecule) -> ConstantsResult<KerlConstants> {
        row(&self.kerl, molecule, Table::Kerl)
    }

    fn polarizability(&self, molecule: Molecule) -> ConstantsResult<f64> {
        row(&self.polarizability, molecule, Table::Polarizability)
    }

    fn polarizability_species(&self) -> Vec<Molecule> {
        self.polarizability.keys().copied().collect()
    }

    fn buldakov_derivatives(
        &self,
        molecule: Molecule,
    ) -> ConstantsResult<PolarizabilityDerivatives> {
        row(&self.buldakov, molecule, Table::BuldakovDerivatives)
    }

    fn smith_atmospheric(&self) -> SmithConstants {
        self.smith
    }
}
