//! Constants lookup errors.

use crate::molecule::Molecule;
use crate::provider::Table;
use ao_core::AoError;
use thiserror::Error;

/// Result type for constants lookups.
pub type ConstantsResult<T> = Result<T, ConstantsError>;

/// Errors that can occur while resolving tabulated data.
#[derive(Error, Debug)]
pub enum ConstantsError {
    /// Molecule is known but absent from the requested table.
    #[error("Molecule {molecule} is not in the {table} table")]
    UnsupportedMolecule { molecule: Molecule, table: Table },

    /// Name did not parse to any known molecule.
    #[error("Unknown molecule: {name}")]
    UnknownMolecule { name: String },

    #[error("Unknown constants table: {name}")]
    UnknownTable { name: String },

    /// Chemical formula references an element without an atomic weight.
    #[error("Unknown element '{symbol}' in formula")]
    UnknownElement { symbol: String },

    #[error("Invalid composition: {what}")]
    InvalidComposition { what: &'static str },

    #[error("Malformed chemical formula: {formula}")]
    MalformedFormula { formula: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConstantsError> for AoError {
    fn from(err: ConstantsError) -> Self {
        match err {
            ConstantsError::UnsupportedMolecule { molecule, table } => {
                AoError::UnsupportedMolecule {
                    molecule: molecule.key().to_string(),
                    table: table.name(),
                }
            }
            ConstantsError::UnknownMolecule { name } => AoError::UnsupportedMolecule {
                molecule: name,
                table: "molecule registry",
            },
            ConstantsError::UnknownElement { symbol } => AoError::UnsupportedMolecule {
                molecule: symbol,
                table: "atomic weights",
            },
            ConstantsError::UnknownTable { name } => AoError::MissingKey { key: name },
            ConstantsError::InvalidComposition { what } => AoError::InvalidArg { what },
            ConstantsError::MalformedFormula { .. } => AoError::InvalidArg {
                what: "malformed chemical formula",
            },
            ConstantsError::Io(_) | ConstantsError::Yaml(_) | ConstantsError::Json(_) => {
                AoError::InvalidArg {
                    what: "constants table could not be loaded",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConstantsError::UnsupportedMolecule {
            molecule: Molecule::H2,
            table: Table::Sutherland,
        };
        let msg = err.to_string();
        assert!(msg.contains("H2"));
        assert!(msg.contains("sutherland"));
    }

    #[test]
    fn error_to_ao_error() {
        let err: AoError = ConstantsError::UnsupportedMolecule {
            molecule: Molecule::Ar,
            table: Table::Kerl,
        }
        .into();
        assert_eq!(
            err,
            AoError::UnsupportedMolecule {
                molecule: "Ar".into(),
                table: "kerl"
            }
        );

        let err: AoError = ConstantsError::MalformedFormula {
            formula: "2N".into(),
        }
        .into();
        assert!(matches!(err, AoError::InvalidArg { .. }));
    }
}
