use thiserror::Error;

pub type AoResult<T> = Result<T, AoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AoError {
    /// Input outside the physically valid range.
    #[error("Domain error: {what} (value={value})")]
    Domain { what: &'static str, value: f64 },

    /// Molecule or species not present in the table a formula needs.
    #[error("Unsupported molecule '{molecule}' for {table}")]
    UnsupportedMolecule {
        molecule: String,
        table: &'static str,
    },

    #[error("Missing key: {key}")]
    MissingKey { key: String },

    #[error("Shape mismatch for {what} (expected={expected}, found={found})")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Not implemented: {what}")]
    NotImplemented { what: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl AoError {
    pub fn domain(what: &'static str, value: f64) -> Self {
        AoError::Domain { what, value }
    }

    /// True for the errors a caller can fix by changing numeric input.
    pub fn is_domain(&self) -> bool {
        matches!(self, AoError::Domain { .. } | AoError::NonFinite { .. })
    }
}
