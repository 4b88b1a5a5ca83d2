//! ao-constants: tabulated physical data for the aero-optics formulas.
//!
//! Provides:
//! - Molecule identifiers (N2, O2, NO, their cations, atoms, Air, H2, Ar, CO2)
//! - Typed constant records (Sutherland, spectroscopic, Kerl, Buldakov, Smith)
//! - The `ConstantsProvider` trait and its built-in literal implementation
//! - A serde-backed `ConstantsTable` that can be loaded from YAML or JSON
//! - Molar masses from chemical formulas, and gas compositions
//! - The 1976 standard atmosphere
//!
//! # Architecture
//!
//! Formula crates never read a global table. They take a
//! `&dyn ConstantsProvider` argument, so a test double or an edited table can
//! be substituted without touching formula code.
//!
//! # Example
//!
//! ```
//! use ao_constants::{BuiltinConstants, ConstantsProvider, Molecule};
//!
//! let constants = BuiltinConstants;
//! let n2 = constants.spectroscopy(Molecule::N2).unwrap();
//! assert!(n2.omega_e > 2000.0);
//! ```

pub mod atmosphere;
pub mod builtin;
pub mod composition;
pub mod error;
pub mod molar_mass;
pub mod molecule;
pub mod provider;
pub mod records;
pub mod table;

// Re-exports for ergonomics
pub use atmosphere::{AtmosphereState, Isa1976, StandardAtmosphere};
pub use builtin::BuiltinConstants;
pub use composition::Composition;
pub use error::{ConstantsError, ConstantsResult};
pub use molar_mass::{formula_mass, mass_density_to_number_density};
pub use molecule::Molecule;
pub use provider::{ConstantsProvider, Table};
pub use records::{
    KerlConstants, PolarizabilityDerivatives, SmithConstants, SpectroscopicConstants,
    SutherlandConstants,
};
pub use table::ConstantsTable;
