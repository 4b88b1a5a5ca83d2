//! ao-core: stable foundation for the aero-optics workspace.
//!
//! Contains:
//! - error (shared error taxonomy)
//! - numeric (Real + tolerances + float guards)
//! - units (uom SI types, constructors, physical constants)
//! - conversions (wavenumber, molar mass and polarizability conversions)
//! - batch (element-wise evaluation of scalar formulas)

pub mod batch;
pub mod conversions;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use batch::map_batch;
pub use error::{AoError, AoResult};
pub use numeric::*;
pub use units::*;
