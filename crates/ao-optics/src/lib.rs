//! ao-optics: refractive index and polarizability of air species.
//!
//! Provides:
//! - Kerl temperature/frequency polarizability and the Buldakov level expansion
//! - Dilute and dense Lorentz-Lorenz refractive index of single gases and mixtures
//! - Gladstone-Dale constants
//! - Smith-Weintraub refractivity of the standard atmosphere
//! - Permittivity, susceptibility and optical path length of a medium
//!
//! # Example
//!
//! ```
//! use ao_constants::{BuiltinConstants, Molecule};
//! use ao_optics::{DEFAULT_WAVELENGTH_NM, index_of_refraction_density_temperature};
//!
//! let n = index_of_refraction_density_temperature(
//!     288.15,
//!     1.225,
//!     Molecule::Air,
//!     DEFAULT_WAVELENGTH_NM,
//!     &BuiltinConstants,
//! )
//! .unwrap();
//! assert!(n.dilute > 1.0 && n.dilute < 1.001);
//! ```

pub mod atmospheric;
pub mod material;
pub mod polarizability;
pub mod refraction;

pub use atmospheric::{atmospheric_index_of_refraction, atmospheric_index_profile};
pub use material::{
    dielectric_material_const, electric_susceptibility, optical_path_length,
    optical_path_lengths, permittivity_material,
};
pub use polarizability::{
    BuldakovTerms, DEFAULT_WAVELENGTH_NM, buldakov_expansion, buldakov_terms,
    kerl_polarizability_temperature, tropina_approximation,
};
pub use refraction::{
    DiluteDense, GladstoneDale, RefractiveIndex, gladstone_dale_constant, index_of_refraction,
    index_of_refraction_density_temperature,
};
