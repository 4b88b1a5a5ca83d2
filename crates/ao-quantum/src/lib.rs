//! ao-quantum: rovibrational structure of diatomic molecules.
//!
//! Evaluation order:
//! spectroscopic constants -> level energies -> Boltzmann factors ->
//! partition functions -> normalized population distributions.
//!
//! Energies are wavenumbers [cm⁻¹]; temperatures are in kelvin. Every
//! function takes the constants provider explicitly.
//!
//! # Example
//!
//! ```
//! use ao_constants::{BuiltinConstants, Molecule};
//! use ao_quantum::{EnergyModel, population_distribution};
//!
//! let dist = population_distribution(
//!     500.0,
//!     Molecule::N2,
//!     Some(3),
//!     Some(10),
//!     EnergyModel::Separable,
//!     &BuiltinConstants,
//! )
//! .unwrap();
//! assert!((dist.total() - 1.0).abs() < 1e-12);
//! ```

pub mod dunham;
pub mod levels;
pub mod partition;

pub use dunham::{DunhamCoefficients, potential_dunham_coef_012, potential_dunham_coeff_m, reduced_mass};
pub use levels::{
    EnergyModel, born_oppenheimer_energy, max_rotational_level, max_vibrational_level,
    quantum_number, rotational_energy_level, translational_energy, vibrational_energy_level,
    zero_point_energy,
};
pub use partition::{
    MAX_POPULATION_CELLS, PopulationDistribution, boltzmann_factor,
    born_oppenheimer_partition_function, population_distribution, rotational_partition_function,
    vibrational_partition_function,
};
