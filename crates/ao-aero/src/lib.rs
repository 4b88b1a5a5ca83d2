//! ao-aero: closed-form gas dynamics.
//!
//! Provides:
//! - Sutherland's law for viscosity and thermal conductivity
//! - Speed of sound in standard air or a given mixture
//! - Normal and oblique shock relations (weak branch)
//! - Isentropic stagnation ratios
//!
//! Ratios are always downstream over upstream (or stagnation over static).

pub mod gas;
pub mod isentropic;
pub mod shock;
pub mod transport;

pub use gas::{
    DEFAULT_GAMMA, air_molar_masses, speed_of_sound, speed_of_sound_batch, speed_of_sound_in,
};
pub use isentropic::{IsentropicRatios, isentropic_relations};
pub use shock::{
    NormalShock, ObliqueShock, mach_angle_deg, max_weak_shock_angle_deg, normal_shock_relations,
    oblique_shock_relations,
};
pub use transport::{
    sutherland_conductivity, sutherland_conductivity_batch, sutherland_viscosity,
    sutherland_viscosity_batch,
};
