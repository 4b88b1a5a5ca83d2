//! Literal constants table compiled into the library.
//!
//! Sources:
//! - Sutherland: White, Viscous Fluid Flow, tables 1-2 and 1-3
//! - Spectroscopy: NIST Chemistry WebBook / Huber & Herzberg
//! - Kerl: Kerl & Hausler, Ber. Bunsenges. Phys. Chem. 96 (1992)
//! - Static polarizability: CRC Handbook and Tropina et al.
//! - Polarizability derivatives: Buldakov et al. (2016)
//! - Refractivity: Smith & Weintraub (1953)

use crate::error::ConstantsResult;
use crate::molecule::Molecule;
use crate::provider::{ConstantsProvider, Table, unsupported};
use crate::records::{
    KerlConstants, PolarizabilityDerivatives, SmithConstants, SpectroscopicConstants,
    SutherlandConstants,
};
use crate::table::ConstantsTable;

/// Built-in provider backed by literal values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinConstants;

const fn sutherland(
    viscosity_ref: f64,
    sutherland_visc: f64,
    conductivity_ref: f64,
    sutherland_cond: f64,
) -> SutherlandConstants {
    SutherlandConstants {
        temperature_ref: 273.0,
        viscosity_ref,
        sutherland_visc,
        conductivity_ref,
        sutherland_cond,
    }
}

#[allow(clippy::too_many_arguments)]
const fn spectro(
    omega_e: f64,
    omega_xe: f64,
    omega_ye: f64,
    b_e: f64,
    alpha_e: f64,
    d_e: f64,
    r_e: f64,
) -> SpectroscopicConstants {
    SpectroscopicConstants {
        omega_e,
        omega_xe,
        omega_ye,
        b_e,
        alpha_e,
        d_e,
        r_e,
    }
}

impl BuiltinConstants {
    /// Export every row into an editable, serializable table.
    pub fn to_table(&self) -> ConstantsTable {
        ConstantsTable::from_provider(self)
    }
}

impl ConstantsProvider for BuiltinConstants {
    fn name(&self) -> &str {
        "builtin"
    }

    fn sutherland(&self, molecule: Molecule) -> ConstantsResult<SutherlandConstants> {
        match molecule {
            Molecule::Air => Ok(sutherland(1.716e-5, 111.0, 0.0241, 194.0)),
            Molecule::Ar => Ok(sutherland(2.125e-5, 114.0, 0.0163, 170.0)),
            Molecule::N2 => Ok(sutherland(1.663e-5, 107.0, 0.0242, 150.0)),
            Molecule::O2 => Ok(sutherland(1.919e-5, 139.0, 0.0244, 240.0)),
            other => Err(unsupported(other, Table::Sutherland)),
        }
    }

    fn spectroscopy(&self, molecule: Molecule) -> ConstantsResult<SpectroscopicConstants> {
        match molecule {
            Molecule::N2 => Ok(spectro(
                2358.57, 14.324, -0.00226, 1.99824, 0.017318, 5.76e-6, 1.09768,
            )),
            Molecule::O2 => Ok(spectro(
                1580.193, 11.981, 0.04747, 1.4376766, 0.01593, 4.839e-6, 1.20752,
            )),
            Molecule::NO => Ok(spectro(
                1904.204, 14.075, 0.0, 1.67195, 0.0171, 0.54e-6, 1.15077,
            )),
            Molecule::N2Plus => Ok(spectro(
                2207.00, 16.10, -0.040, 1.93176, 0.01881, 6.1e-6, 1.11642,
            )),
            Molecule::O2Plus => Ok(spectro(
                1904.7, 16.25, 0.0, 1.6913, 0.0198, 5.35e-6, 1.1164,
            )),
            Molecule::NOPlus => Ok(spectro(
                2376.72, 16.255, -0.01562, 1.99727, 0.018937, 5.64e-6, 1.06322,
            )),
            Molecule::H2 => Ok(spectro(
                4401.21, 121.33, 0.8129, 60.853, 3.062, 0.0471, 0.74144,
            )),
            other => Err(unsupported(other, Table::Spectroscopy)),
        }
    }

    fn kerl(&self, molecule: Molecule) -> ConstantsResult<KerlConstants> {
        let (ground_polarizability, ground_frequency, b, c) = match molecule {
            Molecule::H2 => (0.80320e-30, 2.1399e16, 5.87e-6, 7.544e-9),
            Molecule::N2 => (1.7406e-30, 2.6049e16, 1.8e-6, 0.0),
            Molecule::O2 => (1.5658e-30, 2.1801e16, -2.369e-6, 8.687e-9),
            Molecule::Air => (1.6970e-30, 2.47044e16, 10.6e-6, 7.909e-9),
            other => return Err(unsupported(other, Table::Kerl)),
        };
        Ok(KerlConstants {
            ground_polarizability,
            ground_frequency,
            b,
            c,
        })
    }

    fn polarizability(&self, molecule: Molecule) -> ConstantsResult<f64> {
        let cm3 = match molecule {
            Molecule::NPlus => 0.559,
            Molecule::OPlus => 0.345,
            Molecule::NOPlus => 1.021,
            Molecule::N2Plus => 2.386,
            Molecule::O2Plus => 0.238,
            Molecule::NO => 1.70,
            Molecule::N2 => 1.7403,
            Molecule::O2 => 1.5689,
            Molecule::N => 1.1,
            Molecule::O => 0.802,
            other => return Err(unsupported(other, Table::Polarizability)),
        };
        Ok(cm3 * 1e-24)
    }

    fn polarizability_species(&self) -> Vec<Molecule> {
        Molecule::AIR_SPECIES.to_vec()
    }

    fn buldakov_derivatives(
        &self,
        molecule: Molecule,
    ) -> ConstantsResult<PolarizabilityDerivatives> {
        let (zeroth, first, second, third) = match molecule {
            Molecule::H2 => (6.387, 5.795, 1.753, -2.493),
            Molecule::N2 => (11.743, 12.762, 5.187, -3.026),
            Molecule::O2 => (10.543, 9.961, 3.572, -3.553),
            other => return Err(unsupported(other, Table::BuldakovDerivatives)),
        };
        Ok(PolarizabilityDerivatives {
            zeroth,
            first,
            second,
            third,
        })
    }

    fn smith_atmospheric(&self) -> SmithConstants {
        SmithConstants::default()
    }
}
