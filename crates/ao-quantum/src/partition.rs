//! Boltzmann factors, partition functions and population distributions.
//!
//! Level energies enter the Boltzmann factor relative to the ground level of
//! the chosen energy model, so the ground-state term is exactly 1 and
//! `vibrational_partition_function(0, ..) == 1.0`. The reference shift
//! cancels in every normalized distribution.

use crate::levels::{
    EnergyModel, bo_energy, last_bound_rotational, last_bound_vibrational, rot_energy, vib_energy,
};
use ao_constants::{ConstantsProvider, Molecule, SpectroscopicConstants};
use ao_core::conversions::wavenumber_to_joules;
use ao_core::units::constants::BOLTZMANN;
use ao_core::{AoError, AoResult, ensure_positive};
use nalgebra::{DMatrix, DVector};

/// Spectroscopic constants bound to one temperature.
struct Thermal {
    c: SpectroscopicConstants,
    beta: f64,
}

impl Thermal {
    fn new(
        temperature_k: f64,
        molecule: Molecule,
        constants: &dyn ConstantsProvider,
    ) -> AoResult<Self> {
        let t = ensure_positive(temperature_k, "temperature must be positive")?;
        let c = constants.spectroscopy(molecule)?;
        Ok(Self {
            c,
            beta: 1.0 / (BOLTZMANN * t),
        })
    }

    fn weight(&self, degeneracy: f64, delta_wavenumber: f64) -> f64 {
        degeneracy * (-wavenumber_to_joules(delta_wavenumber) * self.beta).exp()
    }

    fn separable(&self, v: Option<u32>, j: Option<u32>) -> f64 {
        let mut delta = 0.0;
        let mut g = 1.0;
        if let Some(v) = v {
            delta += vib_energy(&self.c, v) - vib_energy(&self.c, 0);
        }
        if let Some(j) = j {
            delta += rot_energy(&self.c, j);
            g = 2.0 * j as f64 + 1.0;
        }
        self.weight(g, delta)
    }

    /// Born-Oppenheimer energies turn over past the last bound level.
    fn check_bound(&self, v_max: u32, j_max: u32) -> AoResult<()> {
        if v_max > last_bound_vibrational(&self.c) {
            return Err(AoError::domain(
                "vibrational number beyond the last bound level",
                v_max as f64,
            ));
        }
        if j_max > last_bound_rotational(&self.c) {
            return Err(AoError::domain(
                "rotational number beyond the centrifugal limit",
                j_max as f64,
            ));
        }
        Ok(())
    }

    fn born_oppenheimer(&self, v: u32, j: u32) -> f64 {
        let delta = bo_energy(&self.c, v, j) - bo_energy(&self.c, 0, 0);
        self.weight(2.0 * j as f64 + 1.0, delta)
    }
}

/// Largest number of cells a population distribution may allocate.
pub const MAX_POPULATION_CELLS: u64 = 1 << 22;

fn check_grid(v_max: Option<u32>, j_max: Option<u32>) -> AoResult<()> {
    let len = |n: Option<u32>| n.map_or(1, |n| u64::from(n) + 1);
    let cells = len(v_max) * len(j_max);
    if cells > MAX_POPULATION_CELLS {
        return Err(AoError::domain(
            "population grid exceeds the cell limit",
            cells as f64,
        ));
    }
    Ok(())
}

fn both(v: Option<u32>, j: Option<u32>) -> AoResult<(u32, u32)> {
    match (v, j) {
        (Some(v), Some(j)) => Ok((v, j)),
        _ => Err(AoError::InvalidArg {
            what: "Born-Oppenheimer levels need both vibrational and rotational numbers",
        }),
    }
}

/// g · exp(−ΔE / k_B T) for one level.
///
/// `g` is the rotational degeneracy 2j + 1 when `j` is given, 1 otherwise.
/// With `EnergyModel::Separable` the vibrational and rotational energies of
/// whichever quantum numbers are given are summed; with
/// `EnergyModel::BornOppenheimer` both numbers are required.
pub fn boltzmann_factor(
    temperature_k: f64,
    molecule: Molecule,
    v: Option<u32>,
    j: Option<u32>,
    model: EnergyModel,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    let thermal = Thermal::new(temperature_k, molecule, constants)?;
    match model {
        EnergyModel::Separable => Ok(thermal.separable(v, j)),
        EnergyModel::BornOppenheimer => {
            let (v, j) = both(v, j)?;
            thermal.check_bound(v, j)?;
            Ok(thermal.born_oppenheimer(v, j))
        }
    }
}

/// Σ over v = 0..=v_max of the vibrational Boltzmann factors.
pub fn vibrational_partition_function(
    v_max: u32,
    temperature_k: f64,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    let thermal = Thermal::new(temperature_k, molecule, constants)?;
    let z = (0..=v_max).map(|v| thermal.separable(Some(v), None)).sum();
    tracing::debug!(%molecule, temperature_k, v_max, z, "vibrational partition function");
    Ok(z)
}

/// Σ over j = 0..=j_max of the rotational Boltzmann factors.
pub fn rotational_partition_function(
    j_max: u32,
    temperature_k: f64,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    let thermal = Thermal::new(temperature_k, molecule, constants)?;
    let z = (0..=j_max).map(|j| thermal.separable(None, Some(j))).sum();
    tracing::debug!(%molecule, temperature_k, j_max, z, "rotational partition function");
    Ok(z)
}

/// Double sum over the (v, j) grid with Born-Oppenheimer level energies.
pub fn born_oppenheimer_partition_function(
    v_max: u32,
    j_max: u32,
    temperature_k: f64,
    molecule: Molecule,
    constants: &dyn ConstantsProvider,
) -> AoResult<f64> {
    let thermal = Thermal::new(temperature_k, molecule, constants)?;
    thermal.check_bound(v_max, j_max)?;
    let mut z = 0.0;
    for v in 0..=v_max {
        for j in 0..=j_max {
            z += thermal.born_oppenheimer(v, j);
        }
    }
    tracing::debug!(%molecule, temperature_k, v_max, j_max, z, "Born-Oppenheimer partition function");
    Ok(z)
}

/// Normalized level populations.
#[derive(Debug, Clone, PartialEq)]
pub enum PopulationDistribution {
    /// Indexed by v, length v_max + 1.
    Vibrational(DVector<f64>),
    /// Indexed by j, length j_max + 1.
    Rotational(DVector<f64>),
    /// Indexed by (v, j), shape (v_max + 1, j_max + 1).
    Rovibrational(DMatrix<f64>),
}

impl PopulationDistribution {
    /// (rows, columns); 1-D distributions are a single column.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::Vibrational(p) | Self::Rotational(p) => (p.len(), 1),
            Self::Rovibrational(p) => p.shape(),
        }
    }

    /// Sum over every cell; 1 up to rounding.
    pub fn total(&self) -> f64 {
        match self {
            Self::Vibrational(p) | Self::Rotational(p) => p.sum(),
            Self::Rovibrational(p) => p.sum(),
        }
    }

    /// Population of level (v, j); `None` for an index the grid does not carry.
    pub fn get(&self, v: Option<usize>, j: Option<usize>) -> Option<f64> {
        match (self, v, j) {
            (Self::Vibrational(p), Some(v), None) => p.get(v).copied(),
            (Self::Rotational(p), None, Some(j)) => p.get(j).copied(),
            (Self::Rovibrational(p), Some(v), Some(j)) => p.get((v, j)).copied(),
            _ => None,
        }
    }
}

/// Boltzmann populations normalized by the matching partition function.
///
/// Shape follows the bounds given: v_max only gives a vibrational vector,
/// j_max only a rotational vector, both a (v, j) matrix. Giving neither is
/// an error, and the Born-Oppenheimer model needs both. Grids larger than
/// [`MAX_POPULATION_CELLS`] are rejected before allocation.
pub fn population_distribution(
    temperature_k: f64,
    molecule: Molecule,
    v_max: Option<u32>,
    j_max: Option<u32>,
    model: EnergyModel,
    constants: &dyn ConstantsProvider,
) -> AoResult<PopulationDistribution> {
    let thermal = Thermal::new(temperature_k, molecule, constants)?;
    check_grid(v_max, j_max)?;
    if model == EnergyModel::BornOppenheimer {
        let (v_max, j_max) = both(v_max, j_max)?;
        thermal.check_bound(v_max, j_max)?;
    }

    let dist = match (v_max, j_max) {
        (Some(v_max), None) => {
            let p = DVector::from_fn(v_max as usize + 1, |v, _| {
                thermal.separable(Some(v as u32), None)
            });
            PopulationDistribution::Vibrational(&p / p.sum())
        }
        (None, Some(j_max)) => {
            let p = DVector::from_fn(j_max as usize + 1, |j, _| {
                thermal.separable(None, Some(j as u32))
            });
            PopulationDistribution::Rotational(&p / p.sum())
        }
        (Some(v_max), Some(j_max)) => {
            let p = DMatrix::from_fn(v_max as usize + 1, j_max as usize + 1, |v, j| {
                match model {
                    EnergyModel::Separable => thermal.separable(Some(v as u32), Some(j as u32)),
                    EnergyModel::BornOppenheimer => thermal.born_oppenheimer(v as u32, j as u32),
                }
            });
            PopulationDistribution::Rovibrational(&p / p.sum())
        }
        (None, None) => {
            return Err(AoError::InvalidArg {
                what: "population distribution needs v_max, j_max or both",
            });
        }
    };

    tracing::debug!(%molecule, temperature_k, shape = ?dist.shape(), ?model, "population distribution");
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ao_constants::BuiltinConstants;

    const C: BuiltinConstants = BuiltinConstants;

    #[test]
    fn ground_state_partition_is_one() {
        for molecule in [Molecule::N2, Molecule::O2, Molecule::NOPlus, Molecule::H2] {
            assert_eq!(vibrational_partition_function(0, 300.0, molecule, &C).unwrap(), 1.0);
            assert_eq!(rotational_partition_function(0, 300.0, molecule, &C).unwrap(), 1.0);
            assert_eq!(
                born_oppenheimer_partition_function(0, 0, 300.0, molecule, &C).unwrap(),
                1.0
            );
        }
    }

    #[test]
    fn boltzmann_factor_values() {
        let f = boltzmann_factor(500.0, Molecule::O2, Some(0), None, EnergyModel::Separable, &C)
            .unwrap();
        assert_eq!(f, 1.0);

        // j = 1: degeneracy 3, energy 2 B_e
        let f = boltzmann_factor(500.0, Molecule::O2, None, Some(1), EnergyModel::Separable, &C)
            .unwrap();
        let expected = 3.0 * (-wavenumber_to_joules(2.0 * 1.4376766) / (BOLTZMANN * 500.0)).exp();
        assert!((f - expected).abs() < 1e-12);

        let f = boltzmann_factor(500.0, Molecule::O2, None, None, EnergyModel::Separable, &C)
            .unwrap();
        assert_eq!(f, 1.0);
    }

    #[test]
    fn born_oppenheimer_needs_both_numbers() {
        let err = boltzmann_factor(
            500.0,
            Molecule::O2,
            Some(3),
            None,
            EnergyModel::BornOppenheimer,
            &C,
        )
        .unwrap_err();
        assert!(matches!(err, AoError::InvalidArg { .. }));

        assert!(
            population_distribution(500.0, Molecule::O2, None, Some(4), EnergyModel::BornOppenheimer, &C)
                .is_err()
        );
    }

    #[test]
    fn born_oppenheimer_rejects_unbound_levels() {
        // H2: B_e / (2 D_e) = 646, so j = 25 is past the centrifugal limit
        let err = born_oppenheimer_partition_function(0, 25, 300.0, Molecule::H2, &C).unwrap_err();
        assert!(err.is_domain());
        assert!(born_oppenheimer_partition_function(0, 24, 300.0, Molecule::H2, &C).is_ok());
        assert!(
            boltzmann_factor(300.0, Molecule::N2, Some(82), Some(0), EnergyModel::BornOppenheimer, &C)
                .is_err()
        );
        // The separable model has no such limit
        assert!(
            boltzmann_factor(300.0, Molecule::N2, Some(82), Some(0), EnergyModel::Separable, &C)
                .is_ok()
        );
    }

    #[test]
    fn invalid_temperature_and_molecule() {
        assert!(
            vibrational_partition_function(2, 0.0, Molecule::N2, &C)
                .unwrap_err()
                .is_domain()
        );
        assert!(
            rotational_partition_function(2, -10.0, Molecule::N2, &C)
                .unwrap_err()
                .is_domain()
        );
        assert!(matches!(
            vibrational_partition_function(2, 300.0, Molecule::Air, &C),
            Err(AoError::UnsupportedMolecule { .. })
        ));
    }

    #[test]
    fn distribution_shapes() {
        let sep = EnergyModel::Separable;
        let d = population_distribution(1000.0, Molecule::N2, Some(4), None, sep, &C).unwrap();
        assert_eq!(d.shape(), (5, 1));
        assert!(matches!(d, PopulationDistribution::Vibrational(_)));

        let d = population_distribution(1000.0, Molecule::N2, None, Some(20), sep, &C).unwrap();
        assert_eq!(d.shape(), (21, 1));
        assert!(matches!(d, PopulationDistribution::Rotational(_)));

        let d = population_distribution(1000.0, Molecule::N2, Some(2), Some(9), sep, &C).unwrap();
        assert_eq!(d.shape(), (3, 10));
        assert!(d.get(Some(2), Some(9)).is_some());
        assert!(d.get(Some(3), Some(0)).is_none());
        assert!(d.get(Some(0), None).is_none());

        let d = population_distribution(1000.0, Molecule::N2, Some(0), None, sep, &C).unwrap();
        assert_eq!(d.get(Some(0), None), Some(1.0));

        assert!(matches!(
            population_distribution(1000.0, Molecule::N2, None, None, sep, &C),
            Err(AoError::InvalidArg { .. })
        ));
    }

    #[test]
    fn oversized_grid_is_rejected_before_allocation() {
        let sep = EnergyModel::Separable;
        let err = population_distribution(1000.0, Molecule::N2, Some(u32::MAX), None, sep, &C)
            .unwrap_err();
        assert!(err.is_domain());
        let err =
            population_distribution(1000.0, Molecule::N2, Some(4_000), Some(4_000), sep, &C)
                .unwrap_err();
        assert!(err.is_domain());
        // 2048 x 2048 is exactly at the limit
        assert!(population_distribution(1000.0, Molecule::N2, Some(2_047), Some(2_047), sep, &C)
            .is_ok());
    }

    #[test]
    fn separable_grid_is_outer_product() {
        let t = 2000.0;
        let sep = EnergyModel::Separable;
        let grid = population_distribution(t, Molecule::NO, Some(3), Some(6), sep, &C).unwrap();
        let vib = population_distribution(t, Molecule::NO, Some(3), None, sep, &C).unwrap();
        let rot = population_distribution(t, Molecule::NO, None, Some(6), sep, &C).unwrap();
        for v in 0..=3 {
            for j in 0..=6 {
                let expected = vib.get(Some(v), None).unwrap() * rot.get(None, Some(j)).unwrap();
                let found = grid.get(Some(v), Some(j)).unwrap();
                assert!((expected - found).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn normalized_by_partition_function() {
        let t = 800.0;
        let z = rotational_partition_function(30, t, Molecule::O2, &C).unwrap();
        let d = population_distribution(t, Molecule::O2, None, Some(30), EnergyModel::Separable, &C)
            .unwrap();
        let f5 = boltzmann_factor(t, Molecule::O2, None, Some(5), EnergyModel::Separable, &C)
            .unwrap();
        assert!((d.get(None, Some(5)).unwrap() - f5 / z).abs() < 1e-12);
    }
}
