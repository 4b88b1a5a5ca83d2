use ao_constants::{BuiltinConstants, ConstantsProvider, Molecule};
use ao_core::conversions::wavenumber_to_joules;
use ao_core::units::constants::{BOLTZMANN, PLANCK, SPEED_OF_LIGHT};
use ao_quantum::*;

const C: BuiltinConstants = BuiltinConstants;

fn rel(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}

#[test]
fn harmonic_vibrational_sum_is_geometric() {
    let t = 3000.0;
    let omega = C.spectroscopy(Molecule::N2).unwrap().omega_e;
    let x = wavenumber_to_joules(omega) / (BOLTZMANN * t);
    let closed_form = 1.0 / (1.0 - (-x).exp());

    let z = vibrational_partition_function(200, t, Molecule::N2, &C).unwrap();
    assert!(rel(z, closed_form) < 1e-9, "{z} vs {closed_form}");
}

#[test]
fn rotational_sum_reaches_classical_limit() {
    // Z_rot ≈ k_B T / (h c B_e) + 1/3 for k_B T >> h c B_e
    let t = 1000.0;
    let b_e = C.spectroscopy(Molecule::N2).unwrap().b_e;
    let classical = BOLTZMANN * t / wavenumber_to_joules(b_e) + 1.0 / 3.0;

    let z = rotational_partition_function(300, t, Molecule::N2, &C).unwrap();
    assert!(rel(z, classical) < 1e-3, "{z} vs {classical}");
}

#[test]
fn ground_population_is_inverse_partition_function() {
    let t = 800.0;
    let z = vibrational_partition_function(10, t, Molecule::NO, &C).unwrap();
    let p = population_distribution(t, Molecule::NO, Some(10), None, EnergyModel::Separable, &C)
        .unwrap();
    assert!(rel(p.get(Some(0), None).unwrap(), 1.0 / z) < 1e-12);
}

#[test]
fn born_oppenheimer_grid_normalizes_to_its_partition_function() {
    let (t, v_max, j_max) = (5000.0, 6, 60);
    let z = born_oppenheimer_partition_function(v_max, j_max, t, Molecule::N2, &C).unwrap();
    let p = population_distribution(
        t,
        Molecule::N2,
        Some(v_max),
        Some(j_max),
        EnergyModel::BornOppenheimer,
        &C,
    )
    .unwrap();
    assert!((p.total() - 1.0).abs() < 1e-12);

    let factor = boltzmann_factor(
        t,
        Molecule::N2,
        Some(2),
        Some(17),
        EnergyModel::BornOppenheimer,
        &C,
    )
    .unwrap();
    assert!(rel(p.get(Some(2), Some(17)).unwrap(), factor / z) < 1e-12);
}

#[test]
fn rotational_constant_from_reduced_mass() {
    // B_e = h / (8 π² c μ r_e²), with μ the reduced mass of the two nuclei
    let s = C.spectroscopy(Molecule::N2).unwrap();
    let mu = reduced_mass("N", "N").unwrap();
    let r = s.r_e * 1e-10;
    let b_per_m = PLANCK / (8.0 * std::f64::consts::PI.powi(2) * SPEED_OF_LIGHT * mu * r * r);
    assert!(rel(b_per_m / 100.0, s.b_e) < 1e-3);
}

#[test]
fn dunham_a0_recovers_harmonic_frequency() {
    for molecule in [Molecule::N2, Molecule::O2, Molecule::H2] {
        let s = C.spectroscopy(molecule).unwrap();
        let d = potential_dunham_coef_012(molecule, &C).unwrap();
        // a0 = ω_e² / 4B_e
        assert!(rel((4.0 * d.a0 * s.b_e).sqrt(), s.omega_e) < 1e-12);
        assert!(d.a1 < -1.0);
    }
}

#[test]
fn signed_quantum_numbers_are_validated_before_use() {
    let err = quantum_number(-3).unwrap_err();
    assert!(err.is_domain());
    let v = quantum_number(3).unwrap();
    assert!(vibrational_energy_level(v, Molecule::N2, &C).unwrap() > 0.0);
}
