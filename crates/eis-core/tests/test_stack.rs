//! Stack aggregation and diagnostics tests
//!
//! Series additivity, the 1 Hz magnitude lookup and the index-based
//! relaxation-time estimate.

use approx::assert_relative_eq;
use eis_core::stack::{nearest_index, peak_index};
use eis_core::{compute_cell_impedance, compute_stack, CellParameters, DomainError, FrequencyGrid};
use std::f64::consts::PI;

const SCENARIO_GRID: [f64; 6] = [0.1, 1.0, 10.0, 100.0, 1000.0, 10000.0];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_cell() -> CellParameters {
    CellParameters::new(0.1, 1.0, 1e-4, 0.1).expect("valid parameters")
}

/// Cell whose charge-transfer arc peaks at `f_peak` Hz
fn cell_peaking_at(f_peak: f64) -> CellParameters {
    CellParameters::new(0.1, 1.0, 1.0 / (2.0 * PI * f_peak), 0.1).expect("valid parameters")
}

// ============================================================================
// Series additivity
// ============================================================================

#[test]
fn test_stack_is_sum_of_cells() {
    init_logging();
    let grid = FrequencyGrid::logspace(-1.0, 5.0, 121).unwrap();
    let p1 = reference_cell();
    let p2 = CellParameters::new(0.25, 3.0, 5e-3, 0.4).unwrap();

    let result = compute_stack(grid.f(), &[p1, p2]).unwrap();
    let z1 = compute_cell_impedance(grid.f(), &p1).unwrap();
    let z2 = compute_cell_impedance(grid.f(), &p2).unwrap();

    assert_eq!(result.stack_curve.len(), grid.npoints());
    for k in 0..grid.npoints() {
        let expected = z1.get(k).unwrap() + z2.get(k).unwrap();
        let actual = result.stack_curve.get(k).unwrap();
        assert_relative_eq!(actual.re, expected.re, max_relative = 1e-9);
        assert_relative_eq!(actual.im, expected.im, max_relative = 1e-9);
    }
}

#[test]
fn test_identical_cells_double_the_curve() {
    let p = reference_cell();
    let result = compute_stack(&SCENARIO_GRID, &[p, p]).unwrap();
    let single = compute_cell_impedance(&SCENARIO_GRID, &p).unwrap();

    for k in 0..SCENARIO_GRID.len() {
        let z = single.get(k).unwrap();
        let s = result.stack_curve.get(k).unwrap();
        assert_relative_eq!(s.re, 2.0 * z.re, max_relative = 1e-12);
        assert_relative_eq!(s.im, 2.0 * z.im, max_relative = 1e-12);
    }
}

#[test]
fn test_cell_curves_follow_input_order() {
    let a = reference_cell();
    let b = cell_peaking_at(10.0);
    let result = compute_stack(&SCENARIO_GRID, &[a, b, a]).unwrap();

    assert_eq!(result.ncells(), 3);
    assert_eq!(result.cell_curves[0], compute_cell_impedance(&SCENARIO_GRID, &a).unwrap());
    assert_eq!(result.cell_curves[1], compute_cell_impedance(&SCENARIO_GRID, &b).unwrap());
    assert_eq!(result.cell_curves[0], result.cell_curves[2]);
    assert_eq!(result.diagnostics[1].peak_index, 2);
    assert_eq!(result.diagnostics[0].peak_index, 4);
}

// ============================================================================
// 1 Hz magnitude
// ============================================================================

#[test]
fn test_magnitude_at_1hz_exact_sample() {
    let p = reference_cell();
    let result = compute_stack(&SCENARIO_GRID, &[p]).unwrap();
    let z1 = compute_cell_impedance(&[1.0], &p).unwrap().get(0).unwrap();

    let diag = &result.diagnostics[0];
    assert_eq!(diag.reference_index, 1);
    assert_eq!(diag.magnitude_at_1hz, z1.norm());
    assert_relative_eq!(diag.magnitude_at_1hz, 1.1285775811480878, max_relative = 1e-10);
}

#[test]
fn test_magnitude_at_1hz_nearest_sample() {
    let grid = [0.5, 0.9, 1.2, 5.0];
    let p = reference_cell();
    let result = compute_stack(&grid, &[p]).unwrap();
    let z = compute_cell_impedance(&grid, &p).unwrap();

    assert_eq!(result.diagnostics[0].reference_index, 1);
    assert_eq!(result.diagnostics[0].magnitude_at_1hz, z.get(1).unwrap().norm());
}

#[test]
fn test_nearest_index_tie_uses_lower_frequency() {
    assert_eq!(nearest_index(&[0.5, 1.5, 2.0], 1.0), Some(0));
}

#[test]
fn test_default_sweep_reference_index() {
    let grid = FrequencyGrid::logspace(-1.0, 5.0, 300).unwrap();
    let result = compute_stack(grid.f(), &[reference_cell()]).unwrap();
    assert_eq!(result.diagnostics[0].reference_index, 50);
}

// ============================================================================
// Index-based relaxation time
// ============================================================================

#[test]
fn test_estimated_tau_is_index_based() {
    let p = cell_peaking_at(10.0);
    let result = compute_stack(&SCENARIO_GRID, &[p]).unwrap();
    let diag = &result.diagnostics[0];

    assert_eq!(diag.peak_index, 2);
    assert_eq!(diag.peak_frequency, 10.0);
    assert_relative_eq!(diag.estimated_tau, 2.0 / (2.0 * PI), epsilon = 1e-15);
    assert_relative_eq!(diag.estimated_tau, 0.318, epsilon = 1e-3);
}

#[test]
fn test_estimated_tau_ignores_frequency_values() {
    // Same peak position on a grid shifted one decade up
    let shifted: Vec<f64> = SCENARIO_GRID.iter().map(|f| f * 10.0).collect();
    let low = compute_stack(&SCENARIO_GRID, &[cell_peaking_at(10.0)]).unwrap();
    let high = compute_stack(&shifted, &[cell_peaking_at(100.0)]).unwrap();

    assert_eq!(low.diagnostics[0].peak_index, high.diagnostics[0].peak_index);
    assert_eq!(low.diagnostics[0].estimated_tau, high.diagnostics[0].estimated_tau);
    assert!(low.diagnostics[0].physical_tau > high.diagnostics[0].physical_tau);
}

#[test]
fn test_estimated_tau_on_default_sweep() {
    let grid = FrequencyGrid::logspace(-1.0, 5.0, 300).unwrap();
    let p = reference_cell();
    let result = compute_stack(grid.f(), &[p]).unwrap();
    let diag = &result.diagnostics[0];

    assert_eq!(diag.peak_index, 209);
    assert_relative_eq!(diag.estimated_tau, 209.0 / (2.0 * PI), epsilon = 1e-12);
    assert_relative_eq!(diag.physical_tau, 1e-4, max_relative = 1e-12);
    // peak sits near the RC corner frequency
    assert_relative_eq!(diag.peak_frequency, p.characteristic_frequency(), max_relative = 0.05);
}

#[test]
fn test_peak_index_matches_diagnostic() {
    let p = reference_cell();
    let curve = compute_cell_impedance(&SCENARIO_GRID, &p).unwrap();
    let result = compute_stack(&SCENARIO_GRID, &[p]).unwrap();
    assert_eq!(peak_index(&curve), Some(result.diagnostics[0].peak_index));
}

#[test]
fn test_diagnostics_finite_on_extreme_grid() {
    let grid = [1e-200, 1e-100, 1.0, 1e100, 1e200];
    let result = compute_stack(&grid, &[reference_cell(), reference_cell()]).unwrap();
    assert!(result.stack_curve.iter().all(|z| z.re.is_finite() && z.im.is_finite()));

    let diag = &result.diagnostics[0];
    assert_eq!(diag.reference_index, 2);
    assert!(diag.magnitude_at_1hz.is_finite());
    // the Warburg tail at the lowest frequency is the largest -Im(Z)
    assert_eq!(diag.peak_index, 0);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_stack() {
    assert_eq!(
        compute_stack(&SCENARIO_GRID, &[]),
        Err(DomainError::EmptyStack)
    );
}

#[test]
fn test_invalid_cell_aborts_stack() {
    let bad = CellParameters {
        rct: 0.0,
        ..reference_cell()
    };
    let err = compute_stack(&SCENARIO_GRID, &[reference_cell(), bad]).unwrap_err();
    assert_eq!(err.cell_index(), Some(1));
    assert!(err.to_string().starts_with("Cell 1:"));
}

#[test]
fn test_invalid_grid_aborts_stack() {
    let err = compute_stack(&[1.0, -2.0], &[reference_cell()]).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidFrequency {
            index: 1,
            value: -2.0
        }
    );
}
