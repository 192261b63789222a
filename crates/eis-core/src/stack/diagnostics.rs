//! Per-cell diagnostics extracted from an impedance curve

use std::f64::consts::PI;

use crate::constants::REFERENCE_FREQUENCY_HZ;
use crate::error::DomainError;
use crate::model::{CellParameters, ImpedanceCurve};

/// Scalar diagnostics for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellDiagnostic {
    /// |Z| at the grid sample closest to 1 Hz (Ω)
    pub magnitude_at_1hz: f64,
    /// Index of the peak of `-Im(Z)` divided by `2*pi`
    ///
    /// This is an index-derived approximation kept for compatibility with
    /// existing reports. It depends on how densely the grid is sampled, not
    /// on the frequency values themselves, and is not a physical time
    /// constant. See [`CellDiagnostic::physical_tau`].
    pub estimated_tau: f64,
    /// Grid index used for `magnitude_at_1hz`
    pub reference_index: usize,
    /// Grid index of the maximum of `-Im(Z)`
    pub peak_index: usize,
    /// Frequency at `peak_index` (Hz)
    pub peak_frequency: f64,
    /// `Rct * Cdl` (s)
    pub physical_tau: f64,
}

/// Index of the sample closest to `target`; the lowest index wins ties
///
/// Returns `None` for an empty slice.
pub fn nearest_index(f: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (k, &x) in f.iter().enumerate() {
        let d = (x - target).abs();
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((k, d)),
        }
    }
    best.map(|(k, _)| k)
}

/// Index of the maximum of `-Im(Z)` (apex of the Nyquist arc); the lowest
/// index wins ties
pub fn peak_index(curve: &ImpedanceCurve) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (k, z) in curve.iter().enumerate() {
        let v = -z.im;
        match best {
            Some((_, bv)) if v <= bv => {}
            _ => best = Some((k, v)),
        }
    }
    best.map(|(k, _)| k)
}

/// Index-based relaxation-time estimate, `k_peak / (2*pi)`
#[inline]
pub fn index_tau(peak: usize) -> f64 {
    peak as f64 / (2.0 * PI)
}

/// Derive the diagnostics for one cell curve
///
/// Any curve produced by [`compute_cell_impedance`] on `grid` is accepted.
///
/// # Errors
/// [`DomainError::EmptyGrid`] if `grid` is empty, and
/// [`DomainError::LengthMismatch`] if `curve` is not aligned with `grid`.
///
/// [`compute_cell_impedance`]: crate::model::compute_cell_impedance
pub fn diagnose_cell(
    grid: &[f64],
    curve: &ImpedanceCurve,
    params: &CellParameters,
) -> Result<CellDiagnostic, DomainError> {
    if curve.len() != grid.len() {
        return Err(DomainError::LengthMismatch {
            expected: grid.len(),
            actual: curve.len(),
        });
    }
    let reference_index =
        nearest_index(grid, REFERENCE_FREQUENCY_HZ).ok_or(DomainError::EmptyGrid)?;
    let peak = peak_index(curve).ok_or(DomainError::EmptyGrid)?;
    let magnitude_at_1hz = curve.z()[reference_index].norm();

    Ok(CellDiagnostic {
        magnitude_at_1hz,
        estimated_tau: index_tau(peak),
        reference_index,
        peak_index: peak,
        peak_frequency: grid[peak],
        physical_tau: params.time_constant(),
    })
}
