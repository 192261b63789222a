//! Single-cell impedance model
//!
//! Randles circuit with a Warburg tail:
//!
//! ```text
//!          ┌── Rct ──┐
//! ── Rs ───┤         ├─── Zw ──
//!          └── Cdl ──┘
//! ```
//!
//! `Z(f) = Rs + 1 / (1/Rct + j*omega*Cdl) + sigma / sqrt(j*omega)`, `omega = 2*pi*f`.

use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::PI;

use super::curve::ImpedanceCurve;
use super::elements::{charge_transfer_impedance, warburg_impedance};
use super::params::CellParameters;
use crate::error::{check_frequencies, DomainError};

/// Impedance of one cell at a single frequency `f` (Hz)
///
/// No validation is done here; `f` and every field of `params` must be
/// positive and finite.
#[inline]
pub fn cell_impedance_at(f: f64, params: &CellParameters) -> Complex64 {
    let omega = 2.0 * PI * f;
    let zp = charge_transfer_impedance(omega, params.rct, params.cdl);
    let zw = warburg_impedance(omega, params.sigma);
    params.rs + zp + zw
}

/// Compute the impedance curve of one cell over a frequency grid
///
/// `grid` is any set of samples in Hz, typically [`FrequencyGrid::f`]. The
/// returned curve has exactly one value per sample, in the same order.
///
/// # Errors
/// [`DomainError`] if a parameter is non-positive or non-finite, the grid is
/// empty, or any sample is non-positive or non-finite.
///
/// # Example
/// ```
/// use eis_core::{compute_cell_impedance, CellParameters, FrequencyGrid};
/// let grid = FrequencyGrid::logspace(-1.0, 5.0, 61).unwrap();
/// let z = compute_cell_impedance(grid.f(), &CellParameters::default()).unwrap();
/// assert_eq!(z.len(), grid.npoints());
/// ```
///
/// [`FrequencyGrid::f`]: crate::frequency::FrequencyGrid::f
pub fn compute_cell_impedance(
    grid: &[f64],
    params: &CellParameters,
) -> Result<ImpedanceCurve, DomainError> {
    params.validate()?;
    check_frequencies(grid)?;

    let z = Array1::from_iter(grid.iter().map(|&f| cell_impedance_at(f, params)));
    Ok(ImpedanceCurve::new(z))
}
