//! Series stack aggregation
//!
//! Cells in a series stack carry the same current, so their impedances add
//! sample by sample.

use log::{debug, trace};

use super::diagnostics::{diagnose_cell, CellDiagnostic};
use crate::error::{check_frequencies, DomainError};
use crate::model::{compute_cell_impedance, CellParameters, ImpedanceCurve};

/// Result of one stack simulation
#[derive(Debug, Clone, PartialEq)]
pub struct StackResult {
    /// Sum of all cell curves
    pub stack_curve: ImpedanceCurve,
    /// One curve per cell, in input order
    pub cell_curves: Vec<ImpedanceCurve>,
    /// One diagnostic per cell, in input order
    pub diagnostics: Vec<CellDiagnostic>,
}

impl StackResult {
    /// Number of cells in the stack
    #[inline]
    pub fn ncells(&self) -> usize {
        self.cell_curves.len()
    }
}

/// Compute every cell curve, the series stack curve, and per-cell diagnostics
///
/// # Errors
/// [`DomainError::EmptyStack`] if `cells` is empty, grid errors as for
/// [`compute_cell_impedance`], and [`DomainError::Cell`] wrapping the first
/// cell whose parameters are invalid.
///
/// # Example
/// ```
/// use eis_core::{compute_stack, CellParameters, FrequencyGrid};
/// let grid = FrequencyGrid::logspace(-1.0, 5.0, 300).unwrap();
/// let cells = vec![CellParameters::default(); 3];
/// let result = compute_stack(grid.f(), &cells).unwrap();
/// assert_eq!(result.ncells(), 3);
/// assert_eq!(result.stack_curve.len(), 300);
/// ```
pub fn compute_stack(grid: &[f64], cells: &[CellParameters]) -> Result<StackResult, DomainError> {
    if cells.is_empty() {
        return Err(DomainError::EmptyStack);
    }
    check_frequencies(grid)?;
    debug!(
        "computing stack of {} cells over {} frequency points",
        cells.len(),
        grid.len()
    );

    let cell_curves = cells
        .iter()
        .enumerate()
        .map(|(i, p)| compute_cell_impedance(grid, p).map_err(|e| e.in_cell(i)))
        .collect::<Result<Vec<_>, _>>()?;

    let stack_curve = cell_curves
        .iter()
        .fold(ImpedanceCurve::zeros(grid.len()), |acc, c| &acc + c);

    let mut diagnostics = Vec::with_capacity(cells.len());
    for (i, (curve, params)) in cell_curves.iter().zip(cells).enumerate() {
        let diag = diagnose_cell(grid, curve, params).map_err(|e| e.in_cell(i))?;
        trace!(
            "cell {}: |Z(1Hz)| = {:.4} ohm, tau_index = {:.4}, peak at {:.4} Hz",
            i,
            diag.magnitude_at_1hz,
            diag.estimated_tau,
            diag.peak_frequency
        );
        diagnostics.push(diag);
    }

    Ok(StackResult {
        stack_curve,
        cell_curves,
        diagnostics,
    })
}
