//! Python bindings for stack aggregation

use eis_core::{CellDiagnostic, CellParameters, StackResult};
use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::error::domain_err;
use crate::model::{PyCellParameters, PyImpedanceCurve};

/// Python wrapper for CellDiagnostic
#[pyclass(name = "CellDiagnostic")]
#[derive(Clone)]
pub struct PyCellDiagnostic {
    inner: CellDiagnostic,
}

#[pymethods]
impl PyCellDiagnostic {
    /// |Z| at the sample closest to 1 Hz (Ohm)
    #[getter]
    pub fn magnitude_at_1hz(&self) -> f64 {
        self.inner.magnitude_at_1hz
    }

    /// Index of the -Im(Z) peak divided by 2*pi
    ///
    /// An index-based approximation, not a physical time constant.
    #[getter]
    pub fn estimated_tau(&self) -> f64 {
        self.inner.estimated_tau
    }

    /// Rct * Cdl in seconds
    #[getter]
    pub fn physical_tau(&self) -> f64 {
        self.inner.physical_tau
    }

    #[getter]
    pub fn reference_index(&self) -> usize {
        self.inner.reference_index
    }

    #[getter]
    pub fn peak_index(&self) -> usize {
        self.inner.peak_index
    }

    #[getter]
    pub fn peak_frequency(&self) -> f64 {
        self.inner.peak_frequency
    }

    fn __repr__(&self) -> String {
        format!(
            "CellDiagnostic(magnitude_at_1hz={:.4}, estimated_tau={:.4})",
            self.inner.magnitude_at_1hz, self.inner.estimated_tau
        )
    }
}

/// Python wrapper for StackResult
#[pyclass(name = "StackResult")]
pub struct PyStackResult {
    inner: StackResult,
}

#[pymethods]
impl PyStackResult {
    /// Series sum of all cells
    #[getter]
    pub fn stack_curve(&self) -> PyImpedanceCurve {
        PyImpedanceCurve::from_curve(self.inner.stack_curve.clone())
    }

    /// Per-cell curves in input order
    #[getter]
    pub fn cell_curves(&self) -> Vec<PyImpedanceCurve> {
        self.inner
            .cell_curves
            .iter()
            .cloned()
            .map(PyImpedanceCurve::from_curve)
            .collect()
    }

    /// Per-cell diagnostics in input order
    #[getter]
    pub fn diagnostics(&self) -> Vec<PyCellDiagnostic> {
        self.inner
            .diagnostics
            .iter()
            .map(|&d| PyCellDiagnostic { inner: d })
            .collect()
    }

    #[getter]
    pub fn ncells(&self) -> usize {
        self.inner.ncells()
    }

    fn __repr__(&self) -> String {
        format!(
            "StackResult({} cells, {} points)",
            self.inner.ncells(),
            self.inner.stack_curve.len()
        )
    }
}

/// Compute a series stack of cells
///
/// Args:
///     f: Frequency samples in Hz (numpy float64 array)
///     cells: List of CellParameters, in stack order
///
/// Raises:
///     ValueError: on an empty stack or invalid input; the message names the
///         failing cell
#[pyfunction]
pub fn compute_stack(
    f: PyReadonlyArray1<'_, f64>,
    cells: Vec<PyCellParameters>,
) -> PyResult<PyStackResult> {
    let f = f.as_array().to_vec();
    let cells: Vec<CellParameters> = cells.iter().map(|c| *c.inner()).collect();
    eis_core::compute_stack(&f, &cells)
        .map(|inner| PyStackResult { inner })
        .map_err(domain_err)
}
