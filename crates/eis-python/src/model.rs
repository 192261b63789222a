//! Python bindings for the single-cell model

use eis_core::{CellParameters, ImpedanceCurve};
use num_complex::Complex64;
use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
use pyo3::prelude::*;

use crate::error::domain_err;

/// Python wrapper for CellParameters
#[pyclass(name = "CellParameters")]
#[derive(Clone)]
pub struct PyCellParameters {
    inner: CellParameters,
}

#[pymethods]
impl PyCellParameters {
    /// Create a validated parameter set
    ///
    /// Args:
    ///     rs: Series resistance (Ohm)
    ///     rct: Charge-transfer resistance (Ohm)
    ///     cdl: Double-layer capacitance (F)
    ///     sigma: Warburg coefficient (Ohm s^-1/2)
    ///
    /// Raises:
    ///     ValueError: if any value is non-positive or non-finite
    #[new]
    #[pyo3(signature = (rs=0.1, rct=1.0, cdl=1e-4, sigma=0.1))]
    pub fn new(rs: f64, rct: f64, cdl: f64, sigma: f64) -> PyResult<Self> {
        CellParameters::new(rs, rct, cdl, sigma)
            .map(|inner| Self { inner })
            .map_err(domain_err)
    }

    #[getter]
    pub fn rs(&self) -> f64 {
        self.inner.rs
    }

    #[getter]
    pub fn rct(&self) -> f64 {
        self.inner.rct
    }

    #[getter]
    pub fn cdl(&self) -> f64 {
        self.inner.cdl
    }

    #[getter]
    pub fn sigma(&self) -> f64 {
        self.inner.sigma
    }

    /// Rct * Cdl in seconds
    #[getter]
    pub fn time_constant(&self) -> f64 {
        self.inner.time_constant()
    }

    fn __repr__(&self) -> String {
        format!(
            "CellParameters(rs={}, rct={}, cdl={:e}, sigma={})",
            self.inner.rs, self.inner.rct, self.inner.cdl, self.inner.sigma
        )
    }
}

impl PyCellParameters {
    pub fn inner(&self) -> &CellParameters {
        &self.inner
    }
}

/// Python wrapper for ImpedanceCurve
#[pyclass(name = "ImpedanceCurve")]
#[derive(Clone)]
pub struct PyImpedanceCurve {
    inner: ImpedanceCurve,
}

#[pymethods]
impl PyImpedanceCurve {
    /// Complex impedance as numpy array [nfreq]
    #[getter]
    pub fn z<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<Complex64>> {
        self.inner.z().to_pyarray(py)
    }

    /// Real part (Ohm)
    #[getter]
    pub fn re<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.re().to_pyarray(py)
    }

    /// Imaginary part (Ohm)
    #[getter]
    pub fn im<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.im().to_pyarray(py)
    }

    /// Magnitude (Ohm)
    #[getter]
    pub fn mag<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.mag().to_pyarray(py)
    }

    /// Magnitude in dB
    #[getter]
    pub fn db<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.db().to_pyarray(py)
    }

    /// Phase in degrees
    #[getter]
    pub fn deg<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.deg().to_pyarray(py)
    }

    /// Nyquist coordinates as a list of (Re Z, -Im Z) tuples
    #[getter]
    pub fn nyquist(&self) -> Vec<(f64, f64)> {
        self.inner.nyquist()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!("ImpedanceCurve({} points)", self.inner.len())
    }
}

impl PyImpedanceCurve {
    pub fn from_curve(curve: ImpedanceCurve) -> Self {
        Self { inner: curve }
    }
}

/// Compute the impedance curve of one cell
///
/// Args:
///     f: Frequency samples in Hz (numpy float64 array)
///     cell: CellParameters
///
/// Raises:
///     ValueError: if any frequency is non-positive or non-finite
#[pyfunction]
pub fn compute_cell_impedance(
    f: PyReadonlyArray1<'_, f64>,
    cell: &PyCellParameters,
) -> PyResult<PyImpedanceCurve> {
    let f = f.as_array().to_vec();
    eis_core::compute_cell_impedance(&f, cell.inner())
        .map(PyImpedanceCurve::from_curve)
        .map_err(domain_err)
}
