//! Python bindings for FrequencyGrid class

use eis_core::frequency::{FrequencyGrid, FrequencyUnit, SweepType};
use numpy::{PyArray1, ToPyArray};
use pyo3::prelude::*;

use crate::error::domain_err;

/// Python wrapper for FrequencyGrid
#[pyclass(name = "FrequencyGrid")]
#[derive(Clone)]
pub struct PyFrequencyGrid {
    inner: FrequencyGrid,
}

#[pymethods]
impl PyFrequencyGrid {
    /// Create a new frequency sweep
    ///
    /// Args:
    ///     start: Start frequency in `unit`
    ///     stop: Stop frequency in `unit`
    ///     npoints: Number of frequency points
    ///     unit: Frequency unit ('Hz' or 'kHz')
    ///     sweep_type: Sweep type ('linear' or 'log')
    ///
    /// Raises:
    ///     ValueError: if the sweep is empty, inverted or non-positive
    #[new]
    #[pyo3(signature = (start, stop, npoints, unit="Hz", sweep_type="log"))]
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: &str,
        sweep_type: &str,
    ) -> PyResult<Self> {
        let freq_unit = FrequencyUnit::from_str(unit).ok_or_else(|| {
            pyo3::exceptions::PyValueError::new_err(format!(
                "Invalid frequency unit: {}. Use 'Hz' or 'kHz'",
                unit
            ))
        })?;

        let sweep = SweepType::from_str(sweep_type).ok_or_else(|| {
            pyo3::exceptions::PyValueError::new_err(format!(
                "Invalid sweep type: {}. Use 'linear' or 'log'",
                sweep_type
            ))
        })?;

        FrequencyGrid::new(start, stop, npoints, freq_unit, sweep)
            .map(|inner| Self { inner })
            .map_err(domain_err)
    }

    /// Log sweep from 10**start_decade to 10**stop_decade Hz
    #[staticmethod]
    pub fn logspace(start_decade: f64, stop_decade: f64, npoints: usize) -> PyResult<Self> {
        FrequencyGrid::logspace(start_decade, stop_decade, npoints)
            .map(|inner| Self { inner })
            .map_err(domain_err)
    }

    /// Build from explicit samples in Hz
    #[staticmethod]
    pub fn from_f(f: Vec<f64>) -> PyResult<Self> {
        FrequencyGrid::from_f(f, FrequencyUnit::Hz)
            .map(|inner| Self { inner })
            .map_err(domain_err)
    }

    /// Get frequency array in Hz as numpy array
    #[getter]
    pub fn f<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f().to_pyarray(py)
    }

    /// Get scaled frequency array (in the specified unit) as numpy array
    #[getter]
    pub fn f_scaled<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.f_scaled().to_pyarray(py)
    }

    /// Start frequency in Hz
    #[getter]
    pub fn start(&self) -> f64 {
        self.inner.start()
    }

    /// Stop frequency in Hz
    #[getter]
    pub fn stop(&self) -> f64 {
        self.inner.stop()
    }

    /// Number of frequency points
    #[getter]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    /// Frequency unit as string
    #[getter]
    pub fn unit(&self) -> &str {
        self.inner.unit().label()
    }

    /// Sweep type as string
    #[getter]
    pub fn sweep_type(&self) -> &str {
        match self.inner.sweep_type() {
            SweepType::Linear => "linear",
            SweepType::Log => "log",
            SweepType::Explicit => "explicit",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "FrequencyGrid({} {} - {} {}, {} points, {})",
            self.inner.start() / self.inner.multiplier(),
            self.unit(),
            self.inner.stop() / self.inner.multiplier(),
            self.unit(),
            self.npoints(),
            self.sweep_type()
        )
    }

    fn __len__(&self) -> usize {
        self.npoints()
    }
}

impl PyFrequencyGrid {
    /// Get the inner FrequencyGrid reference (for internal use)
    pub fn inner(&self) -> &FrequencyGrid {
        &self.inner
    }
}
