//! Error conversion for Python

use eis_core::DomainError;
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Every domain failure is an invalid argument from Python's point of view
pub fn domain_err(e: DomainError) -> PyErr {
    PyValueError::new_err(e.to_string())
}
