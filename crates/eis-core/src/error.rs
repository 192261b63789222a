//! Error types for impedance computations
//!
//! Every operation in the crate validates its inputs at the boundary and
//! reports failures through [`DomainError`]. Nothing is clamped or skipped.

use thiserror::Error;

/// Invalid physical or numeric input to a model operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid cell parameter {name}: {value} (must be positive and finite)")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("Invalid frequency at index {index}: {value} Hz (must be positive and finite)")]
    InvalidFrequency { index: usize, value: f64 },

    #[error("Frequency grid is not strictly increasing at index {index}: {value} Hz")]
    NonIncreasingFrequency { index: usize, value: f64 },

    #[error("Frequency grid is empty")]
    EmptyGrid,

    #[error("Invalid sweep: {0}")]
    InvalidSweep(String),

    #[error("Cell stack is empty")]
    EmptyStack,

    #[error("Curve length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Cell {index}: {source}")]
    Cell {
        index: usize,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    /// Attach the position of the failing cell within a stack
    pub fn in_cell(self, index: usize) -> Self {
        DomainError::Cell {
            index,
            source: Box::new(self),
        }
    }

    /// Index of the failing cell, if the error came from a stack computation
    pub fn cell_index(&self) -> Option<usize> {
        match self {
            DomainError::Cell { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Check that a physical quantity is strictly positive and finite
pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::InvalidParameter { name, value })
    }
}

/// Check that a set of frequency samples is non-empty, positive and finite
pub(crate) fn check_frequencies(f: &[f64]) -> Result<(), DomainError> {
    if f.is_empty() {
        return Err(DomainError::EmptyGrid);
    }
    match f.iter().position(|&x| !(x.is_finite() && x > 0.0)) {
        Some(index) => Err(DomainError::InvalidFrequency {
            index,
            value: f[index],
        }),
        None => Ok(()),
    }
}
