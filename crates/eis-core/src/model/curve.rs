//! Impedance curves and their read-only projections
//!
//! An [`ImpedanceCurve`] holds one complex impedance per grid sample. The
//! projections here (Nyquist pairs, Bode magnitude/phase) are what plotting
//! front ends consume; nothing in this module renders anything.

use ndarray::Array1;
use num_complex::Complex64;
use std::ops::Add;

use crate::error::DomainError;
use crate::math::conversions::{
    complex_2_db, complex_2_degree, complex_2_magnitude, complex_2_radian,
};

/// Complex impedance `Z(f)` in Ω, index-aligned with a frequency grid
#[derive(Debug, Clone, PartialEq)]
pub struct ImpedanceCurve {
    z: Array1<Complex64>,
}

impl ImpedanceCurve {
    /// Wrap a vector of impedance samples
    pub fn new(z: Array1<Complex64>) -> Self {
        Self { z }
    }

    /// All-zero curve of length `n`, the identity for series addition
    pub fn zeros(n: usize) -> Self {
        Self {
            z: Array1::zeros(n),
        }
    }

    /// Underlying complex samples
    #[inline]
    pub fn z(&self) -> &Array1<Complex64> {
        &self.z
    }

    /// Number of samples
    #[inline]
    pub fn len(&self) -> usize {
        self.z.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Sample at grid index `k`
    #[inline]
    pub fn get(&self, k: usize) -> Option<Complex64> {
        self.z.get(k).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Complex64> {
        self.z.iter()
    }

    /// Real part (Ω)
    pub fn re(&self) -> Array1<f64> {
        self.z.mapv(|c| c.re)
    }

    /// Imaginary part (Ω)
    pub fn im(&self) -> Array1<f64> {
        self.z.mapv(|c| c.im)
    }

    /// Magnitude |Z| (Ω)
    pub fn mag(&self) -> Array1<f64> {
        self.z.mapv(complex_2_magnitude)
    }

    /// Magnitude in dB, `20*log10(|Z|)`
    pub fn db(&self) -> Array1<f64> {
        self.z.mapv(complex_2_db)
    }

    /// Phase in degrees
    pub fn deg(&self) -> Array1<f64> {
        self.z.mapv(complex_2_degree)
    }

    /// Phase in radians
    pub fn rad(&self) -> Array1<f64> {
        self.z.mapv(complex_2_radian)
    }

    /// Nyquist coordinates `(Re Z, -Im Z)` for each sample
    pub fn nyquist(&self) -> Vec<(f64, f64)> {
        self.z.iter().map(|c| (c.re, -c.im)).collect()
    }

    /// Series connection with another curve on the same grid
    pub fn series(&self, other: &ImpedanceCurve) -> Result<ImpedanceCurve, DomainError> {
        if self.len() != other.len() {
            return Err(DomainError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(Self {
            z: &self.z + &other.z,
        })
    }
}

/// Element-wise series addition
///
/// # Panics
/// Panics if the curves have different lengths; use [`ImpedanceCurve::series`]
/// for a checked version.
impl Add for &ImpedanceCurve {
    type Output = ImpedanceCurve;

    fn add(self, other: Self) -> ImpedanceCurve {
        ImpedanceCurve {
            z: &self.z + &other.z,
        }
    }
}

impl From<Vec<Complex64>> for ImpedanceCurve {
    fn from(z: Vec<Complex64>) -> Self {
        Self::new(Array1::from_vec(z))
    }
}
