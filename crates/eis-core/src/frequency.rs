//! Frequency module - represents the shared frequency grid of a sweep
//!
//! A [`FrequencyGrid`] is always non-empty, positive, finite and strictly
//! increasing. Samples are stored in Hz regardless of the display unit.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::{check_frequencies, DomainError};

/// Unit in which sweep bounds are entered
///
/// Impedance sweeps run from millihertz to a few hundred kilohertz, so only
/// Hz and kHz are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrequencyUnit {
    #[default]
    #[serde(alias = "hz")]
    Hz,
    #[serde(rename = "kHz", alias = "KHz", alias = "khz")]
    KHz,
}

impl FrequencyUnit {
    /// Get the multiplier to convert to Hz
    pub fn multiplier(&self) -> f64 {
        match self {
            FrequencyUnit::Hz => 1.0,
            FrequencyUnit::KHz => 1e3,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "hz" => Some(FrequencyUnit::Hz),
            "khz" => Some(FrequencyUnit::KHz),
            _ => None,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            FrequencyUnit::Hz => "Hz",
            FrequencyUnit::KHz => "kHz",
        }
    }
}

/// How the samples of a grid were laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepType {
    /// Evenly spaced in frequency
    Linear,
    /// Evenly spaced in log10(frequency)
    #[default]
    Log,
    /// Samples supplied one by one by the caller
    Explicit,
}

impl SweepType {
    /// Parse from string (case-insensitive, accepts "lin" and "logarithmic")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" | "lin" => Some(SweepType::Linear),
            "log" | "logarithmic" => Some(SweepType::Log),
            _ => None,
        }
    }
}

/// An ordered set of excitation frequencies shared by every cell in a stack
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyGrid {
    /// Frequency vector in Hz
    f: Vec<f64>,
    /// Display unit
    unit: FrequencyUnit,
    /// Sweep type (linear or log)
    sweep_type: SweepType,
}

impl FrequencyGrid {
    /// Create a new grid from start/stop/npoints
    ///
    /// # Arguments
    /// * `start` - Start frequency in the specified unit
    /// * `stop` - Stop frequency in the specified unit
    /// * `npoints` - Number of frequency points
    /// * `unit` - Frequency unit
    /// * `sweep_type` - Linear or logarithmic sweep
    ///
    /// # Example
    /// ```
    /// use eis_core::frequency::{FrequencyGrid, FrequencyUnit, SweepType};
    /// let grid = FrequencyGrid::new(0.1, 100.0, 300, FrequencyUnit::KHz, SweepType::Log).unwrap();
    /// assert_eq!(grid.npoints(), 300);
    /// ```
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: FrequencyUnit,
        sweep_type: SweepType,
    ) -> Result<Self, DomainError> {
        check_span("start", start, "stop", stop, npoints)?;
        let (lo, hi) = (start * unit.multiplier(), stop * unit.multiplier());

        let f = match sweep_type {
            SweepType::Linear | SweepType::Explicit => evenly_spaced(lo, hi, npoints),
            SweepType::Log => evenly_spaced(lo.log10(), hi.log10(), npoints)
                .into_iter()
                .map(|x| 10f64.powf(x))
                .collect(),
        };

        Self::checked(f, unit, sweep_type)
    }

    /// Create a log sweep spanning `10^start_decade` to `10^stop_decade` Hz
    ///
    /// Samples are `10^(start + i*step)`, so decade boundaries land exactly on
    /// powers of ten (1 Hz is hit exactly when it lies on the grid).
    pub fn logspace(
        start_decade: f64,
        stop_decade: f64,
        npoints: usize,
    ) -> Result<Self, DomainError> {
        check_span("start decade", start_decade, "stop decade", stop_decade, npoints)?;
        let f = evenly_spaced(start_decade, stop_decade, npoints)
            .into_iter()
            .map(|x| 10f64.powf(x))
            .collect();

        Self::checked(f, FrequencyUnit::Hz, SweepType::Log)
    }

    /// Create from explicit samples expressed in `unit`
    pub fn from_f(f: Vec<f64>, unit: FrequencyUnit) -> Result<Self, DomainError> {
        let mult = unit.multiplier();
        let f_hz = f.into_iter().map(|x| x * mult).collect();
        Self::checked(f_hz, unit, SweepType::Explicit)
    }

    fn checked(
        f: Vec<f64>,
        unit: FrequencyUnit,
        sweep_type: SweepType,
    ) -> Result<Self, DomainError> {
        check_frequencies(&f)?;
        if let Some(i) = f.windows(2).position(|w| w[1] <= w[0]) {
            return Err(DomainError::NonIncreasingFrequency {
                index: i + 1,
                value: f[i + 1],
            });
        }
        Ok(Self {
            f,
            unit,
            sweep_type,
        })
    }

    /// Get frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Get frequency vector in the current unit
    pub fn f_scaled(&self) -> Vec<f64> {
        let mult = self.unit.multiplier();
        self.f.iter().map(|&x| x / mult).collect()
    }

    /// Angular frequencies (rad/s)
    pub fn omega(&self) -> Vec<f64> {
        self.f.iter().map(|&x| 2.0 * PI * x).collect()
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    /// Get the start frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        self.f[0]
    }

    /// Get the stop frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        self.f[self.f.len() - 1]
    }

    /// Get the current unit
    #[inline]
    pub fn unit(&self) -> FrequencyUnit {
        self.unit
    }

    /// Get the sweep type
    #[inline]
    pub fn sweep_type(&self) -> SweepType {
        self.sweep_type
    }

    /// Get the multiplier for the current unit
    pub fn multiplier(&self) -> f64 {
        self.unit.multiplier()
    }
}

/// `npoints` values from `lo` to `hi` inclusive; a single point sits at `lo`
fn evenly_spaced(lo: f64, hi: f64, npoints: usize) -> Vec<f64> {
    if npoints == 1 {
        return vec![lo];
    }
    let step = (hi - lo) / (npoints - 1) as f64;
    (0..npoints).map(|i| lo + i as f64 * step).collect()
}

fn check_span(
    lo_name: &str,
    lo: f64,
    hi_name: &str,
    hi: f64,
    npoints: usize,
) -> Result<(), DomainError> {
    if npoints == 0 {
        return Err(DomainError::EmptyGrid);
    }
    if npoints > 1 && !(hi > lo) {
        return Err(DomainError::InvalidSweep(format!(
            "{} ({}) must be greater than {} ({})",
            hi_name, hi, lo_name, lo
        )));
    }
    Ok(())
}

impl AsRef<[f64]> for FrequencyGrid {
    fn as_ref(&self) -> &[f64] {
        &self.f
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_create_linear_sweep() {
        let grid =
            FrequencyGrid::new(1.0, 10.0, 10, FrequencyUnit::KHz, SweepType::Linear).unwrap();

        // Check that frequency is in Hz internally
        assert_eq!(grid.npoints(), 10);
        assert_relative_eq!(grid.start(), 1e3, epsilon = 1e-9);
        assert_relative_eq!(grid.stop(), 10e3, epsilon = 1e-9);

        let f_scaled = grid.f_scaled();
        assert_relative_eq!(f_scaled[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(f_scaled[9], 10.0, epsilon = 1e-10);
    }

    #[test]
    fn test_create_log_sweep() {
        let grid = FrequencyGrid::new(0.1, 100.0, 50, FrequencyUnit::Hz, SweepType::Log).unwrap();

        assert_relative_eq!(grid.start(), 0.1, epsilon = 1e-12);
        assert_relative_eq!(grid.stop(), 100.0, epsilon = 1e-9);

        // Check that ratio between adjacent points is constant
        let ratios: Vec<f64> = grid.f().windows(2).map(|w| w[1] / w[0]).collect();
        for r in &ratios[1..] {
            assert_relative_eq!(*r, ratios[0], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_logspace_hits_decades() {
        let grid = FrequencyGrid::logspace(-1.0, 5.0, 7).unwrap();
        let expected = [0.1, 1.0, 10.0, 100.0, 1e3, 1e4, 1e5];
        for (f, e) in grid.f().iter().zip(expected.iter()) {
            assert_relative_eq!(*f, *e, max_relative = 1e-12);
        }
        assert_eq!(grid.f()[1], 1.0);
        assert_eq!(grid.sweep_type(), SweepType::Log);
    }

    #[test]
    fn test_from_f() {
        let grid = FrequencyGrid::from_f(vec![1.0, 5.0, 200.0], FrequencyUnit::KHz).unwrap();

        assert_eq!(grid.npoints(), 3);
        assert_eq!(grid.sweep_type(), SweepType::Explicit);
        assert_relative_eq!(grid.f()[0], 1e3, epsilon = 1e-10);
        assert_relative_eq!(grid.f()[1], 5e3, epsilon = 1e-10);
        assert_relative_eq!(grid.f()[2], 200e3, epsilon = 1e-10);
    }

    #[test]
    fn test_rejects_invalid_samples() {
        assert_eq!(
            FrequencyGrid::from_f(vec![], FrequencyUnit::Hz),
            Err(DomainError::EmptyGrid)
        );
        assert!(matches!(
            FrequencyGrid::from_f(vec![0.0, 1.0], FrequencyUnit::Hz),
            Err(DomainError::InvalidFrequency { index: 0, .. })
        ));
        assert!(matches!(
            FrequencyGrid::from_f(vec![1.0, f64::NAN], FrequencyUnit::Hz),
            Err(DomainError::InvalidFrequency { index: 1, .. })
        ));
        assert!(matches!(
            FrequencyGrid::from_f(vec![1.0, 10.0, 10.0], FrequencyUnit::Hz),
            Err(DomainError::NonIncreasingFrequency { index: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_sweep_bounds() {
        assert!(matches!(
            FrequencyGrid::new(10.0, 1.0, 5, FrequencyUnit::Hz, SweepType::Log),
            Err(DomainError::InvalidSweep(_))
        ));
        assert!(matches!(
            FrequencyGrid::new(0.0, 1.0, 5, FrequencyUnit::Hz, SweepType::Linear),
            Err(DomainError::InvalidFrequency { index: 0, .. })
        ));
        assert_eq!(
            FrequencyGrid::logspace(-1.0, 5.0, 0),
            Err(DomainError::EmptyGrid)
        );
    }

    #[test]
    fn test_omega() {
        let grid = FrequencyGrid::from_f(vec![1.0, 2.0], FrequencyUnit::Hz).unwrap();
        let omega = grid.omega();
        assert_relative_eq!(omega[0], 2.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(omega[1], 4.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_frequency_unit_from_str() {
        assert_eq!(FrequencyUnit::from_str("khz"), Some(FrequencyUnit::KHz));
        assert_eq!(FrequencyUnit::from_str("HZ"), Some(FrequencyUnit::Hz));
        assert_eq!(FrequencyUnit::from_str("invalid"), None);
        assert_eq!(FrequencyUnit::from_str("mhz"), None);
        assert_eq!(SweepType::from_str("lin"), Some(SweepType::Linear));
        assert_eq!(SweepType::from_str("Log"), Some(SweepType::Log));
    }
}
