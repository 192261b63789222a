//! Simulation configuration
//!
//! A [`SimulationConfig`] describes one stack simulation: the frequency sweep
//! and the ordered list of cells. It can be written in TOML:
//!
//! ```toml
//! [sweep]
//! start = 0.1
//! stop = 100000.0
//! npoints = 300
//! unit = "Hz"
//! sweep_type = "log"
//!
//! [[cells]]
//! rs = 0.1
//! rct = 1.0
//! cdl = 1e-4
//! sigma = 0.1
//! ```
//!
//! Omitted fields take the defaults of a three-cell stack swept from 0.1 Hz
//! to 100 kHz.

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::constants::{DEFAULT_NCELLS, DEFAULT_NPOINTS, DEFAULT_START_DECADE, DEFAULT_STOP_DECADE};
use crate::error::DomainError;
use crate::frequency::{FrequencyGrid, FrequencyUnit, SweepType};
use crate::model::CellParameters;
use crate::stack::{compute_stack, StackResult};

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Frequency sweep description
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Start frequency in `unit`
    pub start: f64,
    /// Stop frequency in `unit`
    pub stop: f64,
    /// Number of frequency points
    pub npoints: usize,
    pub unit: FrequencyUnit,
    pub sweep_type: SweepType,
}

impl SweepConfig {
    /// Build the frequency grid described by this sweep
    pub fn grid(&self) -> Result<FrequencyGrid, DomainError> {
        FrequencyGrid::new(self.start, self.stop, self.npoints, self.unit, self.sweep_type)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 10f64.powf(DEFAULT_START_DECADE),
            stop: 10f64.powf(DEFAULT_STOP_DECADE),
            npoints: DEFAULT_NPOINTS,
            unit: FrequencyUnit::Hz,
            sweep_type: SweepType::Log,
        }
    }
}

/// One stack simulation: sweep plus ordered cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub sweep: SweepConfig,
    pub cells: Vec<CellParameters>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sweep: SweepConfig::default(),
            cells: vec![CellParameters::default(); DEFAULT_NCELLS],
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading simulation config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Build the grid and run the stack computation
    pub fn run(&self) -> Result<StackResult, DomainError> {
        let grid = self.sweep.grid()?;
        compute_stack(grid.f(), &self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_matches_reference_sweep() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.cells.len(), 3);
        let grid = cfg.sweep.grid().unwrap();
        assert_eq!(grid.npoints(), 300);
        assert_relative_eq!(grid.start(), 0.1, max_relative = 1e-12);
        assert_relative_eq!(grid.stop(), 1e5, max_relative = 1e-12);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let cfg = SimulationConfig::from_toml_str(
            r#"
            [sweep]
            npoints = 10

            [[cells]]
            rct = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sweep.npoints, 10);
        assert_eq!(cfg.sweep.sweep_type, SweepType::Log);
        assert_eq!(cfg.cells.len(), 1);
        assert_eq!(cfg.cells[0].rct, 2.5);
        assert_eq!(cfg.cells[0].rs, 0.1);
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = SimulationConfig::default();
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(SimulationConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn test_bad_toml() {
        let err = SimulationConfig::from_toml_str("sweep = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_run_rejects_empty_cells() {
        let cfg = SimulationConfig {
            cells: vec![],
            ..Default::default()
        };
        assert_eq!(cfg.run(), Err(DomainError::EmptyStack));
    }
}
