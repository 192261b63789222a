//! Per-cell equivalent-circuit parameters

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CDL, DEFAULT_RCT, DEFAULT_RS, DEFAULT_SIGMA};
use crate::error::{check_positive, DomainError};

/// Physical parameters of one cell: `Rs + (Rct || Cdl) + Zw(sigma)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellParameters {
    /// Series (ohmic) resistance in Ω
    pub rs: f64,
    /// Charge-transfer resistance in Ω
    pub rct: f64,
    /// Double-layer capacitance in F
    pub cdl: f64,
    /// Warburg coefficient in Ω·s^-1/2
    pub sigma: f64,
}

impl CellParameters {
    /// Create a validated parameter set
    ///
    /// # Example
    /// ```
    /// use eis_core::CellParameters;
    /// let cell = CellParameters::new(0.1, 1.0, 1e-4, 0.1).unwrap();
    /// assert!(CellParameters::new(0.1, 0.0, 1e-4, 0.1).is_err());
    /// # let _ = cell;
    /// ```
    pub fn new(rs: f64, rct: f64, cdl: f64, sigma: f64) -> Result<Self, DomainError> {
        let params = Self { rs, rct, cdl, sigma };
        params.validate()?;
        Ok(params)
    }

    /// Check that every field is strictly positive and finite
    ///
    /// Fields are checked in declaration order; the first offender is reported.
    pub fn validate(&self) -> Result<(), DomainError> {
        check_positive("rs", self.rs)?;
        check_positive("rct", self.rct)?;
        check_positive("cdl", self.cdl)?;
        check_positive("sigma", self.sigma)?;
        Ok(())
    }

    /// Physical relaxation time of the charge-transfer arc, `Rct * Cdl` (s)
    #[inline]
    pub fn time_constant(&self) -> f64 {
        self.rct * self.cdl
    }

    /// Frequency at the apex of the charge-transfer semicircle (Hz)
    #[inline]
    pub fn characteristic_frequency(&self) -> f64 {
        1.0 / (2.0 * std::f64::consts::PI * self.time_constant())
    }
}

impl Default for CellParameters {
    fn default() -> Self {
        Self {
            rs: DEFAULT_RS,
            rct: DEFAULT_RCT,
            cdl: DEFAULT_CDL,
            sigma: DEFAULT_SIGMA,
        }
    }
}
