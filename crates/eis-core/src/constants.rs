//! Numerical constants for impedance calculations
//!
//! Reference frequencies, default sweep bounds and default cell values.

/// Frequency at which the diagnostic impedance magnitude is reported (Hz).
pub const REFERENCE_FREQUENCY_HZ: f64 = 1.0;

/// Lower decade of the default log sweep (10^-1 = 0.1 Hz).
pub const DEFAULT_START_DECADE: f64 = -1.0;

/// Upper decade of the default log sweep (10^5 = 100 kHz).
pub const DEFAULT_STOP_DECADE: f64 = 5.0;

/// Number of points in the default log sweep.
pub const DEFAULT_NPOINTS: usize = 300;

/// Number of cells in the default stack.
pub const DEFAULT_NCELLS: usize = 3;

/// Default series resistance (Ω).
pub const DEFAULT_RS: f64 = 0.1;

/// Default charge-transfer resistance (Ω).
pub const DEFAULT_RCT: f64 = 1.0;

/// Default double-layer capacitance (F).
pub const DEFAULT_CDL: f64 = 1e-4;

/// Default Warburg coefficient (Ω·s^-1/2).
pub const DEFAULT_SIGMA: f64 = 0.1;
