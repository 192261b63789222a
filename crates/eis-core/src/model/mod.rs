//! Model module - single-cell equivalent circuit
//!
//! Provides the cell parameter set, the element impedances, and the
//! computation of an impedance curve over a frequency grid.

mod cell;
mod curve;
mod elements;
mod params;

pub use cell::{cell_impedance_at, compute_cell_impedance};
pub use curve::ImpedanceCurve;
pub use elements::{
    capacitor_impedance, charge_transfer_impedance, parallel, warburg_impedance,
};
pub use params::CellParameters;
