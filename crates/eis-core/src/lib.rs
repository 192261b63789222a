//! eis-core: Impedance model for series battery stacks
//!
//! Computes the small-signal AC impedance of battery cells described by a
//! Randles circuit with a Warburg diffusion element, sums the cells of a
//! series stack, and extracts per-cell diagnostics.
//!
//! ## Modules
//!
//! - `frequency` - Frequency grid representation
//! - `model` - Single-cell equivalent circuit and impedance curves
//! - `stack` - Series aggregation and diagnostics
//! - `config` - TOML simulation configuration
//! - `math` - Scalar conversions (dB, phase)
//!
//! ## Example
//!
//! ```
//! use eis_core::{compute_stack, CellParameters, FrequencyGrid};
//!
//! let grid = FrequencyGrid::logspace(-1.0, 5.0, 300).unwrap();
//! let cells = [
//!     CellParameters::new(0.1, 1.0, 1e-4, 0.1).unwrap(),
//!     CellParameters::new(0.12, 1.4, 2e-4, 0.15).unwrap(),
//! ];
//! let result = compute_stack(grid.f(), &cells).unwrap();
//! for (i, d) in result.diagnostics.iter().enumerate() {
//!     println!("cell {}: |Z(1 Hz)| = {:.2} ohm", i + 1, d.magnitude_at_1hz);
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod frequency;
pub mod math;
pub mod model;
pub mod stack;

pub use error::DomainError;
pub use frequency::FrequencyGrid;
pub use model::{compute_cell_impedance, CellParameters, ImpedanceCurve};
pub use stack::{compute_stack, CellDiagnostic, StackResult};
