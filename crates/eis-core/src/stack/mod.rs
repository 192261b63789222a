//! Stack module - series aggregation and diagnostics
//!
//! Combines per-cell curves into a stack curve and extracts scalar
//! diagnostics for each cell.

mod core;
mod diagnostics;

pub use self::core::{compute_stack, StackResult};
pub use diagnostics::{diagnose_cell, index_tau, nearest_index, peak_index, CellDiagnostic};
