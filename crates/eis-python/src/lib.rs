//! Python bindings for eis-core
//!
//! This module exposes the stack impedance model to Python via PyO3, so a
//! Python front end can drive the sweep and plot the results.
//!
//! ## Classes
//!
//! - `FrequencyGrid` - Validated frequency sweep
//! - `CellParameters` - Per-cell equivalent-circuit values
//! - `ImpedanceCurve` - Complex impedance with Nyquist/Bode projections
//! - `CellDiagnostic` - Per-cell scalar diagnostics
//! - `StackResult` - Stack curve, cell curves and diagnostics
//!
//! ## Functions
//!
//! - `compute_cell_impedance(f, cell)`
//! - `compute_stack(f, cells)`

use pyo3::prelude::*;

mod error;
mod frequency;
mod model;
mod stack;

pub use frequency::PyFrequencyGrid;
pub use model::{PyCellParameters, PyImpedanceCurve};
pub use stack::{PyCellDiagnostic, PyStackResult};

/// eis_python - Battery stack impedance model implemented in Rust
///
/// Example:
///     >>> import eis_python as eis
///     >>> grid = eis.FrequencyGrid.logspace(-1, 5, 300)
///     >>> cells = [eis.CellParameters(0.1, 1.0, 1e-4, 0.1)] * 3
///     >>> result = eis.compute_stack(grid.f, cells)
///     >>> result.stack_curve.db
#[pymodule]
fn eis_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Add classes with clean names (no Py prefix in Python)
    m.add_class::<PyFrequencyGrid>()?;
    m.add_class::<PyCellParameters>()?;
    m.add_class::<PyImpedanceCurve>()?;
    m.add_class::<PyCellDiagnostic>()?;
    m.add_class::<PyStackResult>()?;

    m.add_function(wrap_pyfunction!(model::compute_cell_impedance, m)?)?;
    m.add_function(wrap_pyfunction!(stack::compute_stack, m)?)?;

    // Add module version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
