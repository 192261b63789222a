//! WASM bindings for stack computation

use eis_core::{compute_stack, CellParameters, ImpedanceCurve, StackResult};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

use crate::frequency::WasmFrequencyGrid;

/// Number of values per cell in the flattened parameter array
const PARAMS_PER_CELL: usize = 4;

/// Series stack simulation result for WASM
#[wasm_bindgen]
pub struct WasmStack {
    inner: StackResult,
}

fn to_array(values: ndarray::Array1<f64>) -> Float64Array {
    let flat: Vec<f64> = values.iter().cloned().collect();
    Float64Array::from(flat.as_slice())
}

fn nyquist_y(curve: &ImpedanceCurve) -> Float64Array {
    let flat: Vec<f64> = curve.iter().map(|z| -z.im).collect();
    Float64Array::from(flat.as_slice())
}

#[wasm_bindgen]
impl WasmStack {
    /// Compute a series stack
    ///
    /// @param grid - Frequency sweep shared by every cell
    /// @param params - Flattened [rs, rct, cdl, sigma] per cell, in stack order
    #[wasm_bindgen(constructor)]
    pub fn new(grid: &WasmFrequencyGrid, params: &[f64]) -> Result<WasmStack, JsValue> {
        if params.len() % PARAMS_PER_CELL != 0 {
            return Err(JsValue::from_str(&format!(
                "Invalid parameter array: length {} is not a multiple of {}",
                params.len(),
                PARAMS_PER_CELL
            )));
        }

        let cells: Vec<CellParameters> = params
            .chunks_exact(PARAMS_PER_CELL)
            .map(|c| CellParameters {
                rs: c[0],
                rct: c[1],
                cdl: c[2],
                sigma: c[3],
            })
            .collect();

        compute_stack(grid.inner().f(), &cells)
            .map(|inner| WasmStack { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Number of cells
    #[wasm_bindgen(getter)]
    pub fn ncells(&self) -> usize {
        self.inner.ncells()
    }

    /// Stack real part (Ohm)
    #[wasm_bindgen(js_name = getStackRe)]
    pub fn get_stack_re(&self) -> Float64Array {
        to_array(self.inner.stack_curve.re())
    }

    /// Stack -Im(Z) for Nyquist plots (Ohm)
    #[wasm_bindgen(js_name = getStackNyquistY)]
    pub fn get_stack_nyquist_y(&self) -> Float64Array {
        nyquist_y(&self.inner.stack_curve)
    }

    /// Stack magnitude in dB
    #[wasm_bindgen(js_name = getStackDb)]
    pub fn get_stack_db(&self) -> Float64Array {
        to_array(self.inner.stack_curve.db())
    }

    /// Stack phase in degrees
    #[wasm_bindgen(js_name = getStackDeg)]
    pub fn get_stack_deg(&self) -> Float64Array {
        to_array(self.inner.stack_curve.deg())
    }

    /// Cell real part (Ohm)
    /// @param i - Cell index (0-based)
    #[wasm_bindgen(js_name = getCellRe)]
    pub fn get_cell_re(&self, i: usize) -> Result<Float64Array, JsValue> {
        self.cell(i).map(|c| to_array(c.re()))
    }

    /// Cell -Im(Z) for Nyquist plots (Ohm)
    #[wasm_bindgen(js_name = getCellNyquistY)]
    pub fn get_cell_nyquist_y(&self, i: usize) -> Result<Float64Array, JsValue> {
        self.cell(i).map(nyquist_y)
    }

    /// Cell magnitude in dB
    #[wasm_bindgen(js_name = getCellDb)]
    pub fn get_cell_db(&self, i: usize) -> Result<Float64Array, JsValue> {
        self.cell(i).map(|c| to_array(c.db()))
    }

    /// Cell phase in degrees
    #[wasm_bindgen(js_name = getCellDeg)]
    pub fn get_cell_deg(&self, i: usize) -> Result<Float64Array, JsValue> {
        self.cell(i).map(|c| to_array(c.deg()))
    }

    /// |Z| at the sample closest to 1 Hz for each cell
    #[wasm_bindgen(js_name = getMagnitudeAt1Hz)]
    pub fn get_magnitude_at_1hz(&self) -> Float64Array {
        let flat: Vec<f64> = self
            .inner
            .diagnostics
            .iter()
            .map(|d| d.magnitude_at_1hz)
            .collect();
        Float64Array::from(flat.as_slice())
    }

    /// Index-based relaxation estimate for each cell (approximation)
    #[wasm_bindgen(js_name = getEstimatedTau)]
    pub fn get_estimated_tau(&self) -> Float64Array {
        let flat: Vec<f64> = self
            .inner
            .diagnostics
            .iter()
            .map(|d| d.estimated_tau)
            .collect();
        Float64Array::from(flat.as_slice())
    }

    /// Rct * Cdl for each cell (s)
    #[wasm_bindgen(js_name = getPhysicalTau)]
    pub fn get_physical_tau(&self) -> Float64Array {
        let flat: Vec<f64> = self
            .inner
            .diagnostics
            .iter()
            .map(|d| d.physical_tau)
            .collect();
        Float64Array::from(flat.as_slice())
    }
}

impl WasmStack {
    /// Get the inner StackResult reference
    pub fn inner(&self) -> &StackResult {
        &self.inner
    }

    fn cell(&self, i: usize) -> Result<&ImpedanceCurve, JsValue> {
        self.inner
            .cell_curves
            .get(i)
            .ok_or_else(|| JsValue::from_str(&format!("Cell index {} out of range", i)))
    }
}
