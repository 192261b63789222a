//! WASM bindings for FrequencyGrid class

use eis_core::frequency::{FrequencyGrid, FrequencyUnit, SweepType};
use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

/// Frequency sweep for WASM
#[wasm_bindgen]
pub struct WasmFrequencyGrid {
    inner: FrequencyGrid,
}

#[wasm_bindgen]
impl WasmFrequencyGrid {
    /// Create a new frequency sweep
    ///
    /// @param start - Start frequency in the specified unit
    /// @param stop - Stop frequency in the specified unit
    /// @param npoints - Number of frequency points
    /// @param unit - Frequency unit ('Hz' or 'kHz'), default 'Hz'
    /// @param sweep_type - Sweep type ('linear' or 'log'), default 'log'
    #[wasm_bindgen(constructor)]
    pub fn new(
        start: f64,
        stop: f64,
        npoints: usize,
        unit: Option<String>,
        sweep_type: Option<String>,
    ) -> Result<WasmFrequencyGrid, JsValue> {
        let unit = unit.as_deref().unwrap_or("Hz");
        let freq_unit = FrequencyUnit::from_str(unit)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid unit: {}", unit)))?;

        let sweep_type = sweep_type.as_deref().unwrap_or("log");
        let sweep = SweepType::from_str(sweep_type)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid sweep type: {}", sweep_type)))?;

        FrequencyGrid::new(start, stop, npoints, freq_unit, sweep)
            .map(|inner| WasmFrequencyGrid { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Log sweep from 10^startDecade to 10^stopDecade Hz
    #[wasm_bindgen(js_name = logspace)]
    pub fn logspace(
        start_decade: f64,
        stop_decade: f64,
        npoints: usize,
    ) -> Result<WasmFrequencyGrid, JsValue> {
        FrequencyGrid::logspace(start_decade, stop_decade, npoints)
            .map(|inner| WasmFrequencyGrid { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get frequency array in Hz as Float64Array
    #[wasm_bindgen(getter)]
    pub fn f(&self) -> Float64Array {
        Float64Array::from(self.inner.f())
    }

    /// Get scaled frequency array as Float64Array
    #[wasm_bindgen(getter)]
    pub fn f_scaled(&self) -> Float64Array {
        let f_scaled = self.inner.f_scaled();
        Float64Array::from(f_scaled.as_slice())
    }

    /// Start frequency in Hz
    #[wasm_bindgen(getter)]
    pub fn start(&self) -> f64 {
        self.inner.start()
    }

    /// Stop frequency in Hz
    #[wasm_bindgen(getter)]
    pub fn stop(&self) -> f64 {
        self.inner.stop()
    }

    /// Number of frequency points
    #[wasm_bindgen(getter)]
    pub fn npoints(&self) -> usize {
        self.inner.npoints()
    }

    /// Frequency unit as string
    #[wasm_bindgen(getter)]
    pub fn unit(&self) -> String {
        self.inner.unit().label().to_string()
    }
}

impl WasmFrequencyGrid {
    /// Get the inner FrequencyGrid reference
    pub fn inner(&self) -> &FrequencyGrid {
        &self.inner
    }
}
