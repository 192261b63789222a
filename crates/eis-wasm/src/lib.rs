//! WASM bindings for eis-core
//!
//! This module exposes the stack impedance model to JavaScript/WASM so a
//! browser front end can drive the sweep and plot the curves.

use wasm_bindgen::prelude::*;

mod frequency;
mod stack;

pub use frequency::WasmFrequencyGrid;
pub use stack::WasmStack;

/// Get the library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
