//! Mathematical functions module
//!
//! Provides the scalar conversions used by curve projections.

pub mod conversions;

pub use conversions::*;
