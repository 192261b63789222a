//! Unit conversion functions
//!
//! Conversions between complex impedance values and the scalar quantities
//! shown on Bode plots (magnitude, dB, phase).

use num_complex::Complex64;
use std::f64::consts::PI;

/// Convert complex number to magnitude
#[inline]
pub fn complex_2_magnitude(z: Complex64) -> f64 {
    z.norm()
}

/// Convert complex number to dB (20*log10(|z|))
#[inline]
pub fn complex_2_db(z: Complex64) -> f64 {
    magnitude_2_db(z.norm())
}

/// Convert complex number to phase in radians
#[inline]
pub fn complex_2_radian(z: Complex64) -> f64 {
    z.arg()
}

/// Convert complex number to phase in degrees
#[inline]
pub fn complex_2_degree(z: Complex64) -> f64 {
    radian_2_degree(z.arg())
}

/// Convert magnitude to dB (20*log10(mag))
#[inline]
pub fn magnitude_2_db(mag: f64) -> f64 {
    20.0 * mag.log10()
}

/// Convert dB to magnitude (10^(dB/20))
#[inline]
pub fn db_2_magnitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert radians to degrees
#[inline]
pub fn radian_2_degree(rad: f64) -> f64 {
    rad * 180.0 / PI
}
