//! Circuit element impedances
//!
//! Each function takes the angular frequency `omega` in rad/s. Callers must
//! pass `omega > 0`; the cell model validates this before calling in.

use num_complex::Complex64;

/// Ideal capacitor: `1 / (j*omega*C)`
#[inline]
pub fn capacitor_impedance(omega: f64, c: f64) -> Complex64 {
    Complex64::new(0.0, -1.0 / (omega * c))
}

/// Charge-transfer resistance in parallel with the double-layer capacitance
///
/// Inverts the branch admittance `1/Rct + j*omega*Cdl` once. Going through
/// the capacitor impedance first loses the result to `0/0` when `omega*Cdl`
/// is outside roughly `1e-154..1e154`; this form tends to 0 at high
/// frequency and to `Rct` at low frequency.
#[inline]
pub fn charge_transfer_impedance(omega: f64, rct: f64, cdl: f64) -> Complex64 {
    Complex64::new(1.0 / rct, omega * cdl).inv()
}

/// Semi-infinite Warburg diffusion element: `sigma / sqrt(j*omega)`
///
/// Uses the principal square root, so for `omega > 0` both the real part and
/// the magnitude of the imaginary part equal `sigma / sqrt(2*omega)`.
#[inline]
pub fn warburg_impedance(omega: f64, sigma: f64) -> Complex64 {
    Complex64::new(sigma, 0.0) / Complex64::new(0.0, omega).sqrt()
}

/// Parallel combination of two impedances: `1 / (1/za + 1/zb)`
#[inline]
pub fn parallel(za: Complex64, zb: Complex64) -> Complex64 {
    (za.inv() + zb.inv()).inv()
}
