//! PSS-78 polynomial terms and constants.
//!
//! This module provides the polynomial building blocks of the Practical
//! Salinity Scale 1978 conversion as defined by Lewis (1980) and UNESCO
//! technical papers in marine science 44 (1983), "Algorithms for
//! computation of fundamental properties of seawater":
//!
//! - `rt35`: temperature variation of the conductivity ratio at zero
//!   pressure, C(35,T,0)/C(35,15,0)
//! - `pressure_correction`: pressure term (A1–A3 constants, Lewis 1980)
//! - `coeff_b`, `coeff_a`: temperature coefficients combined with the
//!   pressure term (B1–B4 constants, Lewis 1980)
//! - `practical_salinity`: the PSS-78 salinity polynomial itself
//!
//! Units conventions:
//! - Conductivity is S/m (1 S/m = 10 mS/cm; Odyssey-style loggers report
//!   mS/cm, see [`S_M_PER_MS_CM`])
//! - Temperature is °C on the IPTS-68 scale
//! - Pressure is decibars
//!
//! All functions here are pure scalar arithmetic with no error paths; the
//! validity guard lives in [`crate::salinity::converter`]. Accuracy is
//! specified for oceanographic conditions (roughly -2..35 °C and
//! 0..10000 dbar); outside that range the polynomials still evaluate but
//! carry no accuracy claim.

/// Conductivity of standard seawater C(35,15,0) in S/m.
///
/// Dividing a measured conductivity by this value yields the conductivity
/// ratio the PSS-78 polynomials operate on.
pub const STANDARD_SEAWATER_CONDUCTIVITY_S_M: f64 = 4.2914;

/// Conductivity floor (S/m) below which the PSS-78 conversion is
/// unreliable; corresponds to a conductivity ratio of roughly 5e-4, the
/// floor of the SAL78 reference routine.
pub const MIN_VALID_CONDUCTIVITY_S_M: f64 = 0.2;

/// Unit pre-conversion factor for raw logger values: S/m per mS/cm.
///
/// Used by the batch adapter only; the conversion core always takes S/m.
pub const S_M_PER_MS_CM: f64 = 0.1;

/// Temperature variation of the conductivity ratio at zero pressure,
/// C(35,T,0)/C(35,15,0). `t` is °C (IPTS-68). Equals 1 at T = 15 °C.
pub fn rt35(t: f64) -> f64 {
    (((1.0031e-9 * t - 6.9698e-7) * t + 1.104259e-4) * t + 2.00564e-2) * t + 0.6766097
}

/// Pressure correction term C(P) for pressure `p` in decibars
/// (A1–A3 constants, Lewis 1980). Zero at surface pressure.
pub fn pressure_correction(p: f64) -> f64 {
    ((3.989e-15 * p - 6.370e-10) * p + 2.070e-5) * p
}

/// Temperature coefficient B(T) of the pressure-correction denominator.
pub fn coeff_b(t: f64) -> f64 {
    (4.464e-4 * t + 3.426e-2) * t + 1.0
}

/// Temperature coefficient A(T) of the pressure-correction denominator
/// (B3/B4 constants, Lewis 1980).
pub fn coeff_a(t: f64) -> f64 {
    -3.107e-3 * t + 0.4215
}

/// PSS-78 salinity polynomial with temperature correction.
///
/// `xr` is the square root of the corrected conductivity ratio RT and
/// `xt` is `T - 15.0`. At `xr = 1`, `xt = 0` (standard seawater) the
/// polynomial returns exactly 35.0000.
pub fn practical_salinity(xr: f64, xt: f64) -> f64 {
    ((((2.7081 * xr - 7.0261) * xr + 14.0941) * xr + 25.3851) * xr - 0.1692) * xr
        + 0.0080
        + (xt / (1.0 + 0.0162 * xt))
            * (((((-0.0144 * xr + 0.0636) * xr - 0.0375) * xr - 0.0066) * xr - 0.0056) * xr
                + 0.0005)
}
