use crate::pss78::{
    MIN_VALID_CONDUCTIVITY_S_M, STANDARD_SEAWATER_CONDUCTIVITY_S_M, coeff_a, coeff_b,
    practical_salinity, pressure_correction, rt35,
};

/// Result of a conductivity-to-salinity conversion.
///
/// The two variants express the two possible outcomes of
/// [`salinity_from_conductivity`]:
///
/// - `Valid(f64)` — a PSS-78 practical salinity value.
/// - `Invalid` — the conductivity was at or below the reliability floor
///   (0.2 S/m); no salinity value exists for this reading.
///
/// `Invalid` is a designed terminal branch, not an error: callers must
/// branch on it (or use [`ConversionResult::salinity`]) before using the
/// value. There is deliberately no numeric sentinel for the invalid case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionResult {
    /// A PSS-78 practical salinity value.
    Valid(f64),
    /// Conductivity at or below 0.2 S/m; no salinity produced.
    Invalid,
}

impl ConversionResult {
    /// `true` when the conversion produced a reliable salinity value.
    pub fn is_valid(&self) -> bool {
        matches!(self, ConversionResult::Valid(_))
    }

    /// The salinity value, or `None` for an invalid reading.
    pub fn salinity(&self) -> Option<f64> {
        match self {
            ConversionResult::Valid(s) => Some(*s),
            ConversionResult::Invalid => None,
        }
    }
}

/// Convert a seawater conductivity measurement to PSS-78 practical salinity.
///
/// Implements the UNESCO (1983) SAL78 algorithm in the conductivity-to-
/// salinity direction: the measured conductivity is turned into a
/// conductivity ratio, corrected for temperature ([`rt35`]) and pressure
/// ([`pressure_correction`] combined through [`coeff_a`]/[`coeff_b`]), and
/// the square root of the corrected ratio is fed to the PSS-78 polynomial
/// [`practical_salinity`].
///
/// Units:
/// - `conductivity`: S/m (1 S/m = 10 mS/cm)
/// - `temperature`: °C, IPTS-68
/// - `pressure`: decibars
///
/// Check value: a conductivity ratio of 1.888091 (conductivity
/// 1.888091 × 4.2914 S/m) at T=40 °C, P=10000 dbar returns
/// `Valid(40.00000)` (UNESCO 1983 calibration point).
///
/// A conductivity at or below 0.2 S/m returns
/// [`ConversionResult::Invalid`]; every other input produces a numeric
/// result. Temperature or pressure outside the oceanographic range
/// (roughly -2..35 °C, 0..10000 dbar) is not rejected — the polynomials
/// still evaluate but their accuracy is undefined there. The magnitude of
/// the corrected ratio is taken before the square root, so even
/// pathological extrapolated inputs yield a finite value rather than a
/// NaN. The function is pure: identical inputs give bit-identical results.
pub fn salinity_from_conductivity(
    conductivity: f64,
    temperature: f64,
    pressure: f64,
) -> ConversionResult {
    if conductivity <= MIN_VALID_CONDUCTIVITY_S_M {
        return ConversionResult::Invalid;
    }

    let xt = temperature - 15.0;
    let ratio = conductivity / STANDARD_SEAWATER_CONDUCTIVITY_S_M;
    let rt = ratio
        / (rt35(temperature)
            * (1.0
                + pressure_correction(pressure)
                    / (coeff_b(temperature) + coeff_a(temperature) * ratio)));
    // Magnitude before the square root: extrapolated inputs can push the
    // corrected ratio negative.
    let xr = rt.abs().sqrt();

    ConversionResult::Valid(practical_salinity(xr, xt))
}
