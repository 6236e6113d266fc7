use pss78::{ConversionResult, STANDARD_SEAWATER_CONDUCTIVITY_S_M, salinity_from_conductivity};

#[test]
fn unesco_check_value_matches() {
    // UNESCO (1983) calibration point: conductivity ratio 1.888091 at
    // T=40 °C, P=10000 dbar gives S=40.00000. The check value is stated
    // as a ratio, so it is scaled by C(35,15,0) before entering the S/m
    // interface.
    let conductivity = 1.888091 * STANDARD_SEAWATER_CONDUCTIVITY_S_M;
    let result = salinity_from_conductivity(conductivity, 40.0, 10_000.0);
    let s = result.salinity().expect("check value must be valid");
    assert!((s - 40.0).abs() <= 1e-4, "salinity was {s}");
}

#[test]
fn standard_seawater_yields_35() {
    // Conductivity ratio of exactly 1 at T=15 °C, P=0 dbar.
    let result = salinity_from_conductivity(4.2914, 15.0, 0.0);
    let s = result.salinity().expect("standard seawater must be valid");
    assert!((s - 35.0).abs() <= 1e-3, "salinity was {s}");
}

#[test]
fn conductivity_at_threshold_is_invalid() {
    let result = salinity_from_conductivity(0.2, 20.0, 0.0);
    assert_eq!(result, ConversionResult::Invalid);
    assert_eq!(result.salinity(), None);
    assert!(!result.is_valid());
}

#[test]
fn conductivity_just_above_threshold_is_valid() {
    let result = salinity_from_conductivity(0.2001, 20.0, 0.0);
    assert!(result.is_valid());
    let s = result.salinity().unwrap();
    assert!(s.is_finite());
}

#[test]
fn repeated_calls_are_bit_identical() {
    for &(c, t, p) in &[
        (1.888091, 40.0, 10_000.0),
        (4.2914, 15.0, 0.0),
        (3.5, 20.0, 500.0),
        (0.2001, -2.0, 0.0),
    ] {
        let a = salinity_from_conductivity(c, t, p).salinity().unwrap();
        let b = salinity_from_conductivity(c, t, p).salinity().unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn salinity_increases_with_conductivity_at_fixed_t_and_p() {
    // T=20 °C, P=0 dbar, conductivity swept over the typical ocean range.
    let mut prev = f64::NEG_INFINITY;
    let mut c = 3.0;
    while c <= 6.0 {
        let s = salinity_from_conductivity(c, 20.0, 0.0)
            .salinity()
            .unwrap();
        assert!(s > prev, "salinity not increasing at conductivity {c}");
        prev = s;
        c += 0.1;
    }
}

#[test]
fn negative_corrected_ratio_still_returns_a_finite_value() {
    // A large negative pressure drives the pressure correction below -1,
    // flipping the sign of the corrected ratio before the square root.
    let result = salinity_from_conductivity(4.2914, 20.0, -1.0e5);
    let s = result.salinity().expect("guarded sqrt must still produce a value");
    assert!(s.is_finite());
}
