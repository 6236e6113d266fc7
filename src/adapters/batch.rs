use crate::models::{BatchOptions, ConductivityUnit, Reading, ReadingRecord, ReadingStatus};
use crate::pss78::S_M_PER_MS_CM;
use crate::salinity::converter::{ConversionResult, salinity_from_conductivity};

/// Normalize a raw conductivity value to S/m, the unit the conversion
/// core expects.
pub fn conductivity_s_m(raw: f64, unit: ConductivityUnit) -> f64 {
    match unit {
        ConductivityUnit::SPerM => raw,
        ConductivityUnit::MsPerCm => raw * S_M_PER_MS_CM,
    }
}

/// Convert a single logged reading to a salinity record.
///
/// A reading without a conductivity value becomes a
/// [`ReadingStatus::NoData`] record without touching the converter; an
/// unreliable measurement (conductivity at or below 0.2 S/m) becomes
/// [`ReadingStatus::Invalid`]. Neither case carries a salinity number.
pub fn convert_reading(reading: &Reading, opts: &BatchOptions) -> ReadingRecord {
    let Some(raw) = reading.conductivity else {
        return ReadingRecord {
            salinity_psu: None,
            status: ReadingStatus::NoData,
        };
    };

    let conductivity = conductivity_s_m(raw, opts.conductivity_unit);
    let pressure = reading.pressure_dbar.unwrap_or(opts.default_pressure_dbar);

    match salinity_from_conductivity(conductivity, reading.temperature_c, pressure) {
        ConversionResult::Valid(s) => ReadingRecord {
            salinity_psu: Some(s),
            status: ReadingStatus::Valid,
        },
        ConversionResult::Invalid => ReadingRecord {
            salinity_psu: None,
            status: ReadingStatus::Invalid,
        },
    }
}

/// Convert a whole dataset of readings.
///
/// Each reading is converted independently (the core is pure and keeps no
/// state), so the output order is simply the input order.
pub fn convert_readings(readings: &[Reading], opts: &BatchOptions) -> Vec<ReadingRecord> {
    readings
        .iter()
        .map(|r| convert_reading(r, opts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(conductivity: Option<f64>, temperature_c: f64) -> Reading {
        Reading {
            conductivity,
            temperature_c,
            pressure_dbar: None,
        }
    }

    #[test]
    fn missing_conductivity_maps_to_no_data() {
        let rec = convert_reading(&reading(None, 20.0), &BatchOptions::default());
        assert_eq!(rec.status, ReadingStatus::NoData);
        assert_eq!(rec.salinity_psu, None);
    }

    #[test]
    fn low_conductivity_maps_to_invalid_not_no_data() {
        let rec = convert_reading(&reading(Some(0.05), 20.0), &BatchOptions::default());
        assert_eq!(rec.status, ReadingStatus::Invalid);
        assert_eq!(rec.salinity_psu, None);
    }

    #[test]
    fn ms_per_cm_readings_are_preconverted() {
        let opts = BatchOptions {
            conductivity_unit: ConductivityUnit::MsPerCm,
            ..Default::default()
        };
        // 42.914 mS/cm = 4.2914 S/m, standard seawater at 15 °C.
        let rec = convert_reading(&reading(Some(42.914), 15.0), &opts);
        assert_eq!(rec.status, ReadingStatus::Valid);
        let s = rec.salinity_psu.unwrap();
        assert!((s - 35.0).abs() < 1e-3, "salinity was {s}");
    }

    #[test]
    fn default_pressure_applies_when_reading_has_none() {
        let opts = BatchOptions {
            default_pressure_dbar: 10_000.0,
            ..Default::default()
        };
        let with_default = convert_reading(&reading(Some(1.888091), 40.0), &opts);
        let explicit = convert_reading(
            &Reading {
                conductivity: Some(1.888091),
                temperature_c: 40.0,
                pressure_dbar: Some(10_000.0),
            },
            &opts,
        );
        assert_eq!(with_default, explicit);
    }
}
