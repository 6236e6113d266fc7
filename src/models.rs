use serde::{Deserialize, Serialize};

/// One logged sensor reading, as supplied by a data pipeline.
///
/// `conductivity` is `None` when the logger recorded no value for this
/// row (a sensor gap). That is a different situation from an unreliable
/// measurement, which the converter reports as an invalid result.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reading {
    /// Measured conductivity in the unit named by
    /// [`BatchOptions::conductivity_unit`]; `None` marks a sensor gap.
    pub conductivity: Option<f64>,
    /// In-situ temperature, °C (IPTS-68).
    pub temperature_c: f64,
    /// Hydrostatic pressure in decibars; falls back to
    /// [`BatchOptions::default_pressure_dbar`] when absent.
    #[serde(default)]
    pub pressure_dbar: Option<f64>,
}

/// Unit the raw conductivity values are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConductivityUnit {
    /// Siemens per meter, the unit the conversion core expects.
    SPerM,
    /// Millisiemens per centimeter, the raw output of Odyssey-style
    /// loggers (1 mS/cm = 0.1 S/m).
    MsPerCm,
}

/// Batch-level settings shared by every reading in a dataset.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchOptions {
    pub conductivity_unit: ConductivityUnit,
    /// Pressure applied to readings that carry none, in decibars.
    /// Surface deployments log no pressure channel at all.
    pub default_pressure_dbar: f64,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            conductivity_unit: ConductivityUnit::SPerM,
            default_pressure_dbar: 0.0,
        }
    }
}

/// Outcome of converting one [`Reading`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    /// A reliable salinity value was produced.
    Valid,
    /// Conductivity at or below the 0.2 S/m reliability floor.
    Invalid,
    /// The reading carried no conductivity value at all.
    NoData,
}

/// Per-reading conversion record returned by the batch adapter.
///
/// `salinity_psu` is `Some` exactly when `status` is
/// [`ReadingStatus::Valid`]; the invalid and no-data cases carry no
/// number, so downstream writers map them to their own placeholder
/// (e.g. a blank cell) instead of a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ReadingRecord {
    pub salinity_psu: Option<f64>,
    pub status: ReadingStatus,
}
