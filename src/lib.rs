pub mod adapters;
pub mod error;
pub mod models;
pub mod pss78;
pub mod salinity;

pub use crate::adapters::batch::{convert_reading, convert_readings};
pub use crate::error::AppError;
pub use crate::models::{BatchOptions, ConductivityUnit, Reading, ReadingRecord, ReadingStatus};
pub use crate::pss78::{MIN_VALID_CONDUCTIVITY_S_M, STANDARD_SEAWATER_CONDUCTIVITY_S_M};
pub use crate::salinity::converter::{ConversionResult, salinity_from_conductivity};
