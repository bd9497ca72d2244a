//! Sensor Module - raw form input and validated readings
//!
//! `types` holds the data structures, `validate` turns raw text fields
//! into a `SensorReading` or rejects them. Nothing downstream ever sees
//! unvalidated input.

pub mod types;
pub mod validate;

pub use types::{SensorField, SensorForm, SensorReading};
pub use validate::{validate, ValidationError};
