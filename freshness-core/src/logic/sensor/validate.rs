//! Input Validation
//!
//! Single shot, no partial success: every field present and numeric,
//! or the whole form is rejected.

use thiserror::Error;

use crate::constants::FEATURE_COUNT;

use super::types::{SensorField, SensorForm, SensorReading};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please fill all sensor fields (missing: {})", join_fields(.fields))]
    MissingInput { fields: Vec<SensorField> },

    #[error("Enter valid numeric values ({field}: {value:?})")]
    InvalidNumeric { field: SensorField, value: String },
}

fn join_fields(fields: &[SensorField]) -> String {
    fields.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
}

/// Validate the raw form.
///
/// Empty fields are reported before any parsing happens, so a form with one
/// empty field and one garbage field yields `MissingInput`.
pub fn validate(form: &SensorForm) -> Result<SensorReading, ValidationError> {
    let missing: Vec<SensorField> = SensorField::ALL
        .into_iter()
        .filter(|field| form.field(*field).is_empty())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingInput { fields: missing });
    }

    let mut values = [0.0f64; FEATURE_COUNT];
    for (slot, field) in values.iter_mut().zip(SensorField::ALL) {
        *slot = parse_field(field, form.field(field))?;
    }

    let reading = SensorReading::new(values[0], values[1], values[2], values[3]);

    for field in reading.out_of_range_fields() {
        let (lo, hi) = field.hint_range();
        log::warn!(
            "{} = {} is outside the usual range {}..{}",
            field, reading.get(field), lo, hi
        );
    }

    Ok(reading)
}

fn parse_field(field: SensorField, raw: &str) -> Result<f64, ValidationError> {
    let invalid = || ValidationError::InvalidNumeric {
        field,
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;

    // NaN and infinities parse fine but cannot be perturbed or rounded
    if !value.is_finite() {
        return Err(invalid());
    }

    Ok(value)
}
