//! Prediction models

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use freshness_core::{PredictionRequest, SensorForm};

/// Prediction form as submitted by the dashboard. Sensor values stay text
/// so that empty and non-numeric inputs reach the core validator intact;
/// JSON numbers are accepted and kept as their textual form.
#[derive(Debug, Deserialize, Validate)]
pub struct PredictRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub temperature: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub humidity: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub co2_level: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub gas_level: String,

    #[validate(length(max = 64))]
    pub food_name: Option<String>,

    #[validate(length(max = 64))]
    pub batch_id: Option<String>,
}

impl PredictRequest {
    pub fn into_core(self) -> PredictionRequest {
        PredictionRequest {
            sensors: SensorForm::new(self.temperature, self.humidity, self.co2_level, self.gas_level),
            food_name: self.food_name,
            batch_id: self.batch_id,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawField {
    Text(String),
    Number(serde_json::Number),
}

/// A sensor field given as a string, a number or null (treated as empty)
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<RawField>::deserialize(deserializer)? {
        Some(RawField::Text(text)) => text,
        Some(RawField::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Default values offered by a fresh prediction form
#[derive(Debug, Serialize)]
pub struct PredictionDefaults {
    pub food_name: &'static str,
    pub batch_id: String,
    pub fields: Vec<FieldHint>,
}

#[derive(Debug, Serialize)]
pub struct FieldHint {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sensor_fields_accept_text_and_numbers() {
        let req: PredictRequest = serde_json::from_value(json!({
            "temperature": 4,
            "humidity": "60",
            "co2_level": 500.5,
            "gas_level": null
        })).unwrap();

        assert_eq!(req.temperature, "4");
        assert_eq!(req.humidity, "60");
        assert_eq!(req.co2_level, "500.5");
        assert_eq!(req.gas_level, "");
        assert!(req.food_name.is_none());
    }

    #[test]
    fn test_sensor_field_rejects_other_json_types() {
        let result = serde_json::from_value::<PredictRequest>(json!({ "temperature": true }));
        assert!(result.is_err());
    }
}
