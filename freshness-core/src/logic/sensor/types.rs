//! Sensor Types
//!
//! Data structures only. Validation lives in `validate.rs`.

use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;

// ============================================================================
// SENSOR FIELDS
// ============================================================================

/// The four sensor inputs, declared in feature-vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorField {
    Temperature,
    Humidity,
    Co2Level,
    GasLevel,
}

impl SensorField {
    /// Feature order expected by the classifier. Never reorder.
    pub const ALL: [SensorField; FEATURE_COUNT] = [
        SensorField::Temperature,
        SensorField::Humidity,
        SensorField::Co2Level,
        SensorField::GasLevel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorField::Temperature => "temperature",
            SensorField::Humidity => "humidity",
            SensorField::Co2Level => "co2_level",
            SensorField::GasLevel => "gas_level",
        }
    }

    /// Human label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            SensorField::Temperature => "Temperature (°C)",
            SensorField::Humidity => "Humidity (%)",
            SensorField::Co2Level => "CO2 Level (ppm)",
            SensorField::GasLevel => "Gas Level",
        }
    }

    /// Advisory input range. Values outside it are accepted.
    pub fn hint_range(&self) -> (f64, f64) {
        match self {
            SensorField::Temperature => (-10.0, 50.0),
            SensorField::Humidity => (0.0, 100.0),
            SensorField::Co2Level => (200.0, 2000.0),
            SensorField::GasLevel => (0.0, 2.0),
        }
    }
}

impl std::fmt::Display for SensorField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RAW FORM
// ============================================================================

/// Raw text exactly as typed into the prediction form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SensorForm {
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub humidity: String,
    #[serde(default)]
    pub co2_level: String,
    #[serde(default)]
    pub gas_level: String,
}

impl SensorForm {
    pub fn new(
        temperature: impl Into<String>,
        humidity: impl Into<String>,
        co2_level: impl Into<String>,
        gas_level: impl Into<String>,
    ) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: humidity.into(),
            co2_level: co2_level.into(),
            gas_level: gas_level.into(),
        }
    }

    pub fn field(&self, field: SensorField) -> &str {
        match field {
            SensorField::Temperature => &self.temperature,
            SensorField::Humidity => &self.humidity,
            SensorField::Co2Level => &self.co2_level,
            SensorField::GasLevel => &self.gas_level,
        }
    }
}

// ============================================================================
// VALIDATED READING
// ============================================================================

/// A validated set of sensor values. Free-form numeric, no range limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
    pub co2_level: f64,
    pub gas_level: f64,
}

impl SensorReading {
    pub fn new(temperature: f64, humidity: f64, co2_level: f64, gas_level: f64) -> Self {
        Self { temperature, humidity, co2_level, gas_level }
    }

    pub fn get(&self, field: SensorField) -> f64 {
        match field {
            SensorField::Temperature => self.temperature,
            SensorField::Humidity => self.humidity,
            SensorField::Co2Level => self.co2_level,
            SensorField::GasLevel => self.gas_level,
        }
    }

    /// Feature vector in the fixed model order:
    /// temperature, humidity, co2_level, gas_level.
    pub fn to_features(&self) -> [f32; FEATURE_COUNT] {
        SensorField::ALL.map(|field| self.get(field) as f32)
    }

    /// Fields whose value falls outside the advisory range
    pub fn out_of_range_fields(&self) -> Vec<SensorField> {
        SensorField::ALL
            .into_iter()
            .filter(|field| {
                let (lo, hi) = field.hint_range();
                let value = self.get(*field);
                value < lo || value > hi
            })
            .collect()
    }
}
