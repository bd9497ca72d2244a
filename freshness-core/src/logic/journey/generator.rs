//! Journey Record Generator
//!
//! Turns one prediction into the four stage records of a batch. The random
//! source and the clock are parameters so callers (and tests) control both.

use chrono::{NaiveDateTime, SubsecRound};
use rand::Rng;
use uuid::Uuid;

use super::record::JourneyRecord;
use super::stage::Stage;
use crate::constants::{
    BATCH_ID_HEX_LEN, BATCH_ID_PREFIX, CO2_SPREAD, GAS_SPREAD, HUMIDITY_SPREAD,
    TEMPERATURE_SPREAD,
};
use crate::logic::model::{FreshnessLabel, FreshnessStatus};
use crate::logic::sensor::SensorReading;

/// Inputs for one journey, all already validated
#[derive(Debug, Clone, Copy)]
pub struct JourneyInput<'a> {
    pub reading: &'a SensorReading,
    pub food_name: &'a str,
    pub batch_id: &'a str,
    pub label: FreshnessLabel,
}

/// Build exactly one record per stage, in stage order.
///
/// `now` is truncated to whole seconds so stored timestamps match their
/// exported text.
pub fn generate_journey<R: Rng + ?Sized>(
    input: JourneyInput<'_>,
    now: NaiveDateTime,
    rng: &mut R,
) -> [JourneyRecord; 4] {
    let now = now.trunc_subsecs(0);
    let reading = input.reading;

    Stage::ALL.map(|stage| {
        let freshness_status = if stage.is_final() {
            FreshnessStatus::Assessed(input.label)
        } else {
            FreshnessStatus::InTransit
        };

        JourneyRecord {
            batch_id: input.batch_id.to_string(),
            food_name: input.food_name.to_string(),
            stage,
            temperature: perturb(reading.temperature, TEMPERATURE_SPREAD, rng),
            humidity: perturb(reading.humidity, HUMIDITY_SPREAD, rng),
            co2_level: perturb(reading.co2_level, CO2_SPREAD, rng),
            gas_reading: perturb(reading.gas_level, GAS_SPREAD, rng),
            freshness_status,
            timestamp: now - stage.offset(),
            record_marker: random_uuid(rng).to_string(),
        }
    })
}

/// `BATCH-` followed by six upper-case hex digits of a random UUID
pub fn generate_batch_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let hex = random_uuid(rng).simple().to_string();
    format!("{}{}", BATCH_ID_PREFIX, hex[..BATCH_ID_HEX_LEN].to_uppercase())
}

/// Add a uniform draw from [-spread, spread] and round to 2 decimals
pub fn perturb<R: Rng + ?Sized>(base: f64, spread: f64, rng: &mut R) -> f64 {
    round2(base + rng.gen_range(-spread..=spread))
}

/// Round to two decimals. Magnitudes too large to scale are returned as-is;
/// they carry no fractional digits anyway.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// UUID v4 drawn from the injected generator, reproducible under a seed
fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
