use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use super::stage::Stage;
use crate::constants::TIMESTAMP_FORMAT;
use crate::logic::model::FreshnessStatus;

/// One (batch, stage) entry of the ledger.
///
/// `record_marker` is a random UUID. It is not derived from any other
/// record and proves nothing about integrity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JourneyRecord {
    pub batch_id: String,
    pub food_name: String,
    pub stage: Stage,
    pub temperature: f64,
    pub humidity: f64,
    pub co2_level: f64,
    pub gas_reading: f64,
    pub freshness_status: FreshnessStatus,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub record_marker: String,
}

impl JourneyRecord {
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn serialize_timestamp<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
}
