//! Batch models

use serde::Serialize;

use freshness_core::{JourneyRecord, Stage};

#[derive(Debug, Serialize)]
pub struct BatchList {
    pub batch_ids: Vec<String>,
}

/// Per-stage series of one batch, ready for a multi-axis line chart
#[derive(Debug, Default, Serialize)]
pub struct BatchTimeline {
    pub batch_id: String,
    pub stages: Vec<Stage>,
    pub timestamps: Vec<String>,
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
    pub co2_level: Vec<f64>,
    pub gas_reading: Vec<f64>,
}

impl BatchTimeline {
    pub fn from_records<'a>(batch_id: &str, records: impl IntoIterator<Item = &'a JourneyRecord>) -> Self {
        let mut timeline = BatchTimeline {
            batch_id: batch_id.to_string(),
            ..Default::default()
        };

        for record in records {
            timeline.stages.push(record.stage);
            timeline.timestamps.push(record.timestamp_string());
            timeline.temperature.push(record.temperature);
            timeline.humidity.push(record.humidity);
            timeline.co2_level.push(record.co2_level);
            timeline.gas_reading.push(record.gas_reading);
        }

        timeline
    }
}
