//! Session Context - one user's ledger, tally and random source
//!
//! All mutable dashboard state hangs off a `Session`. Hosts that serve
//! several users keep one `Session` per user; nothing is shared between them.

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_FOOD_NAME;
use crate::logic::journey::{generate_batch_id, generate_journey, JourneyInput, JourneyRecord};
use crate::logic::ledger::Ledger;
use crate::logic::model::{FreshnessLabel, ModelAdapter, ModelError};
use crate::logic::sensor::{validate, SensorForm, ValidationError};
use crate::logic::tally::PredictionTally;

// ============================================================================
// REQUEST / OUTCOME
// ============================================================================

/// Everything the prediction form submits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(flatten)]
    pub sensors: SensorForm,
    #[serde(default)]
    pub food_name: Option<String>,
    #[serde(default)]
    pub batch_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    pub label: FreshnessLabel,
    pub batch_id: String,
    pub food_name: String,
    pub method: String,
    pub records: Vec<JourneyRecord>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

// ============================================================================
// SESSION
// ============================================================================

pub struct Session {
    ledger: Ledger,
    tally: PredictionTally,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible perturbations and markers
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            ledger: Ledger::new(),
            tally: PredictionTally::new(),
            rng,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn tally(&self) -> &PredictionTally {
        &self.tally
    }

    /// Fresh default batch id for the next form
    pub fn suggest_batch_id(&mut self) -> String {
        generate_batch_id(&mut self.rng)
    }

    /// Validate, predict, generate the journey, append it and count the label.
    ///
    /// Any error leaves the ledger and the tally untouched.
    pub fn predict_and_record(
        &mut self,
        model: &ModelAdapter,
        request: &PredictionRequest,
        now: NaiveDateTime,
    ) -> Result<PredictionOutcome, PredictError> {
        let reading = validate(&request.sensors)?;
        let label = model.predict(&reading)?;

        let food_name = non_blank(request.food_name.as_deref())
            .unwrap_or(DEFAULT_FOOD_NAME)
            .to_string();
        let batch_id = match non_blank(request.batch_id.as_deref()) {
            Some(id) => id.to_string(),
            None => generate_batch_id(&mut self.rng),
        };

        let records = generate_journey(
            JourneyInput {
                reading: &reading,
                food_name: &food_name,
                batch_id: &batch_id,
                label,
            },
            now,
            &mut self.rng,
        );

        self.ledger.append(records.iter().cloned());
        self.tally.increment(label);

        log::info!("Predicted {} for {} ({})", label, batch_id, food_name);

        Ok(PredictionOutcome {
            label,
            batch_id,
            food_name,
            method: model.method().to_string(),
            records: records.to_vec(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
