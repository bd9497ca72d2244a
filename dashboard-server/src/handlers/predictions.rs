//! Prediction handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use validator::Validate;

use freshness_core::constants::DEFAULT_FOOD_NAME;
use freshness_core::{PredictionOutcome, SensorField};

use crate::middleware::session::SessionContext;
use crate::models::{FieldHint, PredictRequest, PredictionDefaults};
use crate::{AppResult, AppState};

/// Defaults for a fresh form: food name, a new batch id and input hints
pub async fn defaults(session: SessionContext) -> Json<PredictionDefaults> {
    let batch_id = session.handle.lock().session.suggest_batch_id();

    let fields = SensorField::ALL
        .into_iter()
        .map(|field| {
            let (min, max) = field.hint_range();
            FieldHint {
                name: field.as_str(),
                label: field.label(),
                min,
                max,
            }
        })
        .collect();

    Json(PredictionDefaults {
        food_name: DEFAULT_FOOD_NAME,
        batch_id,
        fields,
    })
}

/// Validate, predict and record one journey in the caller's session
pub async fn predict(
    State(state): State<AppState>,
    session: SessionContext,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> AppResult<Json<PredictionOutcome>> {
    let Json(req) = payload?;
    req.validate()?;

    let request = req.into_core();
    let now = chrono::Local::now().naive_local();

    let outcome = session.handle
        .lock()
        .session
        .predict_and_record(&state.model, &request, now)?;

    tracing::info!(
        "Session {}: {} -> {}",
        session.id, outcome.batch_id, outcome.label
    );

    Ok(Json(outcome))
}
