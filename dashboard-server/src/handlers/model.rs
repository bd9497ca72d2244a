//! Model status handler

use axum::{extract::State, Json};

use freshness_core::ModelStatus;

use crate::AppState;

pub async fn status(State(state): State<AppState>) -> Json<ModelStatus> {
    Json(state.model.status())
}
