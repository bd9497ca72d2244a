//! Tally handler

use axum::Json;

use freshness_core::TallySnapshot;

use crate::middleware::session::SessionContext;

/// Prediction distribution of the caller's session
pub async fn snapshot(session: SessionContext) -> Json<TallySnapshot> {
    Json(session.handle.lock().session.tally().snapshot())
}
