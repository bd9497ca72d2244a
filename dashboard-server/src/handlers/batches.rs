//! Batch handlers

use axum::{extract::Path, Json};

use freshness_core::JourneyRecord;

use crate::middleware::session::SessionContext;
use crate::models::{BatchList, BatchTimeline};

/// Distinct batch ids in order of first appearance
pub async fn list(session: SessionContext) -> Json<BatchList> {
    let slot = session.handle.lock();
    let batch_ids = slot.session
        .ledger()
        .batch_ids()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(BatchList { batch_ids })
}

/// Records of one batch; an unknown id gives an empty list
pub async fn records(
    session: SessionContext,
    Path(batch_id): Path<String>,
) -> Json<Vec<JourneyRecord>> {
    let slot = session.handle.lock();
    let records = slot.session
        .ledger()
        .filter_by_batch(&batch_id)
        .into_iter()
        .cloned()
        .collect();

    Json(records)
}

/// Stage-by-stage sensor series of one batch
pub async fn timeline(
    session: SessionContext,
    Path(batch_id): Path<String>,
) -> Json<BatchTimeline> {
    let slot = session.handle.lock();
    Json(BatchTimeline::from_records(
        &batch_id,
        slot.session.ledger().timeline(&batch_id),
    ))
}
