//! Ledger record handlers

use axum::{
    http::header,
    response::IntoResponse,
    Json,
};

use freshness_core::constants::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
use freshness_core::{export, JourneyRecord};

use crate::middleware::session::SessionContext;
use crate::{AppError, AppResult};

/// Every record of the caller's ledger, oldest first
pub async fn list(session: SessionContext) -> Json<Vec<JourneyRecord>> {
    let slot = session.handle.lock();
    Json(slot.session.ledger().all().to_vec())
}

/// Download the ledger as CSV
pub async fn export_csv(session: SessionContext) -> AppResult<impl IntoResponse> {
    let csv = {
        let slot = session.handle.lock();
        let ledger = slot.session.ledger();
        if ledger.is_empty() {
            return Err(AppError::NotFound("No ledger records available yet".to_string()));
        }
        export::to_csv(ledger.all())
    };

    let headers = [
        (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME)),
    ];

    Ok((headers, csv))
}
