//! Session handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::middleware::session::{SessionContext, SESSION_HEADER};
use crate::models::{SessionInfo, SessionOpened};
use crate::{AppResult, AppState};

/// Open a new, empty session
pub async fn open(State(state): State<AppState>) -> AppResult<(StatusCode, Json<SessionOpened>)> {
    let session_id = state.sessions.open()?;

    Ok((StatusCode::CREATED, Json(SessionOpened {
        session_id,
        header: SESSION_HEADER,
    })))
}

/// Describe the caller's session
pub async fn current(session: SessionContext) -> Json<SessionInfo> {
    let slot = session.handle.lock();

    Json(SessionInfo {
        session_id: session.id,
        created_at: slot.created_at,
        last_seen: slot.last_seen,
        record_count: slot.session.ledger().len(),
        batch_count: slot.session.ledger().batch_ids().len(),
        prediction_count: slot.session.tally().total(),
    })
}

/// Close the caller's session; its ledger and tally are discarded
pub async fn close(
    State(state): State<AppState>,
    session: SessionContext,
) -> AppResult<StatusCode> {
    state.sessions.close(session.id)?;
    Ok(StatusCode::NO_CONTENT)
}
