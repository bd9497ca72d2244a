//! Session middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::sessions::SessionHandle;
use crate::{AppError, AppState};

/// Header carrying the session id returned by `POST /api/v1/sessions`
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Session resolved for the current request
#[derive(Clone)]
pub struct SessionContext {
    pub id: Uuid,
    pub handle: SessionHandle,
}

/// Middleware: Require a live session
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let id = extract_session_id(&req)?;

    let handle = state.sessions.get(id).map_err(|e| {
        tracing::debug!("Rejected request: {}", e);
        AppError::from(e)
    })?;

    // Insert into request extensions
    req.extensions_mut().insert(SessionContext { id, handle });

    Ok(next.run(req).await)
}

/// Extract session id from the session header
fn extract_session_id(req: &Request) -> Result<Uuid, AppError> {
    let raw = req.headers()
        .get(SESSION_HEADER)
        .ok_or(AppError::SessionRequired)?
        .to_str()
        .map_err(|_| AppError::SessionRequired)?;

    Uuid::parse_str(raw.trim()).map_err(|_| AppError::SessionRequired)
}

// Implement FromRequestParts for SessionContext
#[axum::async_trait]
impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions
            .get::<SessionContext>()
            .cloned()
            .ok_or(AppError::SessionRequired)
    }
}
