//! Session models

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct SessionOpened {
    pub session_id: Uuid,
    pub header: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub record_count: usize,
    pub batch_count: usize,
    pub prediction_count: u64,
}
