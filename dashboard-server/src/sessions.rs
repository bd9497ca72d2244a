//! Session registry - one independent dashboard state per visitor
//!
//! Each entry owns its own `Session` (ledger, tally, random source) behind
//! its own lock. The registry lock only guards the id -> entry map.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use uuid::Uuid;

use freshness_core::Session;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session {0} not found")]
    NotFound(Uuid),

    #[error("session limit of {0} reached")]
    Capacity(usize),
}

/// A session plus its bookkeeping
pub struct SessionSlot {
    pub session: Session,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

pub type SessionHandle = Arc<Mutex<SessionSlot>>;

pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
    idle_ttl: Duration,
    max_sessions: usize,
    rng_seed: Option<u64>,
    opened: AtomicU64,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration, max_sessions: usize, rng_seed: Option<u64>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_ttl,
            max_sessions,
            rng_seed,
            opened: AtomicU64::new(0),
        }
    }

    /// Open a new session, dropping idle ones first
    pub fn open(&self) -> Result<Uuid, SessionError> {
        let now = Utc::now();
        self.evict_idle_at(now);

        let mut sessions = self.sessions.write();
        if sessions.len() >= self.max_sessions {
            tracing::warn!("Refusing new session: {} already open", sessions.len());
            return Err(SessionError::Capacity(self.max_sessions));
        }

        // Only sessions that actually open consume an ordinal
        let ordinal = self.opened.fetch_add(1, Ordering::Relaxed);
        let session = match self.rng_seed {
            Some(seed) => Session::seeded(seed.wrapping_add(ordinal)),
            None => Session::new(),
        };

        let id = Uuid::new_v4();
        sessions.insert(id, Arc::new(Mutex::new(SessionSlot {
            session,
            created_at: now,
            last_seen: now,
        })));

        tracing::info!("Session {} opened ({} active)", id, sessions.len());
        Ok(id)
    }

    /// Look up a session and mark it as active
    pub fn get(&self, id: Uuid) -> Result<SessionHandle, SessionError> {
        let handle = self.sessions
            .read()
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound(id))?;

        handle.lock().last_seen = Utc::now();
        Ok(handle)
    }

    pub fn close(&self, id: Uuid) -> Result<(), SessionError> {
        self.sessions
            .write()
            .remove(&id)
            .map(|_| tracing::info!("Session {} closed", id))
            .ok_or(SessionError::NotFound(id))
    }

    /// Drop sessions not seen since `now - idle_ttl`; returns how many went.
    ///
    /// Sessions whose lock is held are in use and never waited on.
    pub fn evict_idle_at(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.idle_ttl;
        let is_idle = |handle: &SessionHandle| {
            handle.try_lock().map_or(false, |slot| slot.last_seen < cutoff)
        };

        let stale: Vec<Uuid> = self.sessions
            .read()
            .iter()
            .filter(|(_, handle)| is_idle(*handle))
            .map(|(id, _)| *id)
            .collect();
        if stale.is_empty() {
            return 0;
        }

        let mut sessions = self.sessions.write();
        let mut evicted = 0;
        for id in stale {
            // Re-check: the session may have been used since the scan
            if sessions.get(&id).is_some_and(|handle| is_idle(handle)) {
                sessions.remove(&id);
                evicted += 1;
            }
        }

        if evicted > 0 {
            tracing::debug!("Evicted {} idle sessions", evicted);
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SessionRegistry {
        SessionRegistry::new(Duration::minutes(30), 3, Some(7))
    }

    #[test]
    fn test_open_and_get() {
        let reg = registry();
        let id = reg.open().unwrap();
        assert_eq!(reg.len(), 1);

        let handle = reg.get(id).unwrap();
        assert!(handle.lock().session.ledger().is_empty());
    }

    #[test]
    fn test_unknown_session() {
        let reg = registry();
        assert!(matches!(reg.get(Uuid::new_v4()), Err(SessionError::NotFound(_))));
        assert!(matches!(reg.close(Uuid::new_v4()), Err(SessionError::NotFound(_))));
    }

    #[test]
    fn test_capacity_limit() {
        let reg = registry();
        for _ in 0..3 {
            reg.open().unwrap();
        }
        assert!(matches!(reg.open(), Err(SessionError::Capacity(3))));
    }

    #[test]
    fn test_close_frees_slot() {
        let reg = registry();
        let id = reg.open().unwrap();
        reg.close(id).unwrap();
        assert_eq!(reg.len(), 0);
        assert!(reg.get(id).is_err());
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let reg = registry();
        let id = reg.open().unwrap();

        assert_eq!(reg.evict_idle_at(Utc::now()), 0);
        assert_eq!(reg.evict_idle_at(Utc::now() + Duration::hours(1)), 1);
        assert!(reg.get(id).is_err());
    }

    #[test]
    fn test_busy_session_is_skipped_by_eviction() {
        let reg = registry();
        let busy = reg.open().unwrap();
        let idle = reg.open().unwrap();

        let handle = reg.get(busy).unwrap();
        let _guard = handle.lock();

        assert_eq!(reg.evict_idle_at(Utc::now() + Duration::hours(1)), 1);
        assert_eq!(reg.len(), 1);
        assert!(reg.get(idle).is_err());
    }

    #[test]
    fn test_refused_open_keeps_seed_ordinal() {
        let reg = SessionRegistry::new(Duration::minutes(30), 1, Some(100));
        let first = reg.open().unwrap();
        assert!(matches!(reg.open(), Err(SessionError::Capacity(1))));
        reg.close(first).unwrap();

        let second = reg.open().unwrap();
        let handle = reg.get(second).unwrap();
        let from_registry = handle.lock().session.suggest_batch_id();
        let expected = Session::seeded(101).suggest_batch_id();
        assert_eq!(from_registry, expected);
    }
}
