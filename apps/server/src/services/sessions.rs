//! In-memory player sessions.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;
use vocab_core::{GameSession, SelectionStore};

use crate::error::{ApiError, Result};

/// One player's selection and, once started, their game.
#[derive(Debug)]
pub struct SessionEntry {
    pub selection: SelectionStore,
    pub game: Option<GameSession>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

impl SessionEntry {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            selection: SelectionStore::new(),
            game: None,
            created_at: now,
            last_seen_at: now,
        }
    }

    fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.last_seen_at > ttl
    }
}

/// Sessions keyed by id. Entries idle for longer than the ttl are dropped.
#[derive(Debug)]
pub struct SessionStore {
    entries: Mutex<HashMap<Uuid, SessionEntry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn create(&self) -> Result<Uuid> {
        let now = Utc::now();
        self.purge_idle(now)?;

        let id = Uuid::new_v4();
        self.lock()?.insert(id, SessionEntry::new(now));
        tracing::debug!(session = %id, "Session created");
        Ok(id)
    }

    /// Run `f` against one session while holding the lock.
    ///
    /// Touching a session keeps it alive; an idle one is dropped and reported
    /// as missing.
    pub fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionEntry) -> Result<T>,
    ) -> Result<T> {
        let now = Utc::now();
        let mut entries = self.lock()?;

        if entries
            .get(&id)
            .is_some_and(|entry| entry.is_idle(now, self.ttl))
        {
            entries.remove(&id);
            tracing::debug!(session = %id, "Session expired");
        }

        let entry = entries.get_mut(&id).ok_or_else(|| not_found(id))?;
        entry.last_seen_at = now;
        f(entry)
    }

    pub fn remove(&self, id: Uuid) -> Result<()> {
        if self.lock()?.remove(&id).is_none() {
            return Err(not_found(id));
        }
        tracing::debug!(session = %id, "Session removed");
        Ok(())
    }

    /// Drop every session idle at `now`. Returns how many were dropped.
    pub fn purge_idle(&self, now: DateTime<Utc>) -> Result<usize> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_idle(now, self.ttl));

        let purged = before - entries.len();
        if purged > 0 {
            tracing::info!(purged, remaining = entries.len(), "Expired idle sessions");
        }
        Ok(purged)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<Uuid, SessionEntry>>> {
        self.entries
            .lock()
            .map_err(|_| ApiError::Internal("session store lock poisoned".to_string()))
    }
}

fn not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("session {}", id))
}
