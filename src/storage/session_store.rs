//! Durable session persistence under a single namespaced key.
//!
//! The store keeps one serialized `{version, token, user}` record. Reads are
//! strictly fail-soft: any malformed, truncated, or incompatible value is
//! logged and treated as "no session" so a corrupted store can never break
//! application startup.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::net::types::{AuthSession, User};
use crate::storage::backend::{MemoryBackend, StorageBackend};

/// The one localStorage key this application owns.
const STORAGE_KEY: &str = "workmanager.auth";

/// Bumped on incompatible changes to [`PersistedSession`]. Records written
/// under another version are discarded instead of being mis-parsed.
const SCHEMA_VERSION: u32 = 1;

/// On-disk shape of a session. Tagged with a schema version so future shape
/// changes are detected explicitly rather than failing field-by-field.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    version: u32,
    token: String,
    user: User,
}

/// Handle to the durable session record. Cheap to clone; all clones share
/// the same backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by `localStorage` when the browser provides one,
    /// degrading to a process-local in-memory store otherwise (SSR, tests,
    /// storage disabled by the user agent).
    pub fn browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use crate::storage::backend::LocalStorageBackend;
            if LocalStorageBackend::available() {
                return Self::new(Arc::new(LocalStorageBackend));
            }
        }
        Self::in_memory()
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::default()))
    }

    /// Read the stored session. Returns `None` for an absent, malformed, or
    /// version-incompatible record; never fails.
    pub fn read(&self) -> Option<AuthSession> {
        let raw = self.backend.get(STORAGE_KEY)?;
        let persisted: PersistedSession = match serde_json::from_str(&raw) {
            Ok(p) => p,
            Err(err) => {
                log::warn!("discarding malformed stored session: {err}");
                return None;
            }
        };
        if persisted.version != SCHEMA_VERSION {
            log::warn!(
                "discarding stored session with unsupported schema version {}",
                persisted.version
            );
            return None;
        }
        Some(AuthSession {
            token: persisted.token,
            user: persisted.user,
        })
    }

    /// Persist a session, replacing any previous record.
    pub fn write(&self, session: &AuthSession) {
        let persisted = PersistedSession {
            version: SCHEMA_VERSION,
            token: session.token.clone(),
            user: session.user.clone(),
        };
        match serde_json::to_string(&persisted) {
            Ok(raw) => self.backend.set(STORAGE_KEY, &raw),
            Err(err) => log::warn!("failed to serialize session for storage: {err}"),
        }
    }

    /// Remove the stored session. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        self.backend.remove(STORAGE_KEY);
    }
}
