//! Session Store
//!
//! Persists the signed-in session so it survives page reloads. The store
//! only does persistence; the session itself is an owned value passed to
//! whoever needs it.

use crate::api::wire::WireSession;
use crate::api::Backend;
use crate::domain::{ActionError, ActionResult, Session};

use super::traits::{KeyValueStorage, StorageError};

/// Storage key of the persisted session record
pub const SESSION_KEY: &str = "lost_found_session";

#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted session. Absent, malformed or incomplete records
    /// yield `None`; the latter two are purged.
    pub fn load(&self) -> Option<Session> {
        let raw = self.storage.get(SESSION_KEY)?;
        let session = serde_json::from_str::<WireSession>(&raw)
            .ok()
            .and_then(WireSession::into_session);
        if session.is_none() {
            log::warn!("discarding unreadable stored session");
            self.storage.remove(SESSION_KEY);
        }
        session
    }

    /// Persist `session`, overwriting any previous record
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(&WireSession::from(session))
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set(SESSION_KEY, &json)
    }

    pub fn clear(&self) {
        self.storage.remove(SESSION_KEY);
    }

    /// Swap the credential for a fresh one and persist it.
    ///
    /// On any failure the previous record stays in place and is still valid.
    pub async fn rotate<B: Backend + ?Sized>(
        &self,
        backend: &B,
        session: Option<&Session>,
    ) -> ActionResult<Session> {
        let current = session.ok_or_else(ActionError::not_signed_in)?;
        let rotated = backend.rotate_key(current).await?;
        if rotated.user_id != current.user_id {
            log::warn!("rotate-key answered for a different user; keeping the current session");
            return Err(ActionError::server(None, "the server returned a key for another account"));
        }
        self.save(&rotated).map_err(|e| {
            log::error!("rotated key could not be persisted: {}", e);
            ActionError::server(None, format!("your new key could not be saved: {}", e))
        })?;
        log::info!("credential rotated for user {}", rotated.user_id);
        Ok(rotated)
    }
}
