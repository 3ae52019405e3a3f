//! Host-side session tokens.
//!
//! ARCHITECTURE
//! ============
//! Sign-in and registration hand out a long-lived opaque token carried in an
//! `HttpOnly` cookie. The token maps to an account id and an expiry; nothing
//! is persisted, so a host restart signs everyone out.
//!
//! TRADE-OFFS
//! ==========
//! Expired entries are dropped lazily on lookup plus an occasional
//! [`SessionStore::purge_expired`] sweep, rather than by a timer per session.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

#[derive(Debug, Clone, Copy)]
struct SessionEntry {
    account_id: Uuid,
    expires_at: OffsetDateTime,
}

/// Token → account map shared by all handlers.
#[derive(Clone)]
pub struct SessionStore {
    ttl: Duration,
    entries: Arc<RwLock<HashMap<String, SessionEntry>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Create a session for the given account, returning the token.
    pub async fn create(&self, account_id: Uuid) -> String {
        let token = generate_token();
        let entry = SessionEntry { account_id, expires_at: OffsetDateTime::now_utc() + self.ttl };
        self.entries.write().await.insert(token.clone(), entry);
        token
    }

    /// Resolve a token to its account id. Expired tokens are removed and
    /// reported as absent.
    pub async fn validate(&self, token: &str) -> Option<Uuid> {
        let now = OffsetDateTime::now_utc();
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                None => return None,
                Some(entry) if entry.expires_at > now => return Some(entry.account_id),
                Some(_) => {}
            }
        }
        self.entries.write().await.remove(token);
        None
    }

    /// Delete a session by token. Unknown tokens are ignored.
    pub async fn delete(&self, token: &str) {
        self.entries.write().await.remove(token);
    }

    /// Drop every expired session, returning how many were removed.
    pub async fn purge_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

/// Spawn a background sweep that drops expired sessions every `period`.
pub fn spawn_purge_task(store: SessionStore, period: std::time::Duration) -> JoinHandle<()> {
    info!(period_secs = period.as_secs(), "session purge configured");
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(period).await;
            let removed = store.purge_expired().await;
            if removed > 0 {
                debug!(removed, "purged expired sessions");
            }
        }
    })
}
