use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::{config::AuthSettings, storage::KeyValueStore};

/// Single-admin session gate. Login compares against one configured
/// secret; a successful login persists a random token with an absolute
/// expiry through the same key-value store the content lives in, so the
/// session survives a reload of the process just like the content does.
///
/// The gate holds no mutable state of its own: `is_authenticated` reads
/// the store every time, and the stored blob is validated on every read.
pub struct AuthService {
    store: Arc<dyn KeyValueStore>,
    session_key: String,
    settings: AuthSettings,
}

/// Wire format of the persisted session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    /// Absolute expiry, epoch milliseconds. Expired when now > expires.
    expires: i64,
}

#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthService {
    pub fn new(store: Arc<dyn KeyValueStore>, session_key: String, settings: AuthSettings) -> Self {
        Self {
            store,
            session_key,
            settings,
        }
    }

    /// Compares `secret` against the configured admin secret and issues a
    /// session on a match. Comparison goes through SHA-256 digests so it
    /// is constant-time regardless of input length. No rate limiting.
    pub fn login(&self, secret: &str) -> bool {
        let supplied = Sha256::digest(secret.as_bytes());
        let expected = Sha256::digest(self.settings.admin_secret.as_bytes());
        if supplied.as_slice().ct_eq(expected.as_slice()).unwrap_u8() != 1 {
            return false;
        }

        let session = StoredSession {
            token: generate_token(),
            expires: (Utc::now() + Duration::hours(self.settings.session_duration_hours))
                .timestamp_millis(),
        };
        match serde_json::to_string(&session) {
            Ok(raw) => {
                self.store.set(&self.session_key, &raw);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize session");
                false
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_session().is_some()
    }

    /// The live session, if any. Expired sessions are removed from the
    /// store on sight; malformed blobs just read as "not logged in".
    pub fn current_session(&self) -> Option<AdminSession> {
        let raw = self.store.get(&self.session_key)?;
        let session: StoredSession = match serde_json::from_str(&raw) {
            Ok(session) => session,
            Err(_) => return None,
        };

        if Utc::now().timestamp_millis() > session.expires {
            self.store.remove(&self.session_key);
            return None;
        }

        Some(AdminSession {
            token: session.token,
            expires_at: DateTime::from_timestamp_millis(session.expires)?,
        })
    }

    /// Invalidates the session immediately.
    pub fn logout(&self) {
        self.store.remove(&self.session_key);
    }
}

fn generate_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
