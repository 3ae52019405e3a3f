//! Learner accounts: registration and credential checks.
//!
//! DESIGN
//! ======
//! Accounts live in memory, keyed by normalized email. Passwords are stored
//! as Argon2id PHC strings; the plaintext never leaves this module.

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 8;
const SALT_LEN: usize = 16;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("name must be at least 2 characters")]
    InvalidName,
    #[error("password must be at least 8 characters")]
    WeakPassword,
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// Public view of an account, as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Account creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

#[derive(Debug, Clone)]
struct Account {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: OffsetDateTime,
}

impl Account {
    fn to_user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            created_at: unix_millis(self.created_at),
        }
    }
}

#[derive(Default)]
struct Accounts {
    by_email: HashMap<String, Uuid>,
    by_id: HashMap<Uuid, Account>,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some(normalized)
}

fn hasher(params: &Params) -> Argon2<'static> {
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone())
}

fn hash_with(params: &Params, password: &str) -> Result<String, AccountError> {
    let salt_bytes: [u8; SALT_LEN] = rand::rng().random();
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AccountError::Hash(e.to_string()))?;
    hasher(params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AccountError::Hash(e.to_string()))
}

fn matches_with(params: &Params, password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| hasher(params).verify_password(password.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}

fn unix_millis(at: OffsetDateTime) -> i64 {
    i64::try_from(at.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
}

/// In-memory account directory shared by all handlers.
#[derive(Clone)]
pub struct AccountStore {
    params: Params,
    accounts: Arc<RwLock<Accounts>>,
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::default())
    }

    /// Store with explicit Argon2 cost parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        Self { params, accounts: Arc::new(RwLock::new(Accounts::default())) }
    }

    /// Hash on the blocking pool; Argon2 is too slow for a runtime worker.
    async fn hash_password(&self, password: &str) -> Result<String, AccountError> {
        let params = self.params.clone();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_with(&params, &password))
            .await
            .map_err(|e| AccountError::Hash(e.to_string()))?
    }

    async fn password_matches(&self, password: &str, stored: &str) -> bool {
        let params = self.params.clone();
        let password = password.to_owned();
        let stored = stored.to_owned();
        tokio::task::spawn_blocking(move || matches_with(&params, &password, &stored))
            .await
            .unwrap_or(false)
    }

    /// Create a new account.
    ///
    /// # Errors
    ///
    /// Validation failures, [`AccountError::EmailTaken`] for a duplicate
    /// email, or [`AccountError::Hash`] if the password cannot be hashed.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<SessionUser, AccountError> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(AccountError::InvalidName);
        }
        let email = normalize_email(email).ok_or(AccountError::InvalidEmail)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AccountError::WeakPassword);
        }
        if self.accounts.read().await.by_email.contains_key(&email) {
            return Err(AccountError::EmailTaken);
        }

        let password_hash = self.hash_password(password).await?;
        let account = Account {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.clone(),
            password_hash,
            created_at: OffsetDateTime::now_utc(),
        };

        let mut accounts = self.accounts.write().await;
        // Re-check under the write lock; another registration may have won.
        if accounts.by_email.contains_key(&email) {
            return Err(AccountError::EmailTaken);
        }
        let user = account.to_user();
        accounts.by_email.insert(email, account.id);
        accounts.by_id.insert(account.id, account);
        Ok(user)
    }

    /// Check an email/password pair.
    ///
    /// # Errors
    ///
    /// [`AccountError::InvalidCredentials`] for an unknown email, a malformed
    /// email, or a wrong password.
    pub async fn verify(&self, email: &str, password: &str) -> Result<SessionUser, AccountError> {
        let email = normalize_email(email).ok_or(AccountError::InvalidCredentials)?;
        let account = {
            let accounts = self.accounts.read().await;
            accounts.by_email.get(&email).and_then(|id| accounts.by_id.get(id)).cloned()
        };
        let Some(account) = account else {
            // Spend a comparable hash so unknown emails are not faster to reject.
            let _ = self.hash_password(password).await;
            return Err(AccountError::InvalidCredentials);
        };
        if self.password_matches(password, &account.password_hash).await {
            Ok(account.to_user())
        } else {
            Err(AccountError::InvalidCredentials)
        }
    }

    /// Look up an account by id.
    pub async fn get(&self, id: Uuid) -> Option<SessionUser> {
        self.accounts.read().await.by_id.get(&id).map(Account::to_user)
    }
}
