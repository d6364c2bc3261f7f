//! Credential store abstraction
//!
//! The store is the single source of truth for the session: the gateway
//! reads the access token from it before every request and writes the renewed
//! token back after a successful refresh. Nothing caches these values in
//! memory outside the store.

use crate::error::AppError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names of the entries kept in a [`CredentialStore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKey {
    /// Short-lived bearer token sent as `Authorization: Bearer <token>`
    AccessToken,
    /// Long-lived token used only to obtain a new access token
    RefreshToken,
    /// Cached user profile, stored as a JSON string
    UserData,
}

impl CredentialKey {
    /// Every key, in storage order
    pub const ALL: [CredentialKey; 3] = [
        CredentialKey::AccessToken,
        CredentialKey::RefreshToken,
        CredentialKey::UserData,
    ];

    /// Key name as persisted
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKey::AccessToken => "access_token",
            CredentialKey::RefreshToken => "refresh_token",
            CredentialKey::UserData => "user_data",
        }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key/value storage for session credentials
///
/// Implementations must be strongly consistent per key: a `get` issued after
/// a completed `set` observes the new value.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Reads an entry
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, AppError>;

    /// Writes an entry, replacing any previous value
    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), AppError>;

    /// Deletes an entry. Deleting a missing entry is not an error.
    async fn remove(&self, key: CredentialKey) -> Result<(), AppError>;

    /// Deletes every entry
    async fn clear(&self) -> Result<(), AppError> {
        for key in CredentialKey::ALL {
            self.remove(key).await?;
        }
        Ok(())
    }

    /// Stores a freshly issued token pair
    async fn set_tokens(&self, access: &str, refresh: &str) -> Result<(), AppError> {
        self.set(CredentialKey::AccessToken, access).await?;
        self.set(CredentialKey::RefreshToken, refresh).await
    }
}
