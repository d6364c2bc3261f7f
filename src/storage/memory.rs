use crate::error::AppError;
use crate::storage::credentials::{CredentialKey, CredentialStore};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Credential store that lives for the lifetime of the process
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<CredentialKey, String>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding an access and a refresh token
    #[must_use]
    pub fn with_tokens(access: &str, refresh: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(CredentialKey::AccessToken, access.to_string());
        entries.insert(CredentialKey::RefreshToken, refresh.to_string());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, AppError> {
        Ok(self.entries.read().await.get(&key).cloned())
    }

    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), AppError> {
        self.entries.write().await.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: CredentialKey) -> Result<(), AppError> {
        self.entries.write().await.remove(&key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), AppError> {
        self.entries.write().await.clear();
        Ok(())
    }
}
