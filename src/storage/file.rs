//! Credential store persisted as a flat JSON object on disk
//!
//! ```json
//! { "access_token": "...", "refresh_token": "...", "user_data": "{...}" }
//! ```
//!
//! Every `get` reads the file, so several clients (or processes) sharing one
//! file always see the latest written value. Writes are serialized inside the
//! process and land atomically through a temporary file and a rename.
//!
//! A file that does not parse is reported by `get` and replaced by the next
//! write, so `clear` and a new login always leave a usable store.

use crate::error::AppError;
use crate::storage::credentials::{CredentialKey, CredentialStore};
use crate::utils::id::scratch_name;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// Credential store backed by a JSON file
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    /// Creates a store for `path`. The file is created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Entries, AppError> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(Entries::new()),
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                AppError::Deserialization(format!(
                    "credential file {}: {e}",
                    self.path.display()
                ))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, entries: &Entries) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                AppError::Storage(format!("invalid credential path {}", self.path.display()))
            })?;
        let tmp = self.path.with_file_name(scratch_name(&format!(".{file_name}")));

        let bytes = serde_json::to_vec_pretty(entries)?;
        if let Err(e) = fs::write(&tmp, bytes).await {
            warn!("Failed to write {}: {}", tmp.display(), e);
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            warn!("Failed to move {} into place: {}", tmp.display(), e);
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        debug!("Credential file {} updated", self.path.display());
        Ok(())
    }

    async fn update<F>(&self, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Entries) + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut entries = match self.load().await {
            Ok(entries) => entries,
            Err(AppError::Deserialization(msg)) => {
                warn!("Discarding unreadable credentials: {}", msg);
                Entries::new()
            }
            Err(e) => return Err(e),
        };
        apply(&mut entries);
        self.persist(&entries).await
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: CredentialKey) -> Result<Option<String>, AppError> {
        Ok(self.load().await?.remove(key.as_str()))
    }

    async fn set(&self, key: CredentialKey, value: &str) -> Result<(), AppError> {
        let value = value.to_string();
        self.update(move |entries| {
            entries.insert(key.as_str().to_string(), value);
        })
        .await
    }

    async fn remove(&self, key: CredentialKey) -> Result<(), AppError> {
        self.update(move |entries| {
            entries.remove(key.as_str());
        })
        .await
    }

    async fn clear(&self) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.persist(&Entries::new()).await
    }

    async fn set_tokens(&self, access: &str, refresh: &str) -> Result<(), AppError> {
        let (access, refresh) = (access.to_string(), refresh.to_string());
        self.update(move |entries| {
            entries.insert(CredentialKey::AccessToken.as_str().to_string(), access);
            entries.insert(CredentialKey::RefreshToken.as_str().to_string(), refresh);
        })
        .await
    }
}
