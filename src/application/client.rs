//! Typed client for the task manager API
//!
//! `TaskApiClient` sits on top of the [`Gateway`]: it builds request
//! descriptors, dispatches them, turns non-success statuses into
//! [`AppError`] values and decodes JSON bodies. The endpoint operations are
//! implemented on it in [`crate::application::services`].
//!
//! # Example
//! ```ignore
//! use task_client::prelude::*;
//!
//! let client = TaskApiClient::new(Config::new())?;
//! client.auth().login(&LoginRequest::new("alice", "secret")).await?;
//! let today = client.tasks().get_today().await?;
//!
//! // Endpoints without a typed wrapper go through the verb helpers
//! let raw: serde_json::Value = client.get("/tasks/statistics/").await?;
//! ```

use crate::application::config::Config;
use crate::application::gateway::{Gateway, SessionEvent};
use crate::application::services::{AuthServiceImpl, CategoryServiceImpl, TaskServiceImpl};
use crate::application::transport::{HttpTransport, ReqwestTransport};
use crate::error::AppError;
use crate::model::http::{HttpRequest, HttpResponse, MultipartPart};
use crate::storage::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Client for the task manager API with transparent token renewal
#[derive(Debug, Clone)]
pub struct TaskApiClient {
    gateway: Arc<Gateway>,
    config: Arc<Config>,
}

impl TaskApiClient {
    /// Creates a client using `reqwest` and the credential store named by the configuration
    ///
    /// Credentials go to `config.storage.credentials_path` when set and stay in
    /// memory otherwise.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(&config)?);
        let store: Arc<dyn CredentialStore> = match &config.storage.credentials_path {
            Some(path) => {
                info!("Persisting credentials to {}", path.display());
                Arc::new(FileCredentialStore::new(path))
            }
            None => Arc::new(MemoryCredentialStore::new()),
        };
        Ok(Self::with_parts(config, transport, store))
    }

    /// Creates a client from an explicit transport and credential store
    pub fn with_parts(
        config: Config,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        let gateway = Arc::new(Gateway::new(&config.rest_api.base_url, transport, store));
        Self {
            gateway,
            config: Arc::new(config),
        }
    }

    /// The gateway every request goes through
    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }

    /// The configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The credential store
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        self.gateway.store()
    }

    /// Subscribes to session events (renewals and invalidation)
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.gateway.subscribe()
    }

    /// Authentication and profile endpoints
    pub fn auth(&self) -> AuthServiceImpl {
        AuthServiceImpl::new(self.clone())
    }

    /// Task endpoints
    pub fn tasks(&self) -> TaskServiceImpl {
        TaskServiceImpl::new(self.clone())
    }

    /// Category endpoints
    pub fn categories(&self) -> CategoryServiceImpl {
        CategoryServiceImpl::new(self.clone())
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(HttpRequest::get(path)).await
    }

    /// Makes a GET request with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, AppError> {
        self.request(HttpRequest::get(path).with_query_pairs(query))
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(HttpRequest::new(Method::POST, path).with_json(body)?)
            .await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(HttpRequest::new(Method::PUT, path).with_json(body)?)
            .await
    }

    /// Makes a PATCH request with a JSON body
    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(HttpRequest::new(Method::PATCH, path).with_json(body)?)
            .await
    }

    /// Makes a PATCH request without a body
    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(HttpRequest::new(Method::PATCH, path)).await
    }

    /// Makes a POST request with a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        parts: Vec<MultipartPart>,
    ) -> Result<T, AppError> {
        self.request(HttpRequest::new(Method::POST, path).with_multipart(parts))
            .await
    }

    /// Makes a DELETE request, ignoring the response body
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        self.send(HttpRequest::delete(path)).await.map(|_| ())
    }

    /// Dispatches `request` and decodes a successful JSON body
    pub async fn request<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, AppError> {
        let response = self.send(request).await?;
        response.json()
    }

    /// Dispatches `request`, mapping non-success statuses to errors
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let response = self.gateway.dispatch(request).await?;
        check_status(response)
    }
}

/// Maps non-success statuses to the matching `AppError` variant
pub fn check_status(response: HttpResponse) -> Result<HttpResponse, AppError> {
    if response.is_success() {
        return Ok(response);
    }
    debug!("Request failed with status {}: {}", response.status, response.body);
    match response.status {
        StatusCode::NOT_FOUND => Err(AppError::NotFound),
        StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized {
            body: response.body,
        }),
        status => Err(AppError::Api {
            status,
            body: response.body,
        }),
    }
}
