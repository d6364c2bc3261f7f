//! Authenticated request gateway
//!
//! Every request leaving the client goes through [`Gateway::dispatch`]:
//!
//! 1. the stored access token, if any, is attached as `Authorization: Bearer <token>`;
//! 2. the request is sent on the [`HttpTransport`];
//! 3. any response other than `401 Unauthorized` is returned untouched;
//! 4. on the first 401 the access token is renewed with the stored refresh
//!    token and the request is replayed once. A 401 on the replay is
//!    returned as [`AppError::Unauthorized`].
//!
//! When renewal fails the credentials are removed from the store and
//! [`SessionEvent::Invalidated`] is broadcast; the caller receives
//! [`AppError::TokenRefresh`] carrying the cause.
//!
//! Renewals are single-flight: concurrent requests that hit a 401 with the
//! same stale token share one refresh call.

use crate::application::config::join_url;
use crate::application::transport::HttpTransport;
use crate::constants::{REFRESH_PATH, SESSION_EVENT_CAPACITY};
use crate::error::AppError;
use crate::model::http::{HttpRequest, HttpResponse, RequestContext};
use crate::model::requests::RefreshRequest;
use crate::model::responses::RefreshResponse;
use crate::storage::credentials::{CredentialKey, CredentialStore};
use reqwest::Method;
use std::fmt;
use std::sync::Arc;
use tokio::sync::{Mutex, broadcast};
use tracing::{Instrument, debug, error, info, info_span, warn};

/// Session lifecycle notifications published by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A new access token was obtained and stored
    TokenRefreshed,
    /// Renewal failed and the stored credentials were removed
    Invalidated {
        /// Why the renewal failed
        reason: String,
    },
}

/// Attaches credentials to outgoing requests and renews expired access tokens
pub struct Gateway {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    store: Arc<dyn CredentialStore>,
    events: broadcast::Sender<SessionEvent>,
    refresh_lock: Mutex<()>,
}

impl Gateway {
    /// Creates a gateway sending requests relative to `base_url`
    pub fn new(
        base_url: &str,
        transport: Arc<dyn HttpTransport>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            store,
            events,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Subscribes to session events
    ///
    /// Only events published after the call are received.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// The credential store consulted on every request
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Base URL requests are resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `request`, renewing the access token and replaying at most once on 401
    ///
    /// # Returns
    /// * `Ok(HttpResponse)` - Any response other than 401, success or not
    /// * `Err(AppError::Unauthorized)` - The replay after a renewal was rejected too
    /// * `Err(AppError::TokenRefresh)` - Renewal failed; the session was torn down
    /// * `Err(_)` - Transport or credential store failure
    pub async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let ctx = RequestContext::new();
        let span = info_span!(
            "dispatch",
            id = %ctx.id,
            method = %request.method,
            path = %request.path
        );
        self.dispatch_with(ctx, request).instrument(span).await
    }

    async fn dispatch_with(
        &self,
        mut ctx: RequestContext,
        mut request: HttpRequest,
    ) -> Result<HttpResponse, AppError> {
        let url = join_url(&self.base_url, &request.path);

        loop {
            let sent_token = self.authorize(&mut request).await?;
            let response = self.transport.execute(&url, &request).await?;

            if !response.is_unauthorized() {
                return Ok(response);
            }

            if ctx.retried {
                warn!("Request rejected again after token renewal");
                return Err(AppError::Unauthorized {
                    body: response.body,
                });
            }

            ctx.retried = true;
            warn!("Access token rejected, renewing");
            let access = self.renew(sent_token.as_deref()).await?;
            request.set_bearer(&access);
        }
    }

    /// Attaches the stored access token, returning the token that was attached
    async fn authorize(&self, request: &mut HttpRequest) -> Result<Option<String>, AppError> {
        let token = self.store.get(CredentialKey::AccessToken).await?;
        match &token {
            Some(token) => request.set_bearer(token),
            None => debug!("No access token stored, sending request without credentials"),
        }
        Ok(token)
    }

    async fn renew(&self, rejected: Option<&str>) -> Result<String, AppError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.store.get(CredentialKey::AccessToken).await? {
            if rejected != Some(current.as_str()) {
                debug!("Access token was renewed by a concurrent request");
                return Ok(current);
            }
        }

        match self.request_access_token().await {
            Ok(access) => {
                self.store.set(CredentialKey::AccessToken, &access).await?;
                info!("Access token renewed");
                self.publish(SessionEvent::TokenRefreshed);
                Ok(access)
            }
            Err(cause) => {
                error!("Token renewal failed: {}", cause);
                self.teardown(&cause).await;
                Err(AppError::TokenRefresh(Box::new(cause)))
            }
        }
    }

    /// Calls the refresh endpoint directly on the transport, without credentials
    async fn request_access_token(&self) -> Result<String, AppError> {
        let refresh = self
            .store
            .get(CredentialKey::RefreshToken)
            .await?
            .ok_or(AppError::MissingCredential(
                CredentialKey::RefreshToken.as_str(),
            ))?;

        let request =
            HttpRequest::new(Method::POST, REFRESH_PATH).with_json(&RefreshRequest::new(&refresh))?;
        let url = join_url(&self.base_url, REFRESH_PATH);
        let response = self.transport.execute(&url, &request).await?;

        if !response.is_success() {
            return Err(AppError::Api {
                status: response.status,
                body: response.body,
            });
        }

        let parsed: RefreshResponse = response.json()?;
        if parsed.access.is_empty() {
            return Err(AppError::Deserialization(
                "refresh response carried an empty access token".to_string(),
            ));
        }
        Ok(parsed.access)
    }

    async fn teardown(&self, cause: &AppError) {
        if let Err(e) = self.store.clear().await {
            error!("Failed to clear credentials: {}", e);
        }
        info!("Session invalidated");
        self.publish(SessionEvent::Invalidated {
            reason: cause.to_string(),
        });
    }

    fn publish(&self, event: SessionEvent) {
        if self.events.send(event).is_err() {
            debug!("No session listeners");
        }
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("base_url", &self.base_url)
            .field("listeners", &self.events.receiver_count())
            .finish()
    }
}
