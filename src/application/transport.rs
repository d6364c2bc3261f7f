//! HTTP transport used by the gateway
//!
//! The gateway only needs "send this request, give me the buffered
//! response". Keeping that behind a trait lets hosts plug in their own HTTP
//! stack and lets tests script responses.

use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{HttpRequest, HttpResponse, MultipartPart, RequestBody};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::time::Duration;
use tracing::debug;

/// Sends one HTTP request and returns the buffered response
///
/// Non-success statuses are responses, not errors. An `Err` means the round
/// trip itself failed.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends `request` to `url`
    async fn execute(&self, url: &str, request: &HttpRequest) -> Result<HttpResponse, AppError>;
}

/// [`HttpTransport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport with the configured timeout
    ///
    /// A timeout of `0` disables the per-request timeout.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        match config.rest_api.timeout {
            0 => debug!("Request timeout disabled"),
            secs => builder = builder.timeout(Duration::from_secs(secs)),
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an existing `reqwest` client
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    fn build(&self, url: &str, request: &HttpRequest) -> Result<RequestBuilder, AppError> {
        let mut builder = self.client.request(request.method.clone(), url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.multipart(build_form(parts)?),
        };

        Ok(builder)
    }
}

fn build_form(parts: &[MultipartPart]) -> Result<Form, AppError> {
    let mut form = Form::new();
    for part in parts {
        let mut field = Part::bytes(part.bytes.clone());
        if let Some(file_name) = &part.file_name {
            field = field.file_name(file_name.clone());
        }
        if let Some(mime) = &part.mime {
            field = field
                .mime_str(mime)
                .map_err(|e| AppError::InvalidInput(format!("mime type {mime:?}: {e}")))?;
        }
        form = form.part(part.name.clone(), field);
    }
    Ok(form)
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, url: &str, request: &HttpRequest) -> Result<HttpResponse, AppError> {
        debug!("{} {}", request.method, url);

        let response = self.build(url, request)?.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        debug!("Response status: {}", status);
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
