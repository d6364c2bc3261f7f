//! HTTP request and response descriptors
//!
//! Requests are plain data so the gateway can replay them after renewing the
//! access token: every field is owned and `Clone`, including multipart file
//! parts, which the transport turns into a fresh form on each send.

use crate::error::AppError;
use crate::utils::id::request_id;
use reqwest::header::{AUTHORIZATION, HeaderMap};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Body of an outgoing request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No body
    #[default]
    Empty,
    /// JSON document sent as `application/json`
    Json(serde_json::Value),
    /// Form sent as `multipart/form-data`
    Multipart(Vec<MultipartPart>),
}

/// One field of a multipart form
#[derive(Debug, Clone, PartialEq)]
pub struct MultipartPart {
    /// Form field name
    pub name: String,
    /// File name reported to the server, `None` for plain text fields
    pub file_name: Option<String>,
    /// MIME type of the part
    pub mime: Option<String>,
    /// Raw contents
    pub bytes: Vec<u8>,
}

impl MultipartPart {
    /// Creates a file part
    pub fn file(name: &str, file_name: &str, mime: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            file_name: Some(file_name.to_string()),
            mime: mime.map(str::to_string),
            bytes,
        }
    }

    /// Creates a text part
    pub fn text(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            file_name: None,
            mime: None,
            bytes: value.as_bytes().to_vec(),
        }
    }
}

/// An HTTP request described as data
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API base URL, or an absolute URL
    pub path: String,
    /// Query string parameters, in order
    pub query: Vec<(String, String)>,
    /// Headers supplied by the caller
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

impl HttpRequest {
    /// Creates a request without query, headers or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// Creates a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Sets a JSON body serialized from `body`
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets a multipart body
    pub fn with_multipart(mut self, parts: Vec<MultipartPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Appends a query parameter
    pub fn with_query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Appends query parameters
    pub fn with_query_pairs(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    /// Sets a header, replacing any header with the same name (case-insensitive)
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    /// Sets a header in place, replacing any header with the same name (case-insensitive)
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Returns the value of a header (case-insensitive)
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Sets `Authorization: Bearer <token>`
    pub fn set_bearer(&mut self, token: &str) {
        self.set_header(AUTHORIZATION.as_str(), &bearer(token));
    }

    /// Returns the `Authorization` header, if any
    #[must_use]
    pub fn authorization(&self) -> Option<&str> {
        self.header(AUTHORIZATION.as_str())
    }
}

/// Formats a token with the bearer scheme
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// An HTTP response with its body fully buffered
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Response status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body as text
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with no headers
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// True for 401
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Decodes the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body).map_err(|e| {
            AppError::Deserialization(format!("{e} (status {}, body {:?})", self.status, self.body))
        })
    }
}

/// Per-dispatch state threaded through the gateway
///
/// `retried` is set before the token renewal starts; a request whose context
/// is already marked is never renewed again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Correlation id used in log spans
    pub id: String,
    /// True once the request has gone through a renewal
    pub retried: bool,
}

impl RequestContext {
    /// Creates a context for a new logical request
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: request_id(),
            retried: false,
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
