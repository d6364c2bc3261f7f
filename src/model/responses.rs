use crate::presentation::user::User;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Body of a successful token renewal; fields other than `access` are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshResponse {
    /// New access token
    pub access: String,
}

/// Access and refresh token issued together
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenPair {
    /// Access token
    pub access: String,
    /// Refresh token
    pub refresh: String,
}

/// Body returned by login and registration
///
/// Tokens are accepted either at the top level (`{"access", "refresh"}`) or
/// nested under `tokens`.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthResponse {
    /// Profile of the authenticated user, when included
    #[serde(default)]
    pub user: Option<User>,
    /// Access token at the top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Refresh token at the top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
    /// Tokens nested under `tokens`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenPair>,
    /// Informational message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AuthResponse {
    /// The issued tokens, whichever layout the server used
    #[must_use]
    pub fn token_pair(&self) -> Option<TokenPair> {
        if let Some(tokens) = &self.tokens {
            return Some(tokens.clone());
        }
        match (&self.access, &self.refresh) {
            (Some(access), Some(refresh)) => Some(TokenPair {
                access: access.clone(),
                refresh: refresh.clone(),
            }),
            _ => None,
        }
    }
}

/// A list endpoint body: either a bare array or a paginated envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Listing<T> {
    /// `{"count", "next", "previous", "results"}`
    Paginated {
        /// Total number of items across pages
        count: u64,
        /// URL of the next page
        #[serde(default)]
        next: Option<String>,
        /// URL of the previous page
        #[serde(default)]
        previous: Option<String>,
        /// Items on this page
        results: Vec<T>,
    },
    /// `[...]`
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Items on this page
    pub fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paginated { results, .. } => results,
            Listing::Plain(items) => items,
        }
    }

    /// URL of the next page, if the server paginates and one exists
    pub fn next_page(&self) -> Option<&str> {
        match self {
            Listing::Paginated { next, .. } => next.as_deref(),
            Listing::Plain(_) => None,
        }
    }
}
