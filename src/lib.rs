//! # Task Client
//!
//! An asynchronous client for the task manager REST API (authentication, tasks
//! and categories).
//!
//! Every request goes through the [`Gateway`](application::gateway::Gateway),
//! which attaches the stored bearer access token and, when the server answers
//! `401 Unauthorized`, renews the access token once with the stored refresh
//! token and replays the request. If renewal fails the stored credentials are
//! removed and a [`SessionEvent::Invalidated`](application::gateway::SessionEvent)
//! is published so the hosting application can return to its signed-out state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use task_client::prelude::*;
//!
//! let client = TaskApiClient::new(Config::new())?;
//! client.auth().login(&LoginRequest::new("alice", "secret")).await?;
//!
//! for task in client.tasks().get_pending().await? {
//!     println!("{}", task.title);
//! }
//! ```
//!
//! ## Configuration
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `TASK_API_URL` | `http://127.0.0.1:8000/api` | base URL of the API |
//! | `TASK_API_TIMEOUT` | `30` | request timeout in seconds, `0` disables it |
//! | `TASK_CREDENTIALS_PATH` | unset | JSON file used to persist credentials |
//! | `LOGLEVEL` | `INFO` | log level used by [`utils::logger::setup_logger`] |

/// Gateway, transport, typed client and endpoint services
pub mod application;
/// Crate-wide constants
pub mod constants;
/// Error type shared by every module
pub mod error;
/// HTTP descriptors and wire payloads
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain types returned by the API
pub mod presentation;
/// Credential storage
pub mod storage;
/// Environment, logging and id helpers
pub mod utils;

/// Re-exported so callers can name the configuration as `task_client::config::Config`
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
