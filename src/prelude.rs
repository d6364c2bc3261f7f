//! # Task Client Prelude
//!
//! Brings the commonly used types and traits of the crate into scope with a
//! single import.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use task_client::prelude::*;
//!
//! let client = TaskApiClient::new(Config::new())?;
//! let pending = client.tasks().get_pending().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::config::Config;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// GATEWAY, TRANSPORT AND CLIENT
// ============================================================================

/// Typed client
pub use crate::application::client::TaskApiClient;

/// Authenticated gateway and the events it publishes
pub use crate::application::gateway::{Gateway, SessionEvent};

/// HTTP transport trait and its reqwest implementation
pub use crate::application::transport::{HttpTransport, ReqwestTransport};

/// Request and response descriptors
pub use crate::model::http::{HttpRequest, HttpResponse, MultipartPart, RequestBody};

// ============================================================================
// SERVICES
// ============================================================================

/// Service traits
pub use crate::application::services::{AuthService, CategoryService, TaskService};

/// Service implementations
pub use crate::application::services::{AuthServiceImpl, CategoryServiceImpl, TaskServiceImpl};

// ============================================================================
// CREDENTIAL STORAGE
// ============================================================================

/// Credential stores
pub use crate::storage::{
    CredentialKey, CredentialStore, FileCredentialStore, MemoryCredentialStore,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request payloads
pub use crate::model::requests::{
    AttachmentFile, CategoryRequest, LoginRequest, RegisterRequest, TaskPatch, TaskQuery,
    TaskRequest, UpdateProfileRequest,
};

/// Response payloads
pub use crate::model::responses::{AuthResponse, Listing, TokenPair};

/// Domain types
pub use crate::presentation::category::Category;
pub use crate::presentation::task::{
    Attachment, DueDate, Task, TaskPriority, TaskStatistics, TaskStatus,
};
pub use crate::presentation::user::User;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
