use crate::error::AppError;
use crate::model::http::MultipartPart;
use crate::presentation::task::{DueDate, TaskPriority, TaskStatus};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Body of the token renewal request
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest<'a> {
    /// Refresh token
    pub refresh: &'a str,
}

impl<'a> RefreshRequest<'a> {
    /// Wraps a refresh token
    pub fn new(refresh: &'a str) -> Self {
        Self { refresh }
    }
}

/// Credentials for `/auth/login/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
}

impl LoginRequest {
    /// Creates login credentials
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// New account data for `/auth/register/`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    /// Login name
    pub username: String,
    /// E-mail address
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub password2: String,
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl RegisterRequest {
    /// Creates a registration with the password repeated as confirmation
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            password2: password.to_string(),
            ..Default::default()
        }
    }

    /// Set the given and family names
    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = Some(first_name.to_string());
        self.last_name = Some(last_name.to_string());
        self
    }
}

/// Fields accepted by `/auth/profile/update/`; unset fields are left unchanged
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default)]
pub struct UpdateProfileRequest {
    /// E-mail address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Task fields sent on create (`POST`) and full update (`PUT`)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default)]
pub struct TaskRequest {
    /// Title
    pub title: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
    /// Category id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
}

impl TaskRequest {
    /// Create a request with just the title (required field)
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the due date, either a timestamp or a calendar date
    pub fn with_due_date(mut self, due_date: impl Into<DueDate>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: u64) -> Self {
        self.category = Some(category);
        self
    }
}

/// Task fields sent on partial update (`PATCH`); only set fields are sent
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default)]
pub struct TaskPatch {
    /// Title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Priority
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    /// Due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
    /// Category id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<u64>,
}

/// Filters for listing tasks, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    /// Only tasks in this state
    pub status: Option<TaskStatus>,
    /// Only tasks with this priority
    pub priority: Option<TaskPriority>,
    /// Only tasks in this category
    pub category: Option<u64>,
    /// Free-text search
    pub search: Option<String>,
    /// Ordering field, e.g. `-due_date`
    pub ordering: Option<String>,
    /// Page number
    pub page: Option<u32>,
}

impl TaskQuery {
    /// Creates an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status filter
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority filter
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the category filter
    pub fn with_category(mut self, category: u64) -> Self {
        self.category = Some(category);
        self
    }

    /// Set the search text
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    /// Set the ordering
    pub fn with_ordering(mut self, ordering: &str) -> Self {
        self.ordering = Some(ordering.to_string());
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Query parameters for the set filters, in a stable order
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(priority) = self.priority {
            pairs.push(("priority".to_string(), priority.as_str().to_string()));
        }
        if let Some(category) = self.category {
            pairs.push(("category".to_string(), category.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering".to_string(), ordering.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        pairs
    }
}

/// Category fields sent on create and update
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, Default)]
pub struct CategoryRequest {
    /// Display name
    pub name: String,
    /// Color used by the UI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CategoryRequest {
    /// Creates a category request
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: None,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// File uploaded as a task attachment
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentFile {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type, if known
    pub mime: Option<String>,
    /// File contents
    pub bytes: Vec<u8>,
}

impl AttachmentFile {
    /// Name of the multipart field the server reads the file from
    pub const FIELD: &'static str = "file";

    /// Creates an attachment from memory
    pub fn new(file_name: &str, bytes: Vec<u8>) -> Result<Self, AppError> {
        if file_name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "attachment file name is empty".to_string(),
            ));
        }
        Ok(Self {
            file_name: file_name.to_string(),
            mime: None,
            bytes,
        })
    }

    /// Set the MIME type
    pub fn with_mime(mut self, mime: &str) -> Self {
        self.mime = Some(mime.to_string());
        self
    }

    /// Reads an attachment from disk, naming it after the file
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("no file name in {}", path.display())))?;
        let bytes = tokio::fs::read(path).await?;
        Self::new(file_name, bytes)
    }

    /// Converts the attachment into the multipart field expected by the server
    #[must_use]
    pub fn into_part(self) -> MultipartPart {
        MultipartPart::file(
            Self::FIELD,
            &self.file_name,
            self.mime.as_deref(),
            self.bytes,
        )
    }
}
