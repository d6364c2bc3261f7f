use chrono::{DateTime, NaiveDate, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion state of a task
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Pending,
    /// Started but not finished
    InProgress,
    /// Done
    Completed,
    /// Any state this client does not know about
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Query parameter value for filtering by this status
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Unknown => "unknown",
        }
    }
}

/// Priority of a task
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Low priority
    Low,
    /// Medium priority
    #[default]
    Medium,
    /// High priority
    High,
    /// Any priority this client does not know about
    #[serde(other)]
    Unknown,
}

impl TaskPriority {
    /// Query parameter value for filtering by this priority
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
            TaskPriority::Unknown => "unknown",
        }
    }
}

/// Due date of a task, either a full timestamp or a calendar date
///
/// The server may send `"2025-01-15T09:00:00Z"` or `"2025-01-15"`; both are
/// written back in the form they were read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DueDate {
    /// RFC 3339 timestamp
    At(DateTime<Utc>),
    /// Date without a time of day
    On(NaiveDate),
}

impl DueDate {
    /// Calendar day of the due date, in UTC
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            DueDate::At(at) => at.date_naive(),
            DueDate::On(day) => *day,
        }
    }

    /// True when the due date lies before `now`
    ///
    /// A date-only value is due until the end of that day.
    #[must_use]
    pub fn is_before(&self, now: DateTime<Utc>) -> bool {
        match self {
            DueDate::At(at) => *at < now,
            DueDate::On(day) => *day < now.date_naive(),
        }
    }
}

impl From<DateTime<Utc>> for DueDate {
    fn from(at: DateTime<Utc>) -> Self {
        DueDate::At(at)
    }
}

impl From<NaiveDate> for DueDate {
    fn from(day: NaiveDate) -> Self {
        DueDate::On(day)
    }
}

/// A file attached to a task
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Attachment {
    /// Attachment id, used by `delete_attachment`
    pub id: u64,
    /// URL of the stored file
    pub file: String,
    /// Original file name, when the server reports it
    #[serde(default)]
    pub filename: Option<String>,
    /// Upload time
    #[serde(default)]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// A task
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Task {
    /// Task id
    pub id: u64,
    /// Title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Completion state
    #[serde(default)]
    pub status: TaskStatus,
    /// Priority
    #[serde(default)]
    pub priority: TaskPriority,
    /// Due date
    #[serde(default)]
    pub due_date: Option<DueDate>,
    /// Category id
    #[serde(default)]
    pub category: Option<u64>,
    /// Attached files
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// True when the task is completed
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// True when the task has a due date in the past and is not completed
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.is_completed() && self.due_date.is_some_and(|due| due.is_before(now))
    }
}

/// Aggregate counters returned by `/tasks/statistics/`
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TaskStatistics {
    /// Number of tasks
    #[serde(default)]
    pub total_tasks: u64,
    /// Number of completed tasks
    #[serde(default)]
    pub completed_tasks: u64,
    /// Number of pending tasks
    #[serde(default)]
    pub pending_tasks: u64,
    /// Number of overdue tasks
    #[serde(default)]
    pub overdue_tasks: u64,
    /// Any other counters the server reports
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TaskStatistics {
    /// Share of completed tasks in `[0, 1]`, zero when there are no tasks
    #[must_use]
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            0.0
        } else {
            self.completed_tasks as f64 / self.total_tasks as f64
        }
    }
}
