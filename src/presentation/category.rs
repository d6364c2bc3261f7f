use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A category grouping tasks
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Category {
    /// Category id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Color used by the UI, e.g. `#3b82f6`
    #[serde(default)]
    pub color: Option<String>,
    /// Number of tasks in the category, when the server includes it
    #[serde(default)]
    pub task_count: Option<u64>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
