use crate::error::AppError;
use crate::model::requests::{AttachmentFile, TaskPatch, TaskQuery, TaskRequest};
use crate::presentation::task::{Attachment, Task, TaskStatistics};
use async_trait::async_trait;

/// Interface for the task endpoints
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Lists tasks matching `query`
    async fn get_all(&self, query: &TaskQuery) -> Result<Vec<Task>, AppError>;

    /// Gets one task
    async fn get_by_id(&self, id: u64) -> Result<Task, AppError>;

    /// Lists tasks due today
    async fn get_today(&self) -> Result<Vec<Task>, AppError>;

    /// Lists completed tasks
    async fn get_completed(&self) -> Result<Vec<Task>, AppError>;

    /// Lists pending tasks
    async fn get_pending(&self) -> Result<Vec<Task>, AppError>;

    /// Gets aggregate counters
    async fn get_statistics(&self) -> Result<TaskStatistics, AppError>;

    /// Creates a task
    async fn create(&self, data: &TaskRequest) -> Result<Task, AppError>;

    /// Replaces a task
    async fn update(&self, id: u64, data: &TaskRequest) -> Result<Task, AppError>;

    /// Changes the given fields of a task
    async fn partial_update(&self, id: u64, data: &TaskPatch) -> Result<Task, AppError>;

    /// Deletes a task
    async fn delete(&self, id: u64) -> Result<(), AppError>;

    /// Flips a task between pending and completed
    async fn toggle_status(&self, id: u64) -> Result<Task, AppError>;

    /// Uploads a file and attaches it to a task
    async fn upload_attachment(&self, id: u64, file: AttachmentFile)
    -> Result<Attachment, AppError>;

    /// Removes an attachment from a task
    async fn delete_attachment(&self, task_id: u64, attachment_id: u64) -> Result<(), AppError>;
}
