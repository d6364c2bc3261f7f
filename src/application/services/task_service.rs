use crate::application::client::TaskApiClient;
use crate::application::interfaces::task::TaskService;
use crate::error::AppError;
use crate::model::http::HttpRequest;
use crate::model::requests::{AttachmentFile, TaskPatch, TaskQuery, TaskRequest};
use crate::model::responses::Listing;
use crate::presentation::task::{Attachment, Task, TaskStatistics};
use async_trait::async_trait;
use tracing::{debug, info};

const TASKS_PATH: &str = "/tasks/";
const TODAY_PATH: &str = "/tasks/today/";
const COMPLETED_PATH: &str = "/tasks/completed/";
const PENDING_PATH: &str = "/tasks/pending/";
const STATISTICS_PATH: &str = "/tasks/statistics/";

fn task_path(id: u64) -> String {
    format!("/tasks/{id}/")
}

/// Implementation of the task service
#[derive(Debug, Clone)]
pub struct TaskServiceImpl {
    client: TaskApiClient,
}

impl TaskServiceImpl {
    /// Creates the service on top of `client`
    pub fn new(client: TaskApiClient) -> Self {
        Self { client }
    }

    async fn list(&self, request: HttpRequest) -> Result<Vec<Task>, AppError> {
        let path = request.path.clone();
        let listing: Listing<Task> = self.client.request(request).await?;
        let tasks = listing.into_items();
        debug!("Tasks obtained from {}: {}", path, tasks.len());
        Ok(tasks)
    }
}

#[async_trait]
impl TaskService for TaskServiceImpl {
    async fn get_all(&self, query: &TaskQuery) -> Result<Vec<Task>, AppError> {
        self.list(HttpRequest::get(TASKS_PATH).with_query_pairs(query.to_query_pairs()))
            .await
    }

    async fn get_by_id(&self, id: u64) -> Result<Task, AppError> {
        self.client.get(&task_path(id)).await
    }

    async fn get_today(&self) -> Result<Vec<Task>, AppError> {
        self.list(HttpRequest::get(TODAY_PATH)).await
    }

    async fn get_completed(&self) -> Result<Vec<Task>, AppError> {
        self.list(HttpRequest::get(COMPLETED_PATH)).await
    }

    async fn get_pending(&self) -> Result<Vec<Task>, AppError> {
        self.list(HttpRequest::get(PENDING_PATH)).await
    }

    async fn get_statistics(&self) -> Result<TaskStatistics, AppError> {
        self.client.get(STATISTICS_PATH).await
    }

    async fn create(&self, data: &TaskRequest) -> Result<Task, AppError> {
        info!("Creating task {}", data.title);
        let task: Task = self.client.post(TASKS_PATH, data).await?;
        debug!("Task created with id {}", task.id);
        Ok(task)
    }

    async fn update(&self, id: u64, data: &TaskRequest) -> Result<Task, AppError> {
        info!("Updating task {}", id);
        self.client.put(&task_path(id), data).await
    }

    async fn partial_update(&self, id: u64, data: &TaskPatch) -> Result<Task, AppError> {
        info!("Patching task {}", id);
        self.client.patch(&task_path(id), data).await
    }

    async fn delete(&self, id: u64) -> Result<(), AppError> {
        info!("Deleting task {}", id);
        self.client.delete(&task_path(id)).await
    }

    async fn toggle_status(&self, id: u64) -> Result<Task, AppError> {
        info!("Toggling status of task {}", id);
        self.client
            .patch_empty(&format!("/tasks/{id}/toggle_status/"))
            .await
    }

    async fn upload_attachment(
        &self,
        id: u64,
        file: AttachmentFile,
    ) -> Result<Attachment, AppError> {
        info!(
            "Uploading {} ({} bytes) to task {}",
            file.file_name,
            file.bytes.len(),
            id
        );
        self.client
            .post_multipart(
                &format!("/tasks/{id}/upload_attachment/"),
                vec![file.into_part()],
            )
            .await
    }

    async fn delete_attachment(&self, task_id: u64, attachment_id: u64) -> Result<(), AppError> {
        info!("Deleting attachment {} of task {}", attachment_id, task_id);
        let request = HttpRequest::delete(format!("/tasks/{task_id}/delete_attachment/"))
            .with_query("attachment_id", attachment_id);
        self.client.send(request).await.map(|_| ())
    }
}
