use contracts::domain::project::ProjectId;
use contracts::domain::task::{
    CreateTaskPayload, MyTask, ProjectTasks, TaskId, TaskStatus, TaskStatusPayload, TaskUpdated,
    UpdateTaskPayload,
};
use contracts::shared::api::{ApiMessage, Items};

use crate::shared::api_client::ApiClient;

pub async fn create(api: ApiClient, payload: &CreateTaskPayload) -> Result<ApiMessage, String> {
    api.post("/api/tasks", payload).await
}

/// Tasks of one project plus the completion summary.
pub async fn by_project(api: ApiClient, project_id: ProjectId) -> Result<ProjectTasks, String> {
    api.get(&format!("/api/tasks/project/{}", project_id)).await
}

pub async fn update(
    api: ApiClient,
    id: TaskId,
    payload: &UpdateTaskPayload,
) -> Result<TaskUpdated, String> {
    api.put(&format!("/api/tasks/{}", id), payload).await
}

/// Status-only transition, used by the board and by My Tasks.
pub async fn update_status(
    api: ApiClient,
    id: TaskId,
    status: TaskStatus,
) -> Result<TaskUpdated, String> {
    api.put(
        &format!("/api/tasks/{}/status", id),
        &TaskStatusPayload { status },
    )
    .await
}

pub async fn delete(api: ApiClient, id: TaskId) -> Result<ApiMessage, String> {
    api.delete(&format!("/api/tasks/{}", id)).await
}

/// Tasks assigned to the current user across projects.
pub async fn my_tasks(api: ApiClient) -> Result<Vec<MyTask>, String> {
    let body: Items<MyTask> = api.get("/api/tasks/my").await?;
    Ok(body.items)
}
