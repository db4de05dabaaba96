//! Task endpoints.
//!
//! ```text
//! GET    /api/tasks
//! POST   /api/tasks {"title":"t1","description":"d","status":"open"}
//! GET    /api/tasks/{taskname}
//! DELETE /api/tasks/{taskname}
//! PUT    /api/tasks/{taskname}
//! ```

use actix_web::{HttpResponse, web};

use super::resources;
use super::schemas::{TaskDraftSchema, TaskSchema};
use super::{ApiResult, ErrorBody};
use crate::domain::{ResourceService, TaskResource};

/// Service handle injected into task handlers.
pub type TaskService = web::Data<ResourceService<TaskResource>>;

/// List every task.
#[utoipa::path(
    get,
    path = "/api/tasks",
    responses(
        (status = 200, description = "Tasks ordered by title", body = [TaskSchema]),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "listTasks"
)]
pub async fn list_tasks(service: TaskService) -> ApiResult<HttpResponse> {
    resources::list(service.get_ref()).await
}

/// Create a task.
#[utoipa::path(
    post,
    path = "/api/tasks",
    request_body = TaskDraftSchema,
    responses(
        (status = 201, description = "Task created", body = String, example = json!("Task t1 created")),
        (status = 400, description = "Malformed body or missing fields", body = ErrorBody),
        (status = 409, description = "Task name already exists", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "createTask"
)]
pub async fn create_task(service: TaskService, payload: web::Payload) -> ApiResult<HttpResponse> {
    resources::create(service.get_ref(), payload).await
}

/// Fetch one task by title.
#[utoipa::path(
    get,
    path = "/api/tasks/{taskname}",
    params(("taskname" = String, Path, description = "Task title")),
    responses(
        (status = 200, description = "Task", body = TaskSchema),
        (status = 404, description = "No such task", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "getTask"
)]
pub async fn get_task(service: TaskService, taskname: web::Path<String>) -> ApiResult<HttpResponse> {
    resources::get(service.get_ref(), taskname.as_str()).await
}

/// Delete one task by title.
#[utoipa::path(
    delete,
    path = "/api/tasks/{taskname}",
    params(("taskname" = String, Path, description = "Task title")),
    responses(
        (status = 200, description = "Task deleted", body = String, example = json!("Task t1 deleted")),
        (status = 404, description = "No such task", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "deleteTask"
)]
pub async fn delete_task(
    service: TaskService,
    taskname: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(service.get_ref(), taskname.as_str()).await
}

/// Updating tasks is not supported.
#[utoipa::path(
    put,
    path = "/api/tasks/{taskname}",
    params(("taskname" = String, Path, description = "Task title")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorBody)
    ),
    tags = ["tasks"],
    operation_id = "updateTask"
)]
pub async fn update_task(
    service: TaskService,
    taskname: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::update(service.get_ref(), taskname.as_str())
}
