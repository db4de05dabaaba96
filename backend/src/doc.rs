//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every resource endpoint, the health probes, and the
//! schema mirrors from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds and the `openapi-dump` binary prints it as JSON.

use utoipa::OpenApi;

use crate::inbound::http::ErrorBody;
use crate::inbound::http::schemas::{TaskDraftSchema, TaskSchema, UserDraftSchema, UserSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Todo backend API",
        description = "CRUD over users and tasks backed by PostgreSQL."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::tasks::list_tasks,
        crate::inbound::http::tasks::create_task,
        crate::inbound::http::tasks::get_task,
        crate::inbound::http::tasks::delete_task,
        crate::inbound::http::tasks::update_task,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorBody, UserSchema, UserDraftSchema, TaskSchema, TaskDraftSchema)),
    tags(
        (name = "users", description = "Registered users keyed by username"),
        (name = "tasks", description = "Tasks keyed by title"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
