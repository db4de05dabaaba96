//! User endpoints.
//!
//! ```text
//! GET    /api/users
//! POST   /api/users {"username":"ada","hash":"correct horse"}
//! GET    /api/users/{username}
//! DELETE /api/users/{username}
//! PUT    /api/users/{username}
//! ```

use actix_web::{HttpResponse, web};

use super::resources;
use super::schemas::{UserDraftSchema, UserSchema};
use super::{ApiResult, ErrorBody};
use crate::domain::{ResourceService, UserResource};

/// Service handle injected into user handlers.
pub type UserService = web::Data<ResourceService<UserResource>>;

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users ordered by username", body = [UserSchema]),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(service: UserService) -> ApiResult<HttpResponse> {
    resources::list(service.get_ref()).await
}

/// Register a user. The credential is hashed before it is stored.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserDraftSchema,
    responses(
        (status = 201, description = "User created", body = String, example = json!("User ada created")),
        (status = 400, description = "Malformed body or missing fields", body = ErrorBody),
        (status = 409, description = "Username already exists", body = ErrorBody),
        (status = 500, description = "Hashing or store failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(service: UserService, payload: web::Payload) -> ApiResult<HttpResponse> {
    resources::create(service.get_ref(), payload).await
}

/// Fetch one user by username.
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(service: UserService, username: web::Path<String>) -> ApiResult<HttpResponse> {
    resources::get(service.get_ref(), username.as_str()).await
}

/// Delete one user by username.
#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User deleted", body = String, example = json!("User ada deleted")),
        (status = 404, description = "No such user", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    service: UserService,
    username: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::delete(service.get_ref(), username.as_str()).await
}

/// Updating users is not supported.
#[utoipa::path(
    put,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 501, description = "Not implemented", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    service: UserService,
    username: web::Path<String>,
) -> ApiResult<HttpResponse> {
    resources::update(service.get_ref(), username.as_str())
}
