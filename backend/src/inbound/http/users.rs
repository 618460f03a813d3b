//! User record API handlers.
//!
//! ```text
//! POST   /users        {"email":"ada@example.com","name":"Ada"}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}   {"name":"Ada Lovelace"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::validation::{CreateUserRequest, UpdateUserRequest};
use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteConfirmation {
    /// Human-readable confirmation.
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

/// Create a user record.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Record created", body = User),
        (status = 400, description = "Validation failed or email already taken", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state.users_command.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// List all user records.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All records, ordered by id", body = [User]),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch a single user record by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Record found", body = User),
        (status = 404, description = "No record with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    match state.users_query.find_user(id).await? {
        Some(user) => Ok(web::Json(user)),
        None => Err(Error::not_found("User not found")),
    }
}

/// Apply a partial update to a user record.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated record", body = User),
        (status = 400, description = "Validation failed", body = Error),
        (status = 404, description = "No record with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let user = state
        .users_command
        .update_user(path.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(user))
}

/// Delete a user record by id.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Record deleted", body = DeleteConfirmation),
        (status = 404, description = "No record with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeleteConfirmation>> {
    state.users_command.delete_user(path.into_inner()).await?;
    Ok(web::Json(DeleteConfirmation {
        message: "User deleted successfully".into(),
    }))
}
