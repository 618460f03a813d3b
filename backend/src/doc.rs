//! OpenAPI document for the REST surface.

use actix_web::{get, web};
use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User, validation};
use crate::inbound::http::{health, users};

/// OpenAPI description of the user records API.
#[derive(OpenApi)]
#[openapi(
    paths(
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        health::live,
        health::ready,
    ),
    components(schemas(
        User,
        validation::CreateUserRequest,
        validation::UpdateUserRequest,
        validation::FieldError,
        users::DeleteConfirmation,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "users", description = "User record management"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON (mounted in debug builds).
#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.contains(&&"/users".to_owned()));
        assert!(paths.contains(&&"/users/{id}".to_owned()));
        assert!(paths.contains(&&"/health/ready".to_owned()));
    }
}
