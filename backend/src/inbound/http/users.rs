//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! GET /api/users/{id}
//! POST /api/users {"firstName":"Ada","lastName":"Lovelace"}
//! PUT /api/users/{id} {"firstName":"Grace","lastName":"Hopper"}
//! ```
//!
//! Unknown users produce a bare 404 with no body; every other failure uses
//! the shared JSON error payload.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Body returned by a successful create.
pub const USER_ADDED: &str = "User Added Successfully";
/// Body returned by a successful update.
pub const USER_UPDATED: &str = "User Updated Successfully";

/// Request body for create and update.
///
/// An `id` field, if present, is ignored; ids are only assigned by storage.
/// Names are not validated: a missing or `null` name is stored as absent.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        UserDraft::from_parts(value.first_name, value.last_name)
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    raw.parse().map_err(|_| {
        Error::invalid_request("id must be an integer").with_details(json!({
            "field": "id",
            "value": raw,
            "code": "invalid_id",
        }))
    })
}

fn text_ok(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

/// List every stored user in ascending id order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_service::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "No such user; empty body"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;
    match state.users.fetch_user(&id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::NotFound().finish()),
    }
}

/// Create a user; the server assigns the id.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User stored", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    state
        .users_command
        .add_user(payload.into_inner().into())
        .await?;
    Ok(text_ok(USER_ADDED))
}

/// Overwrite both names of an existing user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    request_body = UserRequest,
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid id or body", body = ErrorSchema),
        (status = 404, description = "No such user; empty body"),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner())?;
    let updated = state
        .users_command
        .update_user(&id, payload.into_inner().into())
        .await?;
    if updated {
        Ok(text_ok(USER_UPDATED))
    } else {
        Ok(HttpResponse::NotFound().finish())
    }
}

#[cfg(test)]
mod tests;
