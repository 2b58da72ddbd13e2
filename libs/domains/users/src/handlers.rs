use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::errors::{
    handlers::not_found,
    responses::{InternalServerErrorResponse, RouteNotFoundResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::extract::UserJson;
use crate::models::{User, UserPayload};
use crate::repository::UserRepository;
use crate::responses::{
    BadRequestResponse, EmailConflictResponse, EmptyData, Envelope, FailureBody, UserData,
    UserNotFoundResponse, UsersData, messages,
};
use crate::service::UserService;
use crate::validation::FieldViolation;

pub const TAG: &str = "Users";

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, get_user, replace_user, patch_user, delete_user),
    components(
        schemas(User, UserPayload, FieldViolation, FailureBody, UserData, UsersData, EmptyData),
        responses(
            BadRequestResponse,
            EmailConflictResponse,
            UserNotFoundResponse,
            RouteNotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router with all HTTP endpoints
///
/// A known path with an unsupported method gets the same 404 body as an
/// unknown path.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{id}",
            get(get_user)
                .put(replace_user)
                .patch(patch_user)
                .delete(delete_user),
        )
        .method_not_allowed_fallback(not_found)
        .with_state(shared_service)
}

/// List all users
///
/// An empty store answers 204 with no body.
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Users found", body = Envelope<UsersData>),
        (status = 204, description = "No users stored"),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Response> {
    let users = service.list_users().await?;

    if users.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(Envelope::ok(messages::USERS_FOUND, UsersData { users })).into_response())
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = UserPayload,
    responses(
        (status = 201, description = "User has been added successfully!", body = Envelope<UserData>),
        (status = 400, response = BadRequestResponse),
        (status = 409, response = EmailConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UserJson(input): UserJson,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(messages::USER_ADDED, UserData { user })),
    ))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = Envelope<UserData>),
        (status = 404, response = UserNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<Envelope<UserData>>> {
    let user = service.get_user(&id).await?;
    Ok(Json(Envelope::ok(messages::USER_FOUND, UserData { user })))
}

/// Replace a user
///
/// All three fields are required.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = Envelope<UserData>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = UserNotFoundResponse),
        (status = 409, response = EmailConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn replace_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    UserJson(input): UserJson,
) -> UserResult<Json<Envelope<UserData>>> {
    let user = service.replace_user(&id, input).await?;
    Ok(Json(Envelope::ok(messages::USER_UPDATED, UserData { user })))
}

/// Partially update a user
///
/// Only the supplied fields change; the merged record must still pass the
/// format rules.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated successfully", body = Envelope<UserData>),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = UserNotFoundResponse),
        (status = 409, response = EmailConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn patch_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    UserJson(input): UserJson,
) -> UserResult<Json<Envelope<UserData>>> {
    let user = service.patch_user(&id, input).await?;
    Ok(Json(Envelope::ok(messages::USER_UPDATED, UserData { user })))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully!", body = Envelope<EmptyData>),
        (status = 404, response = UserNotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<Envelope<EmptyData>>> {
    service.delete_user(&id).await?;
    Ok(Json(Envelope::ok(messages::USER_DELETED, EmptyData {})))
}
