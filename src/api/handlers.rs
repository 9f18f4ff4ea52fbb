//! API request handlers.

use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateUserRequest, User, WelcomeResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use tracing::{error, info};


// ============================================================================
// Welcome
// ============================================================================

/// Root endpoint.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    ),
    tag = "General"
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}

// ============================================================================
// Users
// ============================================================================

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Persistence failure", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(request) = payload?;

    let user = state
        .db
        .insert_user(&request.username)
        .await
        .inspect_err(|e| error!("Failed to insert user: {}", e))?;

    info!(id = user.id, username = %user.username, "User created");
    Ok(Json(user))
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users ordered by id", body = Vec<User>),
        (status = 500, description = "Query failure", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .db
        .list_users()
        .await
        .inspect_err(|e| error!("Failed to list users: {}", e))?;

    Ok(Json(users))
}
