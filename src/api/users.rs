use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::api::payload::Payload;
use crate::api::server::AppState;
use crate::db::models::{User, UserPatch};
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct UserMessage {
    pub message: &'static str,
    pub user: User,
}

/// Path ids that are not integers can never match a stored record.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::UserNotFound)?;
    state
        .users
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::UserNotFound)
}

pub async fn create_user(
    State(state): State<AppState>,
    Payload(user): Payload<User>,
) -> impl IntoResponse {
    tracing::info!(id = user.id, username = %user.username, "Creating user");
    state.users.create(user).await;
    (StatusCode::CREATED, "User created successfully!")
}

pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(patch): Payload<UserPatch>,
) -> Result<Json<UserMessage>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let user = state.users.patch(id, patch).await.ok_or(ApiError::NotFound)?;
    Ok(Json(UserMessage {
        message: "User patched successfully!",
        user,
    }))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserMessage>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound)?;
    let user = state.users.delete(id).await.ok_or(ApiError::NotFound)?;
    tracing::info!(id = user.id, "Deleted user");
    Ok(Json(UserMessage {
        message: "User deleted successfully!",
        user,
    }))
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json("Not Found"))
}
