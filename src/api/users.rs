//! User management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::{CreateUser, User},
};

use super::{IdPath, MessageResponse, Payload};

#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Serialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 500, description = "Invalid input or email already used", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    WithRejection(Json(user), _): Payload<CreateUser>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.services.users.create(user).await?;
    Ok((StatusCode::CREATED, MessageResponse::new("User created successfully")))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = UsersResponse)
    )
)]
pub async fn list_users(State(state): State<crate::AppState>) -> AppResult<Json<UsersResponse>> {
    let users = state.services.users.list().await?;
    Ok(Json(UsersResponse { users }))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = UserResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<crate::AppState>,
    WithRejection(Path(id), _): IdPath<i64>,
) -> AppResult<Json<UserResponse>> {
    let user = state.services.users.get_by_id(id).await?;
    Ok(Json(UserResponse { user }))
}
