//! User handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath};
use crate::features::users::dtos::{CreateUserDto, CreateUserResponseDto, UserResponseDto};
use crate::features::users::services::UserService;

/// Register a new user
///
/// The password is salted and hashed before storage and the permission
/// level is always set to 1.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreateUserResponseDto),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "User could not be stored")
    ),
    tag = "users"
)]
pub async fn insert(
    State(service): State<Arc<UserService>>,
    AppJson(dto): AppJson<CreateUserDto>,
) -> Result<(StatusCode, Json<CreateUserResponseDto>)> {
    let created = service.insert(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponseDto),
        (status = 400, description = "Invalid user id"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_by_id(
    State(service): State<Arc<UserService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<UserResponseDto>> {
    let user = service.get_by_id(id).await?;
    Ok(Json(user))
}
