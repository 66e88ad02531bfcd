//! User Service - registration and lookup

use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::dtos::{CreateUserDto, CreateUserResponseDto, UserResponseDto};
use crate::features::users::models::NewUser;
use crate::features::users::repositories::UserRepository;
use crate::shared::constants::DEFAULT_PERMISSION_LEVEL;
use crate::shared::password;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Register a user: hash the password, force the default permission
    /// level and persist the record.
    pub async fn insert(&self, dto: CreateUserDto) -> Result<CreateUserResponseDto> {
        let new_user = NewUser {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: password::hash_password(&dto.password)?,
            permission_level: DEFAULT_PERMISSION_LEVEL,
        };

        let user = self.repository.create_user(new_user).await?;

        tracing::info!(
            "User registered: id={}, permission_level={}",
            user.id,
            user.permission_level
        );

        Ok(user.into())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponseDto> {
        self.repository
            .find_user_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }
}
