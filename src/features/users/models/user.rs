use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::users::dtos::{CreateUserResponseDto, UserResponseDto};

/// Database model for user
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// `<salt>$<hash>`, see `shared::password`
    pub password: String,
    pub permission_level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload with the password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: String,
    pub permission_level: i32,
}

impl From<User> for CreateUserResponseDto {
    fn from(u: User) -> Self {
        Self { id: u.id }
    }
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            permission_level: u.permission_level,
            created_at: u.created_at,
        }
    }
}
