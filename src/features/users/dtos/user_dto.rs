use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request DTO for user registration
///
/// Fields outside the user schema are ignored, including any
/// `permissionLevel` sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Plaintext password; only its salted hash is stored
    pub password: String,
}

/// Response DTO for user registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponseDto {
    pub id: Uuid,
}

/// Public view of a stored user (never includes the password)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub permission_level: i32,
    pub created_at: DateTime<Utc>,
}
