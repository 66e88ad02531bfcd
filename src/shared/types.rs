use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response envelope used for error bodies
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::<()>::error(
            Some("User not found".to_string()),
            None,
        ))
        .unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "User not found");
        for key in ["success", "data", "message", "meta", "errors"] {
            assert!(body.get(key).is_some(), "missing key {}", key);
        }
        assert!(body["data"].is_null());
        assert!(body["meta"].is_null());
        assert!(body["errors"].is_null());
    }
}
