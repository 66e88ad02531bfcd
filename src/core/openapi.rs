use utoipa::{Modify, OpenApi};

use crate::features::users::{dtos as users_dtos, handlers as users_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Users
        users_handlers::user_handler::insert,
        users_handlers::user_handler::get_by_id,
    ),
    components(
        schemas(
            // Users
            users_dtos::CreateUserDto,
            users_dtos::CreateUserResponseDto,
            users_dtos::UserResponseDto,
        )
    ),
    tags(
        (name = "users", description = "User registration and lookup"),
    ),
    info(
        title = "Users API",
        version = "0.1.0",
        description = "User registration service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_paths_documented() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));
    }

    #[test]
    fn test_info_modifier_overrides_defaults() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Overridden".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Overridden"));
    }
}
