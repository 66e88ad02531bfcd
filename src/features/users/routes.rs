//! User routes

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Create routes for the users feature
pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/users", post(handlers::insert))
        .route("/users/{id}", get(handlers::get_by_id))
        .with_state(service)
}
