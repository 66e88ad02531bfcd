//! User registration feature.
//!
//! Self-registration stores the user with a salted password hash and the
//! default permission level.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/users` | No | Register a new user |
//! | GET | `/users/{id}` | No | Fetch a user without its password |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgUserRepository, UserRepository};
pub use services::UserService;
