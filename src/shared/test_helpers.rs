use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::users::models::{NewUser, User};
use crate::features::users::{routes, UserRepository, UserService};

/// In-memory user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn get(&self, id: Uuid) -> Option<User> {
        self.users.lock().unwrap().get(&id).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.users.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, user: NewUser) -> Result<User> {
        let now = Utc::now();
        let stored = User {
            id: Uuid::now_v7(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password: user.password,
            permission_level: user.permission_level,
            created_at: now,
            updated_at: now,
        };

        self.users
            .lock()
            .unwrap()
            .insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.get(id))
    }
}

/// Store that rejects every call
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn create_user(&self, _user: NewUser) -> Result<User> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_user_by_id(&self, _id: Uuid) -> Result<Option<User>> {
        Err(AppError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Users router over the given store, wrapped in a test server
pub fn test_server(repository: Arc<dyn UserRepository>) -> TestServer {
    let service = Arc::new(UserService::new(repository));
    TestServer::new(routes::routes(service)).unwrap()
}
