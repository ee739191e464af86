//! Repository for users.

use tourify_core::error::CoreError;
use tourify_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::DbPool;

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. Fails with [`CoreError::Conflict`] when the
    /// username is taken.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<User, CoreError> {
        let mut tables = pool.write().await;
        if tables.users.values().any(|u| u.username == input.username) {
            return Err(CoreError::Conflict(format!(
                "Username '{}' is already taken",
                input.username
            )));
        }
        let id = tables.allocate_user_id();
        let user = User {
            id,
            username: input.username.clone(),
            password: input.password.clone(),
        };
        tables.users.insert(id, user.clone());
        tracing::debug!(user_id = id, username = %user.username, "User created");
        Ok(user)
    }

    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Option<User> {
        pool.read().await.users.get(&id).cloned()
    }

    pub async fn find_by_username(pool: &DbPool, username: &str) -> Option<User> {
        pool.read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }
}
