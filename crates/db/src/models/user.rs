//! User entity model and DTOs. Not exposed by any route.

use serde::{Deserialize, Serialize};
use tourify_core::types::DbId;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// DTO for creating a user. Usernames are unique.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 64), custom(function = "crate::models::not_blank"))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}
