//! Viewer profile entity model and DTOs.

use kinoteka_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full viewer row from the `user_profiles` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct UserProfile {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub age: Option<i32>,
    /// Viewer tier as stored: `"simple"` or `"pro"`.
    pub status: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe viewer representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub age: Option<i32>,
    pub status: String,
    pub created_at: Timestamp,
}

impl From<UserProfile> for UserResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            age: user.age,
            status: user.status,
            created_at: user.created_at,
        }
    }
}

/// DTO for inserting a new viewer (password already hashed by the caller).
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub age: Option<i32>,
    pub status: String,
}

/// DTO for updating a viewer profile. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub age: Option<i32>,
    pub status: Option<kinoteka_core::tier::Tier>,
}
