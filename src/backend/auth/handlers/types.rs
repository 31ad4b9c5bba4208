/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the login, register and current
 * handlers.
 *
 * Request fields default to an empty string when absent so that a missing
 * field reaches the flow's own validation instead of failing extraction.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct RegisterRequest {
    /// User's email address
    pub email: String,
    /// User's password (hashed before storage)
    pub password: String,
    /// Display name
    pub name: String,
}

/// Public identity of a user (without sensitive data)
///
/// This is what the auth middleware attaches to a request and what
/// `GET /api/user/current` returns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Auth response
///
/// Returned by login and register, serialized flat as
/// `{"id", "email", "name", "token"}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    /// JWT token (30-day expiration)
    pub token: String,
}
