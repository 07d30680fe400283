//! Generic user model and related payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Generic user entity with a free-text role label
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
}

/// Signup form payload
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Admin login payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
