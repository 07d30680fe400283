//! Author model and related payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Author entity, the seller-side identity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Author signup payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Author signin payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorSignin {
    pub email: String,
    pub password: String,
}
