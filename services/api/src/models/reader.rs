//! Reader model and related payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Reader entity, the buyer-side identity
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Reader {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Reader signup payload
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderSignup {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Reader signin payload
#[derive(Debug, Clone, Deserialize)]
pub struct ReaderSignin {
    pub email: String,
    pub password: String,
}
