//! Book model

use serde::Serialize;
use sqlx::FromRow;

/// Book entity
///
/// The author field is a free-text name, not a reference to an Author
/// record. `picture_filename` is absent for books created by demand
/// approval.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub price: f64,
    pub description: String,
    pub picture_filename: Option<String>,
}

/// Book creation payload
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub description: String,
    pub picture_filename: Option<String>,
}
