//! Repositories for database operations

pub mod catalog;
pub mod demand;
pub mod identity;
pub mod purchase;

// Re-export for convenience
pub use catalog::BookRepository;
pub use demand::DemandRepository;
pub use identity::{AuthorRepository, ReaderRepository, UserRepository};
pub use purchase::BuyRequestRepository;

use common::error::{DatabaseError, DatabaseResult};
use sqlx::SqlitePool;
use tracing::info;

/// Table definitions, applied in order at startup
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        role TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS readers (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS authors (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        price REAL NOT NULL,
        description TEXT NOT NULL,
        picture_filename TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS demands (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        description TEXT NOT NULL,
        price REAL NOT NULL,
        picture_url TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS buy_requests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        book_id_list TEXT NOT NULL,
        reader_id TEXT NOT NULL
    )
    "#,
];

/// Create every table if it does not exist
pub async fn create_schema(pool: &SqlitePool) -> DatabaseResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(DatabaseError::Schema)?;
    }

    info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = common::database::init_pool_in_memory()
        .await
        .expect("in-memory pool");
    create_schema(&pool).await.expect("schema");
    pool
}
