//! Integration tests for the shared database layer
//!
//! These tests verify pool construction and health checking against both
//! an in-memory database and a file-backed one.

use common::database::{DatabaseConfig, health_check, init_pool, init_pool_in_memory};
use sqlx::Row;

#[tokio::test]
async fn test_in_memory_pool_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let pool = init_pool_in_memory().await?;

    assert!(health_check(&pool).await?, "Database health check failed");

    let row = sqlx::query("SELECT 1 as result").fetch_one(&pool).await?;
    let result: i32 = row.get("result");
    assert_eq!(result, 1, "Simple query test failed");

    Ok(())
}

#[tokio::test]
async fn test_file_backed_pool_creates_database() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test.db");

    let config = DatabaseConfig {
        database_url: format!("sqlite:{}", path.display()),
        max_connections: 2,
    };

    let pool = init_pool(&config).await?;
    assert!(health_check(&pool).await?, "Database health check failed");
    assert!(path.exists(), "Database file was not created");

    Ok(())
}
