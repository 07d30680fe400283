//! Purchase record repository
//!
//! The book id list is stored as JSON text; neither the book ids nor the
//! reader id are checked against their tables.

use anyhow::Result;
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::models::{BuyRequest, NewBuyRequest};

/// Repository for purchase records
#[derive(Clone)]
pub struct BuyRequestRepository {
    pool: SqlitePool,
}

impl BuyRequestRepository {
    /// Create a new purchase record repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new purchase record
    pub async fn create(&self, request: &NewBuyRequest) -> Result<BuyRequest> {
        info!("Recording purchase for reader: {}", request.reader_id);

        let book_id_list = serde_json::to_string(&request.book_id_list)?;

        let row = sqlx::query(
            r#"
            INSERT INTO buy_requests (book_id_list, reader_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&book_id_list)
        .bind(&request.reader_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(BuyRequest {
            id: row.get("id"),
            book_id_list: request.book_id_list.clone(),
            reader_id: request.reader_id.clone(),
        })
    }

    /// Get all purchase records
    pub async fn get_all(&self) -> Result<Vec<BuyRequest>> {
        let rows = sqlx::query(
            r#"
            SELECT id, book_id_list, reader_id
            FROM buy_requests
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut requests = Vec::with_capacity(rows.len());
        for row in rows {
            let book_id_list: String = row.get("book_id_list");
            requests.push(BuyRequest {
                id: row.get("id"),
                book_id_list: serde_json::from_str(&book_id_list)?,
                reader_id: row.get("reader_id"),
            });
        }

        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    #[tokio::test]
    async fn test_record_purchase_without_referential_checks() {
        let pool = test_pool().await;
        let repo = BuyRequestRepository::new(pool);

        // None of the referenced ids exist anywhere
        let created = repo
            .create(&NewBuyRequest {
                book_id_list: vec![1, 2, 3],
                reader_id: "r1".to_string(),
            })
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
        assert_eq!(all[0].book_id_list, vec![1, 2, 3]);
        assert_eq!(all[0].reader_id, "r1");
    }

    #[tokio::test]
    async fn test_empty_book_list_round_trips() {
        let pool = test_pool().await;
        let repo = BuyRequestRepository::new(pool);

        repo.create(&NewBuyRequest {
            book_id_list: vec![],
            reader_id: "r2".to_string(),
        })
        .await
        .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].book_id_list.is_empty());
    }
}
