//! Book catalog repository

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{Book, NewBook};

/// Repository for catalog books
#[derive(Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Create a new book repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new book
    pub async fn create(&self, new_book: &NewBook) -> Result<Book> {
        info!("Creating new book: {}", new_book.title);

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, price, description, picture_filename)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, price, description, picture_filename
            "#,
        )
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(new_book.price)
        .bind(&new_book.description)
        .bind(&new_book.picture_filename)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    /// Get all books
    pub async fn get_all(&self) -> Result<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, price, description, picture_filename
            FROM books
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Delete a book by id
    ///
    /// Returns false when no such book exists. The associated image file
    /// is not removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    fn new_book(title: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: "A. Writer".to_string(),
            price: 12.5,
            description: "About things".to_string(),
            picture_filename: Some("cover.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = test_pool().await;
        let repo = BookRepository::new(pool);

        let created = repo.create(&new_book("Dune")).await.unwrap();
        assert_eq!(created.title, "Dune");
        assert_eq!(created.picture_filename.as_deref(), Some("cover.png"));

        let books = repo.get_all().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, created.id);
    }

    #[tokio::test]
    async fn test_delete_missing_book_is_a_no_op() {
        let pool = test_pool().await;
        let repo = BookRepository::new(pool);

        repo.create(&new_book("Kept")).await.unwrap();

        assert!(!repo.delete(999).await.unwrap());
        assert_eq!(repo.get_all().await.unwrap().len(), 1);

        // Repeating the miss changes nothing
        assert!(!repo.delete(999).await.unwrap());
        assert_eq!(repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_existing_book() {
        let pool = test_pool().await;
        let repo = BookRepository::new(pool);

        let created = repo.create(&new_book("Gone")).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_price_is_accepted() {
        let pool = test_pool().await;
        let repo = BookRepository::new(pool);

        let mut book = new_book("Oddity");
        book.price = -3.0;
        let created = repo.create(&book).await.unwrap();
        assert_eq!(created.price, -3.0);
    }
}
