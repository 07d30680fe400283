//! Identity repositories for users, readers and authors
//!
//! All three kinds store an argon2 password hash; the uniqueness key is
//! the username for generic users and the email for readers and authors.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::auth;
use crate::models::{Author, AuthorSignup, Reader, ReaderSignup, SignupForm, User};

/// Repository for generic users
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user, hashing the password before insert
    pub async fn create(&self, form: &SignupForm) -> Result<User> {
        info!("Creating new user: {}", form.username);

        let password_hash = auth::hash_password(&form.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, role
            "#,
        )
        .bind(&form.username)
        .bind(&form.email)
        .bind(&password_hash)
        .bind(&form.role)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find a user by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// Repository for readers
#[derive(Clone)]
pub struct ReaderRepository {
    pool: SqlitePool,
}

impl ReaderRepository {
    /// Create a new reader repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new reader with a fresh UUID, hashing the password
    pub async fn create(&self, signup: &ReaderSignup) -> Result<Reader> {
        info!("Creating new reader: {}", signup.email);

        let id = Uuid::new_v4().to_string();
        let password_hash = auth::hash_password(&signup.password)?;

        let reader = sqlx::query_as::<_, Reader>(
            r#"
            INSERT INTO readers (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash
            "#,
        )
        .bind(&id)
        .bind(&signup.name)
        .bind(&signup.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(reader)
    }

    /// Find a reader by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Reader>> {
        let reader = sqlx::query_as::<_, Reader>(
            r#"
            SELECT id, name, email, password_hash
            FROM readers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reader)
    }

    /// Find a reader by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Reader>> {
        let reader = sqlx::query_as::<_, Reader>(
            r#"
            SELECT id, name, email, password_hash
            FROM readers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(reader)
    }

    /// Get all readers
    pub async fn get_all(&self) -> Result<Vec<Reader>> {
        let readers = sqlx::query_as::<_, Reader>(
            r#"
            SELECT id, name, email, password_hash
            FROM readers
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(readers)
    }
}

/// Repository for authors
#[derive(Clone)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    /// Create a new author repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new author with a fresh UUID, hashing the password
    pub async fn create(&self, signup: &AuthorSignup) -> Result<Author> {
        info!("Creating new author: {}", signup.email);

        let id = Uuid::new_v4().to_string();
        let password_hash = auth::hash_password(&signup.password)?;

        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash
            "#,
        )
        .bind(&id)
        .bind(&signup.name)
        .bind(&signup.email)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(author)
    }

    /// Find an author by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, email, password_hash
            FROM authors
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Get all authors
    pub async fn get_all(&self) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, email, password_hash
            FROM authors
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_pool;

    fn signup(email: &str) -> ReaderSignup {
        ReaderSignup {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "s3cret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_reader_signup_then_lookup_round_trip() {
        let pool = test_pool().await;
        let repo = ReaderRepository::new(pool);

        let created = repo.create(&signup("ada@example.com")).await.unwrap();

        let found = repo
            .find_by_email("ada@example.com")
            .await
            .unwrap()
            .expect("reader exists");
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Ada");
        assert!(auth::verify_password("s3cret", &found.password_hash).unwrap());

        let by_id = repo.find_by_id(&created.id).await.unwrap();
        assert_eq!(by_id.unwrap().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_reader_duplicate_email_is_rejected_by_unique_index() {
        let pool = test_pool().await;
        let repo = ReaderRepository::new(pool);

        repo.create(&signup("dup@example.com")).await.unwrap();
        assert!(repo.create(&signup("dup@example.com")).await.is_err());
    }

    #[tokio::test]
    async fn test_user_create_stores_hash_not_cleartext() {
        let pool = test_pool().await;
        let repo = UserRepository::new(pool);

        let form = SignupForm {
            username: "admin2".to_string(),
            email: "admin2@example.com".to_string(),
            password: "pw".to_string(),
            role: "moderator".to_string(),
        };
        let user = repo.create(&form).await.unwrap();
        assert_ne!(user.password_hash, "pw");
        assert_eq!(user.role, "moderator");

        let found = repo.find_by_username("admin2").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_author_get_all() {
        let pool = test_pool().await;
        let repo = AuthorRepository::new(pool);

        assert!(repo.get_all().await.unwrap().is_empty());

        repo.create(&AuthorSignup {
            name: "Bram".to_string(),
            email: "bram@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();

        let authors = repo.get_all().await.unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].name, "Bram");
    }
}
