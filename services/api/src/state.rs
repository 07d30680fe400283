//! Application state shared across handlers

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::images::ImageStore;
use crate::repositories::{
    AuthorRepository, BookRepository, BuyRequestRepository, DemandRepository, ReaderRepository,
    UserRepository,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub user_repository: UserRepository,
    pub reader_repository: ReaderRepository,
    pub author_repository: AuthorRepository,
    pub book_repository: BookRepository,
    pub demand_repository: DemandRepository,
    pub buy_request_repository: BuyRequestRepository,
    pub image_store: ImageStore,
    pub admin_email: String,
    pub admin_password: String,
}

impl AppState {
    /// Build the state from a pool, an image store and the app config
    pub fn new(pool: SqlitePool, image_store: ImageStore, config: &AppConfig) -> Self {
        Self {
            user_repository: UserRepository::new(pool.clone()),
            reader_repository: ReaderRepository::new(pool.clone()),
            author_repository: AuthorRepository::new(pool.clone()),
            book_repository: BookRepository::new(pool.clone()),
            demand_repository: DemandRepository::new(pool.clone()),
            buy_request_repository: BuyRequestRepository::new(pool.clone()),
            db_pool: pool,
            image_store,
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
        }
    }
}
