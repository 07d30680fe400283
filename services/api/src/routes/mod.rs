//! API service routes

pub mod catalog;
pub mod demand;
pub mod identity;
pub mod purchase;

use axum::{
    Json, Router,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::state::AppState;

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    // All origins, methods and headers are permitted
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health_check))
        .route("/signup", post(identity::signup))
        .route("/login", post(identity::login))
        .route("/reader-signup", post(identity::reader_signup))
        .route("/reader-signin", post(identity::reader_signin))
        .route("/author-signup", post(identity::author_signup))
        .route("/author-signin", post(identity::author_signin))
        .route("/readers", get(identity::get_readers))
        .route("/authors", get(identity::get_authors))
        .route("/api/get-reader/:id", get(identity::get_reader))
        .route("/api/books", get(catalog::get_books))
        .route("/api/add-book", post(catalog::add_book))
        .route("/api/delete-book", post(catalog::delete_book))
        .route("/api/demands", get(demand::get_demands))
        .route("/api/add-demand", post(demand::add_demand))
        .route("/api/approve-book-add", post(demand::approve_book_add))
        .route("/api/reject-book-add", post(demand::reject_book_add))
        .route("/api/buy-book", post(purchase::buy_book))
        .route("/api/sells", get(purchase::get_sells))
        .nest_service("/images", ServeDir::new(state.image_store.root()))
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
pub async fn read_root() -> impl IntoResponse {
    Json(json!({
        "Hello": "World"
    }))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "api"
    }))
}
