//! Catalog routes: book listing, multipart upload and deletion

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartError},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{error::ApiError, models::NewBook, state::AppState};

/// Request to delete a book
#[derive(Deserialize)]
pub struct DeleteBookRequest {
    pub id: i64,
}

/// Get all books
pub async fn get_books(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let books = state.book_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get books: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(books))
}

fn bad_multipart(e: MultipartError) -> ApiError {
    ApiError::BadRequest(format!("Invalid multipart form: {}", e))
}

fn missing_field(name: &str) -> ApiError {
    ApiError::BadRequest(format!("Missing field: {}", name))
}

/// Add a book from a multipart form with an uploaded cover image
///
/// The image is written before the row insert; if the insert fails, the
/// file is removed best-effort so no orphan survives the request.
pub async fn add_book(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut title = None;
    let mut author = None;
    let mut price = None;
    let mut description = None;
    let mut picture = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("title") => title = Some(field.text().await.map_err(bad_multipart)?),
            Some("author") => author = Some(field.text().await.map_err(bad_multipart)?),
            Some("price") => {
                let text = field.text().await.map_err(bad_multipart)?;
                let parsed = text
                    .parse::<f64>()
                    .map_err(|_| ApiError::BadRequest(format!("Invalid price: {}", text)))?;
                price = Some(parsed);
            }
            Some("description") => description = Some(field.text().await.map_err(bad_multipart)?),
            Some("picture") => {
                let filename = field
                    .file_name()
                    .map(|n| n.to_string())
                    .ok_or_else(|| missing_field("picture"))?;
                let bytes = field.bytes().await.map_err(bad_multipart)?;
                picture = Some((filename, bytes));
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| missing_field("title"))?;
    let author = author.ok_or_else(|| missing_field("author"))?;
    let price = price.ok_or_else(|| missing_field("price"))?;
    let description = description.ok_or_else(|| missing_field("description"))?;
    let (filename, bytes) = picture.ok_or_else(|| missing_field("picture"))?;

    let stored_name = state
        .image_store
        .save(&filename, &bytes)
        .await
        .map_err(|e| {
            tracing::error!("Failed to store cover image: {}", e);
            ApiError::InternalServerError
        })?;

    let new_book = NewBook {
        title,
        author,
        price,
        description,
        picture_filename: Some(stored_name.clone()),
    };

    match state.book_repository.create(&new_book).await {
        Ok(book) => Ok(Json(book)),
        Err(e) => {
            tracing::error!("Failed to create book: {}", e);
            state.image_store.remove(&stored_name).await;
            Err(ApiError::InternalServerError)
        }
    }
}

/// Delete a book by id
///
/// The associated image file is left in place.
pub async fn delete_book(
    State(state): State<AppState>,
    Json(payload): Json<DeleteBookRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state
        .book_repository
        .delete(payload.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete book: {}", e);
            ApiError::InternalServerError
        })?;

    if deleted {
        Ok(Json(json!({"status": "deleted"})))
    } else {
        Err(ApiError::NotFound("Book not found".to_string()))
    }
}
