//! Purchase routes: recording and listing purchase requests

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::{error::ApiError, models::NewBuyRequest, state::AppState};

/// Record a purchase request
///
/// Neither the book ids nor the reader id are checked for existence.
pub async fn buy_book(
    State(state): State<AppState>,
    Json(payload): Json<NewBuyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .buy_request_repository
        .create(&payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to record purchase: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(json!({"status": "success"})))
}

/// Get all purchase requests
pub async fn get_sells(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let requests = state.buy_request_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get purchases: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(requests))
}
