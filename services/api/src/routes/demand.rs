//! Demand routes: creation, listing and the approve/reject workflow

use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{error::ApiError, models::NewDemand, state::AppState};

/// Query selecting a demand by id
#[derive(Deserialize)]
pub struct DemandQuery {
    pub id: i64,
}

/// Get all demands
pub async fn get_demands(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let demands = state.demand_repository.get_all().await.map_err(|e| {
        tracing::error!("Failed to get demands: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(demands))
}

/// Create a new demand
pub async fn add_demand(
    State(state): State<AppState>,
    Json(payload): Json<NewDemand>,
) -> Result<impl IntoResponse, ApiError> {
    let demand = state.demand_repository.create(&payload).await.map_err(|e| {
        tracing::error!("Failed to create demand: {}", e);
        ApiError::InternalServerError
    })?;

    Ok(Json(demand))
}

/// Approve a demand, converting it into a catalog book
pub async fn approve_book_add(
    State(state): State<AppState>,
    Query(query): Query<DemandQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let approved = state
        .demand_repository
        .approve(query.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to approve demand: {}", e);
            ApiError::InternalServerError
        })?;

    if approved {
        Ok(Json(json!({"status": "approved"})))
    } else {
        Err(ApiError::NotFound("Demand not found".to_string()))
    }
}

/// Reject a demand, deleting it
pub async fn reject_book_add(
    State(state): State<AppState>,
    Query(query): Query<DemandQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let rejected = state
        .demand_repository
        .reject(query.id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to reject demand: {}", e);
            ApiError::InternalServerError
        })?;

    if rejected {
        Ok(Json(json!({"status": "rejected"})))
    } else {
        Err(ApiError::NotFound("Demand not found".to_string()))
    }
}
