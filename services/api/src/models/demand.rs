//! Demand model and related payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Demand entity, a proposed catalog entry awaiting approval or rejection
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Demand {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: f64,
    pub picture_url: String,
}

/// Demand creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewDemand {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: f64,
    pub picture_url: String,
}
