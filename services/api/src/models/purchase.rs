//! Purchase record model and related payloads

use serde::{Deserialize, Serialize};

/// Immutable record of a purchase intent
///
/// The book ids and the reader id are stored as opaque values; no
/// referential check is made against the books or readers tables.
#[derive(Debug, Clone, Serialize)]
pub struct BuyRequest {
    pub id: i64,
    pub book_id_list: Vec<i64>,
    pub reader_id: String,
}

/// Purchase creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewBuyRequest {
    pub book_id_list: Vec<i64>,
    pub reader_id: String,
}
