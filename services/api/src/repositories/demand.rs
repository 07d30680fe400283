//! Demand repository and the approve/reject workflow

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::{Demand, NewDemand};

/// Repository for demands
#[derive(Clone)]
pub struct DemandRepository {
    pool: SqlitePool,
}

impl DemandRepository {
    /// Create a new demand repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new demand
    pub async fn create(&self, new_demand: &NewDemand) -> Result<Demand> {
        info!("Creating new demand: {}", new_demand.title);

        let demand = sqlx::query_as::<_, Demand>(
            r#"
            INSERT INTO demands (title, author, description, price, picture_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author, description, price, picture_url
            "#,
        )
        .bind(&new_demand.title)
        .bind(&new_demand.author)
        .bind(&new_demand.description)
        .bind(new_demand.price)
        .bind(&new_demand.picture_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(demand)
    }

    /// Get all demands
    pub async fn get_all(&self) -> Result<Vec<Demand>> {
        let demands = sqlx::query_as::<_, Demand>(
            r#"
            SELECT id, title, author, description, price, picture_url
            FROM demands
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(demands)
    }

    /// Approve a demand, converting it into a catalog book
    ///
    /// The new book carries only the demand's title and author; the
    /// description is empty, the price is 0.0 and no picture is recorded.
    /// Insert and delete happen in one transaction. Returns false when no
    /// such demand exists.
    pub async fn approve(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let demand = sqlx::query_as::<_, Demand>(
            r#"
            SELECT id, title, author, description, price, picture_url
            FROM demands
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(demand) = demand else {
            return Ok(false);
        };

        sqlx::query(
            r#"
            INSERT INTO books (title, author, price, description, picture_filename)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&demand.title)
        .bind(&demand.author)
        .bind(0.0_f64)
        .bind("")
        .bind(Option::<String>::None)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM demands WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(id = id, "Demand approved");
        Ok(true)
    }

    /// Reject a demand, deleting it
    ///
    /// Returns false when no such demand exists.
    pub async fn reject(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM demands WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let rejected = result.rows_affected() > 0;
        if rejected {
            info!(id = id, "Demand rejected");
        }

        Ok(rejected)
    }
}
