//! Option catalog repository for database operations.
//!
//! The six catalogs share one shape, so a single repository serves them
//! all, parameterized by kind.

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::catalog::{CatalogEntry, CatalogKind},
};

#[derive(Clone)]
pub struct CatalogsRepository {
    pool: Pool<Postgres>,
}

impl CatalogsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List entries of one catalog, alphabetically
    pub async fn list(&self, kind: CatalogKind) -> AppResult<Vec<CatalogEntry>> {
        let query = format!("SELECT * FROM {} ORDER BY name", kind.table());
        let rows = sqlx::query_as::<_, CatalogEntry>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Add a named entry to a catalog
    pub async fn create(&self, kind: CatalogKind, name: &str) -> AppResult<CatalogEntry> {
        let query = format!("INSERT INTO {} (name) VALUES ($1) RETURNING *", kind.table());
        let row = sqlx::query_as::<_, CatalogEntry>(&query)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Delete a catalog entry. Assets and borrows reference catalog
    /// values by name, so existing rows keep the old text.
    pub async fn delete(&self, kind: CatalogKind, id: Uuid) -> AppResult<()> {
        let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Entry {} not found in {}",
                id, kind
            )));
        }
        Ok(())
    }
}
