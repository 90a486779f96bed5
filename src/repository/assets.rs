//! Assets repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::asset::{Asset, CreateAsset, UpdateAsset},
};

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all assets, ordered the way the registration screen shows them
    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        let rows = sqlx::query_as::<_, Asset>(
            "SELECT * FROM assets ORDER BY tag NULLS LAST, name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get asset by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Create a new asset
    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        let row = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (tag, code, name, brand, model, vendor, serial,
                                department, branch, location, purchase_date, price)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&data.tag)
        .bind(&data.code)
        .bind(&data.name)
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.vendor)
        .bind(&data.serial)
        .bind(&data.department)
        .bind(&data.branch)
        .bind(&data.location)
        .bind(data.purchase_date)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an asset; only the provided fields change
    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.tag, "tag");
        add_field!(data.code, "code");
        add_field!(data.name, "name");
        add_field!(data.brand, "brand");
        add_field!(data.model, "model");
        add_field!(data.vendor, "vendor");
        add_field!(data.serial, "serial");
        add_field!(data.department, "department");
        add_field!(data.branch, "branch");
        add_field!(data.location, "location");
        add_field!(data.purchase_date, "purchase_date");
        add_field!(data.price, "price");

        let query = format!(
            "UPDATE assets SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Asset>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.tag);
        bind_field!(data.code);
        bind_field!(data.name);
        bind_field!(data.brand);
        bind_field!(data.model);
        bind_field!(data.vendor);
        bind_field!(data.serial);
        bind_field!(data.department);
        bind_field!(data.branch);
        bind_field!(data.location);
        bind_field!(data.purchase_date);
        bind_field!(data.price);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Delete an asset. Borrow history referencing it is kept.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset {} not found", id)));
        }
        Ok(())
    }

    /// Count all assets (dashboard tile)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
