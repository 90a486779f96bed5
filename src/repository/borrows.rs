//! Borrows repository for database operations

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BorrowRecord, CreateBorrow, UpdateBorrow},
};

#[derive(Clone)]
pub struct BorrowsRepository {
    pool: Pool<Postgres>,
}

impl BorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Full ledger snapshot, newest loans first
    pub async fn list(&self) -> AppResult<Vec<BorrowRecord>> {
        let rows = sqlx::query_as::<_, BorrowRecord>(
            "SELECT * FROM borrows ORDER BY start_date DESC, created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get borrow record by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BorrowRecord> {
        sqlx::query_as::<_, BorrowRecord>("SELECT * FROM borrows WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrow record {} not found", id)))
    }

    /// Insert a new borrow record. The partial unique index on open
    /// borrows rejects a concurrent duplicate; callers translate that
    /// unique violation into a conflict.
    pub async fn create(
        &self,
        asset_id: Uuid,
        data: &CreateBorrow,
        start_date: NaiveDate,
    ) -> AppResult<BorrowRecord> {
        let row = sqlx::query_as::<_, BorrowRecord>(
            r#"
            INSERT INTO borrows (asset_id, borrower_name, borrower_dept, borrower_branch,
                                 lender_name, peripherals, start_date, end_date,
                                 returned, borrower_signature)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, FALSE, $9)
            RETURNING *
            "#,
        )
        .bind(asset_id)
        .bind(&data.borrower_name)
        .bind(&data.borrower_dept)
        .bind(&data.borrower_branch)
        .bind(&data.lender_name)
        .bind(&data.peripherals)
        .bind(start_date)
        .bind(data.end_date)
        .bind(&data.borrower_signature)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a borrow record; only the provided fields change. When
    /// `mark_returned` is set the record also flips to returned.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateBorrow,
        mark_returned: bool,
    ) -> AppResult<BorrowRecord> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        if mark_returned {
            sets.push("returned = TRUE".to_string());
        }
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.borrower_name, "borrower_name");
        add_field!(data.borrower_dept, "borrower_dept");
        add_field!(data.borrower_branch, "borrower_branch");
        add_field!(data.lender_name, "lender_name");
        add_field!(data.peripherals, "peripherals");
        add_field!(data.start_date, "start_date");
        add_field!(data.end_date, "end_date");

        let query = format!(
            "UPDATE borrows SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, BorrowRecord>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.borrower_name);
        bind_field!(data.borrower_dept);
        bind_field!(data.borrower_branch);
        bind_field!(data.lender_name);
        bind_field!(data.peripherals);
        bind_field!(data.start_date);
        bind_field!(data.end_date);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrow record {} not found", id)))
    }

    /// Close a loan: set returned and stamp the return date
    pub async fn mark_returned(&self, id: Uuid, end_date: NaiveDate) -> AppResult<BorrowRecord> {
        sqlx::query_as::<_, BorrowRecord>(
            r#"
            UPDATE borrows
            SET returned = TRUE, end_date = $1, updated_at = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(end_date)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Borrow record {} not found", id)))
    }
}
