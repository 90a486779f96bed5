//! Borrow lifecycle service: create, edit, return.

use uuid::Uuid;

use crate::{
    config::FeatureConfig,
    error::{AppError, AppResult},
    ledger,
    models::borrow::{BorrowRecord, CreateBorrow, UpdateBorrow},
    repository::Repository,
};

use super::today;

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
    features: FeatureConfig,
}

impl BorrowsService {
    pub fn new(repository: Repository, features: FeatureConfig) -> Self {
        Self { repository, features }
    }

    /// Full ledger, newest first
    pub async fn list(&self) -> AppResult<Vec<BorrowRecord>> {
        self.repository.borrows.list().await
    }

    /// Create a borrow: Available -> OnLoan.
    ///
    /// The duplicate-borrow guard runs twice: an advisory check against a
    /// fresh ledger snapshot here, and the partial unique index at insert
    /// time, which also catches a race with another session.
    pub async fn create(&self, data: CreateBorrow) -> AppResult<BorrowRecord> {
        let asset_id = data
            .asset_id
            .ok_or_else(|| AppError::Validation("asset_id is required".to_string()))?;

        if data.borrower_dept.trim().is_empty() {
            return Err(AppError::Validation(
                "borrower department is required".to_string(),
            ));
        }
        if self.features.branch_tracking
            && data.borrower_branch.as_deref().map_or(true, |b| b.trim().is_empty())
        {
            return Err(AppError::Validation(
                "borrower branch is required".to_string(),
            ));
        }

        // the asset must exist to be lent out
        self.repository.assets.get_by_id(asset_id).await?;

        let start_date = data.start_date.unwrap_or_else(today);
        if !ledger::dates_ordered(start_date, data.end_date) {
            return Err(AppError::Validation(
                "return date must not precede loan date".to_string(),
            ));
        }

        let snapshot = self.repository.borrows.list().await?;
        let active = ledger::active_loan_asset_ids(&snapshot);
        if !ledger::can_borrow(Some(asset_id), &active) {
            return Err(AppError::Conflict("Asset is already on loan".to_string()));
        }

        match self.repository.borrows.create(asset_id, &data, start_date).await {
            Err(e) if e.is_unique_violation() => {
                Err(AppError::Conflict("Asset is already on loan".to_string()))
            }
            other => other,
        }
    }

    /// Edit a borrow record. Supplying an end date on an open loan marks
    /// it returned; a returned record never re-opens.
    pub async fn update(&self, id: Uuid, data: UpdateBorrow) -> AppResult<BorrowRecord> {
        let existing = self.repository.borrows.get_by_id(id).await?;

        let start_date = data.start_date.unwrap_or(existing.start_date);
        let end_date = data.end_date.or(existing.end_date);
        if !ledger::dates_ordered(start_date, end_date) {
            return Err(AppError::Validation(
                "return date must not precede loan date".to_string(),
            ));
        }

        let mark_returned = data.end_date.is_some() && !existing.returned;
        self.repository.borrows.update(id, &data, mark_returned).await
    }

    /// OnLoan -> Returned with today's date as the return date
    pub async fn mark_returned(&self, id: Uuid) -> AppResult<BorrowRecord> {
        let existing = self.repository.borrows.get_by_id(id).await?;
        if existing.returned {
            return Err(AppError::BusinessRule("Loan already returned".to_string()));
        }
        self.repository.borrows.mark_returned(id, today()).await
    }
}
