//! Borrow (loan) model and request types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One instance of an asset being checked out to a borrower
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowRecord {
    pub id: Uuid,
    /// The borrowed asset. Not a foreign key: deleting an asset keeps its
    /// borrow history, and reports render missing asset fields as empty.
    pub asset_id: Uuid,
    pub borrower_name: String,
    pub borrower_dept: String,
    pub borrower_branch: Option<String>,
    pub lender_name: Option<String>,
    /// Accessories loaned along with the asset; opaque free text
    pub peripherals: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub returned: bool,
    /// Signature image as a data URL; stored and echoed, never interpreted
    pub borrower_signature: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BorrowRecord {
    /// Whether the loan is still outstanding
    pub fn is_open(&self) -> bool {
        !self.returned
    }
}

/// Create borrow request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBorrow {
    pub asset_id: Option<Uuid>,
    #[validate(length(min = 1, message = "borrower name is required"))]
    pub borrower_name: String,
    #[validate(length(min = 1, message = "borrower department is required"))]
    pub borrower_dept: String,
    pub borrower_branch: Option<String>,
    pub lender_name: Option<String>,
    pub peripherals: Option<String>,
    /// Defaults to today when absent
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub borrower_signature: Option<String>,
}

/// Update borrow request; absent fields are left unchanged.
/// Supplying an end date on an open loan also marks it returned.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBorrow {
    pub borrower_name: Option<String>,
    pub borrower_dept: Option<String>,
    pub borrower_branch: Option<String>,
    pub lender_name: Option<String>,
    pub peripherals: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
