//! Asset (equipment) model and request types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A trackable piece of equipment in the pool
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Asset {
    pub id: Uuid,
    /// Inventory tag (human asset number; not guaranteed unique)
    pub tag: Option<String>,
    /// Internal device code
    pub code: Option<String>,
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub vendor: Option<String>,
    pub serial: Option<String>,
    /// Home department, referenced by catalog name
    pub department: Option<String>,
    pub branch: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create asset request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAsset {
    pub tag: Option<String>,
    pub code: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub vendor: Option<String>,
    pub serial: Option<String>,
    pub department: Option<String>,
    pub branch: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}

/// Update asset request; absent fields are left unchanged
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAsset {
    pub tag: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub vendor: Option<String>,
    pub serial: Option<String>,
    pub department: Option<String>,
    pub branch: Option<String>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
}
