//! Borrow ledger endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::borrow::{BorrowRecord, CreateBorrow, UpdateBorrow},
};

use super::AuthenticatedUser;

/// List all borrow records, newest first
#[utoipa::path(
    get,
    path = "/borrows",
    tag = "borrows",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Borrow ledger", body = Vec<BorrowRecord>)
    )
)]
pub async fn list_borrows(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<BorrowRecord>>> {
    let records = state.services.borrows.list().await?;
    Ok(Json(records))
}

/// Record a new borrow (check an asset out)
#[utoipa::path(
    post,
    path = "/borrows",
    tag = "borrows",
    security(("bearer_auth" = [])),
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Borrow recorded", body = BorrowRecord),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Asset not found"),
        (status = 409, description = "Asset is already on loan")
    )
)]
pub async fn create_borrow(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<CreateBorrow>,
) -> AppResult<(StatusCode, Json<BorrowRecord>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let record = state.services.borrows.create(data).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Edit a borrow record
#[utoipa::path(
    put,
    path = "/borrows/{id}",
    tag = "borrows",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Borrow record ID")),
    request_body = UpdateBorrow,
    responses(
        (status = 200, description = "Borrow record updated", body = BorrowRecord),
        (status = 400, description = "Invalid date order"),
        (status = 404, description = "Borrow record not found")
    )
)]
pub async fn update_borrow(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(data): Json<UpdateBorrow>,
) -> AppResult<Json<BorrowRecord>> {
    let record = state.services.borrows.update(id, data).await?;
    Ok(Json(record))
}

/// Mark a borrow returned (check the asset back in)
#[utoipa::path(
    post,
    path = "/borrows/{id}/return",
    tag = "borrows",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Borrow record ID")),
    responses(
        (status = 200, description = "Asset returned", body = BorrowRecord),
        (status = 404, description = "Borrow record not found"),
        (status = 422, description = "Already returned")
    )
)]
pub async fn return_borrow(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BorrowRecord>> {
    let record = state.services.borrows.mark_returned(id).await?;
    Ok(Json(record))
}
