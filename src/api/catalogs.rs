//! Option catalog endpoints.
//!
//! One parameterized endpoint family serves all six catalogs instead of
//! six near-identical ones.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::catalog::{CatalogEntry, CatalogKind, CreateCatalogEntry},
};

use super::AuthenticatedUser;

/// List the entries of one catalog
#[utoipa::path(
    get,
    path = "/catalogs/{kind}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("kind" = CatalogKind, Path, description = "Catalog kind")),
    responses(
        (status = 200, description = "Catalog entries", body = Vec<CatalogEntry>)
    )
)]
pub async fn list_catalog(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(kind): Path<CatalogKind>,
) -> AppResult<Json<Vec<CatalogEntry>>> {
    let entries = state.services.catalogs.list(kind).await?;
    Ok(Json(entries))
}

/// Add an entry to a catalog
#[utoipa::path(
    post,
    path = "/catalogs/{kind}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(("kind" = CatalogKind, Path, description = "Catalog kind")),
    request_body = CreateCatalogEntry,
    responses(
        (status = 201, description = "Entry added", body = CatalogEntry),
        (status = 409, description = "Name already exists")
    )
)]
pub async fn create_catalog_entry(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(kind): Path<CatalogKind>,
    Json(data): Json<CreateCatalogEntry>,
) -> AppResult<(StatusCode, Json<CatalogEntry>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let entry = state.services.catalogs.create(kind, &data.name).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Delete a catalog entry
#[utoipa::path(
    delete,
    path = "/catalogs/{kind}/{id}",
    tag = "catalogs",
    security(("bearer_auth" = [])),
    params(
        ("kind" = CatalogKind, Path, description = "Catalog kind"),
        ("id" = Uuid, Path, description = "Entry ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_catalog_entry(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path((kind, id)): Path<(CatalogKind, Uuid)>,
) -> AppResult<StatusCode> {
    state.services.catalogs.delete(kind, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
