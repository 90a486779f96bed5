//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assets, auth, borrows, catalogs, health, reports, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipool API",
        version = "0.1.0",
        description = "Hospital Equipment Lending Tracker REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Assets
        assets::list_assets,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        // Borrows
        borrows::list_borrows,
        borrows::create_borrow,
        borrows::update_borrow,
        borrows::return_borrow,
        // Catalogs
        catalogs::list_catalog,
        catalogs::create_catalog_entry,
        catalogs::delete_catalog_entry,
        // Reports
        reports::get_report,
        reports::export_report,
        reports::get_trend,
        reports::top_departments,
        reports::department_drilldown,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::CreateAsset,
            crate::models::asset::UpdateAsset,
            // Borrows
            crate::models::borrow::BorrowRecord,
            crate::models::borrow::CreateBorrow,
            crate::models::borrow::UpdateBorrow,
            // Catalogs
            crate::models::catalog::CatalogEntry,
            crate::models::catalog::CreateCatalogEntry,
            crate::models::catalog::CatalogKind,
            // Reports
            crate::ledger::ReportRow,
            crate::ledger::TrendPoint,
            crate::ledger::TrendSeries,
            crate::ledger::DepartmentCount,
            crate::ledger::DepartmentLoan,
            // Stats
            crate::services::reports::Dashboard,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "assets", description = "Asset registry"),
        (name = "borrows", description = "Borrow ledger"),
        (name = "catalogs", description = "Option catalogs"),
        (name = "reports", description = "Reporting and export"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
