//! Reporting endpoints

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::AppResult,
    ledger::{DepartmentCount, DepartmentLoan, ReportFilter, ReportRow, TrendFilter, TrendSeries},
};

use super::AuthenticatedUser;

/// Filtered report rows
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportFilter),
    responses(
        (status = 200, description = "Report rows", body = Vec<ReportRow>)
    )
)]
pub async fn get_report(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<ReportFilter>,
) -> AppResult<Json<Vec<ReportRow>>> {
    let rows = state.services.reports.report(filter).await?;
    Ok(Json(rows))
}

/// Export the filtered report as a spreadsheet (CSV). Columns match the
/// report table; the signature payload is excluded.
#[utoipa::path(
    get,
    path = "/reports/export",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(ReportFilter),
    responses(
        (status = 200, description = "CSV attachment", body = String, content_type = "text/csv")
    )
)]
pub async fn export_report(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<ReportFilter>,
) -> AppResult<Response> {
    let bytes = state.services.reports.export_csv(filter).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"report.csv\"",
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Daily borrow counts for the trend chart
#[utoipa::path(
    get,
    path = "/reports/trend",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(TrendFilter),
    responses(
        (status = 200, description = "Borrow trend", body = TrendSeries)
    )
)]
pub async fn get_trend(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<TrendFilter>,
) -> AppResult<Json<TrendSeries>> {
    let series = state.services.reports.trend(filter).await?;
    Ok(Json(series))
}

/// Departments with the most outstanding loans
#[utoipa::path(
    get,
    path = "/reports/top-departments",
    tag = "reports",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Top departments", body = Vec<DepartmentCount>)
    )
)]
pub async fn top_departments(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<DepartmentCount>>> {
    let ranked = state.services.reports.top_departments().await?;
    Ok(Json(ranked))
}

/// Outstanding loans of one department
#[utoipa::path(
    get,
    path = "/reports/top-departments/{name}",
    tag = "reports",
    security(("bearer_auth" = [])),
    params(("name" = String, Path, description = "Department name")),
    responses(
        (status = 200, description = "Department drill-down", body = Vec<DepartmentLoan>)
    )
)]
pub async fn department_drilldown(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<DepartmentLoan>>> {
    let loans = state.services.reports.department_drilldown(&name).await?;
    Ok(Json(loans))
}
