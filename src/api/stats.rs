//! Dashboard statistics endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{error::AppResult, services::reports::Dashboard};

use super::AuthenticatedUser;

/// Query parameters for the dashboard
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct StatsQuery {
    /// Reference date for the overdue computation; defaults to today
    pub as_of: Option<NaiveDate>,
}

/// Dashboard counters and the overdue listing
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    params(StatsQuery),
    responses(
        (status = 200, description = "Dashboard statistics", body = Dashboard)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<Dashboard>> {
    let as_of = query.as_of.unwrap_or_else(crate::services::today);
    let dashboard = state.services.reports.dashboard(as_of).await?;
    Ok(Json(dashboard))
}
