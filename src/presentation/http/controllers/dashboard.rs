// src/presentation/http/controllers/dashboard.rs
use crate::application::dto::DashboardStatsDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Review dashboard statistics.", body = DashboardStatsDto)
    ),
    tag = "Dashboard",
    security(("bearerAuth" = []))
)]
pub async fn dashboard_stats(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .article_queries
        .dashboard_stats(&actor)
        .await
        .into_http()
        .map(Json)
}
