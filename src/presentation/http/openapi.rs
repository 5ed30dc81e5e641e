// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, ArticleSummaryDto, DashboardStatsDto, Page};
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::approve_article,
        crate::presentation::http::controllers::articles::reject_article,
        crate::presentation::http::controllers::dashboard::dashboard_stats,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::ApproveArticleRequest,
            crate::presentation::http::controllers::articles::RejectArticleRequest,
            ArticleDto,
            ArticleSummaryDto,
            DashboardStatsDto,
            Page<ArticleSummaryDto>
        )
    ),
    tags(
        (name = "Articles", description = "Article submission and management endpoints"),
        (name = "Review", description = "Reviewer decision endpoints"),
        (name = "Dashboard", description = "Aggregate statistics for reviewers"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&SecurityAddon),
    security(("bearerAuth" = [])),
    info(
        title = "Newsdesk API",
        description = "Multi-tenant article submission and review workflow",
        version = env!("CARGO_PKG_VERSION")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/articles",
            "/api/articles/list",
            "/api/articles/{id}",
            "/api/articles/{id}/update",
            "/api/articles/{id}/approve",
            "/api/articles/{id}/reject",
            "/api/dashboard/stats",
            "/health",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing OpenAPI path {path}"
            );
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
