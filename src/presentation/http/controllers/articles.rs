// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ApproveArticleCommand, CreateArticleCommand, RejectArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleSummaryDto, Page},
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleListParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub content: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub author_name: String,
    pub author_id: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ApproveArticleRequest {
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RejectArticleRequest {
    pub rejection_reason: String,
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Created article.", body = ArticleDto),
        (status = 400, description = "Validation failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles",
    security(("bearerAuth" = []))
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = CreateArticleCommand {
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        cover_image_url: payload.cover_image_url,
        category: payload.category,
        author_name: payload.author_name,
        author_id: payload.author_id,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .create_article(&actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article detail.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles",
    security(("bearerAuth" = []))
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(&actor, GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}/update",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Updated article.", body = ArticleDto),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles",
    security(("bearerAuth" = []))
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        subtitle: payload.subtitle,
        content: payload.content,
        cover_image_url: payload.cover_image_url,
        category: payload.category,
        author_name: payload.author_name,
        status: payload.status,
    };

    state
        .services
        .article_commands
        .update_article(&actor, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/list",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Paginated article listing.", body = Page<ArticleSummaryDto>)
    ),
    tag = "Articles",
    security(("bearerAuth" = []))
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleSummaryDto>>> {
    let query = ListArticlesQuery {
        status: params.status,
        author_id: params.author_id,
        category: params.category,
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .article_queries
        .list_articles(&actor, query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/articles/{id}/approve",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = ApproveArticleRequest,
    responses(
        (status = 200, description = "Approved article.", body = ArticleDto),
        (status = 403, description = "Caller is not a reviewer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Review",
    security(("bearerAuth" = []))
)]
pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<ApproveArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .approve_article(
            &actor,
            ApproveArticleCommand {
                id,
                notes: payload.notes,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/articles/{id}/reject",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = RejectArticleRequest,
    responses(
        (status = 200, description = "Rejected article.", body = ArticleDto),
        (status = 400, description = "Missing rejection reason.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller is not a reviewer.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Review",
    security(("bearerAuth" = []))
)]
pub async fn reject_article(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(id): Path<Uuid>,
    Json(payload): Json<RejectArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .reject_article(
            &actor,
            RejectArticleCommand {
                id,
                reason: payload.rejection_reason,
            },
        )
        .await
        .into_http()
        .map(Json)
}
