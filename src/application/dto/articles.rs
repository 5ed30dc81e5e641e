use crate::domain::article::{Article, ArticleStatus, Category};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub business_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub category: Category,
    pub author_name: String,
    pub author_id: String,
    pub status: ArticleStatus,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            business_id: article.business_id.into(),
            title: article.title.into_inner(),
            subtitle: article.subtitle,
            content: article.content.into_inner(),
            cover_image_url: article.cover_image_url,
            category: article.category,
            author_name: article.author_name,
            author_id: article.author_id,
            status: article.status,
            submitted_at: article.submitted_at,
            approved_by: article.approved_by,
            approved_by_name: article.approved_by_name,
            rejected_by: article.rejected_by,
            rejected_by_name: article.rejected_by_name,
            rejection_reason: article.rejection_reason,
            published_at: article.published_at,
            rejected_at: article.rejected_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Listing shape: everything but the body content.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    pub category: Category,
    pub author_name: String,
    pub author_id: String,
    pub status: ArticleStatus,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            subtitle: article.subtitle,
            cover_image_url: article.cover_image_url,
            category: article.category,
            author_name: article.author_name,
            author_id: article.author_id,
            status: article.status,
            submitted_at: article.submitted_at,
            created_at: article.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsDto {
    pub total_articles: u64,
    pub pending_review: u64,
    pub published: u64,
    pub rejected: u64,
    pub today_submissions: u64,
    pub recent_articles: Vec<ArticleSummaryDto>,
}
