use crate::domain::article::{
    Article, ArticleChangeSet, ArticleContent, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleStatus, ArticleTitle, ArticleWriteRepository, BusinessId, Category, NewArticle,
    StatusCounts,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::{ops::Range, sync::Arc};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "id, business_id, title, subtitle, content, cover_image_url, \
     category, author_name, author_id, status, submitted_at, approved_by, approved_by_name, \
     rejected_by, rejected_by_name, rejection_reason, published_at, rejected_at, created_at, \
     updated_at";

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: Arc<PgPool>,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: Arc<PgPool>,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    business_id: String,
    title: String,
    subtitle: Option<String>,
    content: String,
    cover_image_url: Option<String>,
    category: String,
    author_name: String,
    author_id: String,
    status: String,
    submitted_at: Option<DateTime<Utc>>,
    approved_by: Option<String>,
    approved_by_name: Option<String>,
    rejected_by: Option<String>,
    rejected_by_name: Option<String>,
    rejection_reason: Option<String>,
    published_at: Option<DateTime<Utc>>,
    rejected_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::from(row.id),
            business_id: BusinessId::new(row.business_id)?,
            title: ArticleTitle::new(row.title)?,
            subtitle: row.subtitle,
            content: ArticleContent::new(row.content)?,
            cover_image_url: row.cover_image_url,
            category: row.category.parse::<Category>()?,
            author_name: row.author_name,
            author_id: row.author_id,
            status: row.status.parse::<ArticleStatus>()?,
            submitted_at: row.submitted_at,
            approved_by: row.approved_by,
            approved_by_name: row.approved_by_name,
            rejected_by: row.rejected_by,
            rejected_by_name: row.rejected_by_name,
            rejection_reason: row.rejection_reason,
            published_at: row.published_at,
            rejected_at: row.rejected_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            id,
            business_id,
            title,
            subtitle,
            content,
            cover_image_url,
            category,
            author_name,
            author_id,
            status,
            submitted_at,
            published_at,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (id, business_id, title, subtitle, content, cover_image_url, \
             category, author_name, author_id, status, submitted_at, published_at, created_at, \
             updated_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(Uuid::from(id))
            .bind(business_id.as_str())
            .bind(title.as_str())
            .bind(subtitle)
            .bind(content.as_str())
            .bind(cover_image_url)
            .bind(category.as_str())
            .bind(author_name)
            .bind(author_id)
            .bind(status.as_str())
            .bind(submitted_at)
            .bind(published_at)
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_error)?;

        Article::try_from(row)
    }

    async fn update(
        &self,
        business: &BusinessId,
        change: ArticleChangeSet,
    ) -> DomainResult<Option<Article>> {
        let ArticleChangeSet {
            id,
            title,
            subtitle,
            content,
            cover_image_url,
            category,
            author_name,
            status,
            submitted_at,
            approved_by,
            rejected_by,
            rejection_reason,
            published_at,
            rejected_at,
            updated_at,
        } = change;

        let (approved_by_id, approved_by_name) = approved_by
            .map(|r| (Some(r.id), Some(r.name)))
            .unwrap_or((None, None));
        let (rejected_by_id, rejected_by_name) = rejected_by
            .map(|r| (Some(r.id), Some(r.name)))
            .unwrap_or((None, None));

        let sql = format!(
            "UPDATE articles SET \
             title = COALESCE($3, title), \
             subtitle = COALESCE($4, subtitle), \
             content = COALESCE($5, content), \
             cover_image_url = COALESCE($6, cover_image_url), \
             category = COALESCE($7, category), \
             author_name = COALESCE($8, author_name), \
             status = COALESCE($9, status), \
             submitted_at = COALESCE($10, submitted_at), \
             approved_by = COALESCE($11, approved_by), \
             approved_by_name = COALESCE($12, approved_by_name), \
             rejected_by = COALESCE($13, rejected_by), \
             rejected_by_name = COALESCE($14, rejected_by_name), \
             rejection_reason = COALESCE($15, rejection_reason), \
             published_at = COALESCE($16, published_at), \
             rejected_at = COALESCE($17, rejected_at), \
             updated_at = $18 \
             WHERE id = $1 AND business_id = $2 \
             RETURNING {ARTICLE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(Uuid::from(id))
            .bind(business.as_str())
            .bind(title.as_ref().map(ArticleTitle::as_str))
            .bind(subtitle)
            .bind(content.as_ref().map(ArticleContent::as_str))
            .bind(cover_image_url)
            .bind(category.map(|c| c.as_str()))
            .bind(author_name)
            .bind(status.map(|s| s.as_str()))
            .bind(submitted_at)
            .bind(approved_by_id)
            .bind(approved_by_name)
            .bind(rejected_by_id)
            .bind(rejected_by_name)
            .bind(rejection_reason)
            .bind(published_at)
            .bind(rejected_at)
            .bind(updated_at)
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }
}

fn apply_filter<'a>(
    builder: &mut QueryBuilder<'a, Postgres>,
    business: &'a BusinessId,
    filter: &'a ArticleFilter,
) {
    builder.push(" WHERE business_id = ");
    builder.push_bind(business.as_str());
    if let Some(status) = filter.status {
        builder.push(" AND status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(author_id) = filter.author_id.as_deref() {
        builder.push(" AND author_id = ");
        builder.push_bind(author_id);
    }
    if let Some(category) = filter.category {
        builder.push(" AND category = ");
        builder.push_bind(category.as_str());
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(
        &self,
        business: &BusinessId,
        id: ArticleId,
    ) -> DomainResult<Option<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1 AND business_id = $2"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(Uuid::from(id))
            .bind(business.as_str())
            .fetch_optional(&*self.pool)
            .await
            .map_err(map_error)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_paginated(
        &self,
        business: &BusinessId,
        filter: &ArticleFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut list_builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        apply_filter(&mut list_builder, business, filter);
        list_builder.push(" ORDER BY created_at DESC LIMIT ");
        list_builder.push_bind(i64::from(limit));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(i64::from(offset));

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_error)?;

        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles");
        apply_filter(&mut count_builder, business, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_error)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total as u64))
    }

    async fn status_counts(
        &self,
        business: &BusinessId,
        today: Range<DateTime<Utc>>,
    ) -> DomainResult<StatusCounts> {
        #[derive(FromRow)]
        struct CountsRow {
            total: i64,
            pending_review: i64,
            published: i64,
            rejected: i64,
            submitted_today: i64,
        }

        let row = sqlx::query_as::<_, CountsRow>(
            "SELECT COUNT(*) AS total, \
             COUNT(*) FILTER (WHERE status = 'pending_review') AS pending_review, \
             COUNT(*) FILTER (WHERE status = 'published') AS published, \
             COUNT(*) FILTER (WHERE status = 'rejected') AS rejected, \
             COUNT(*) FILTER (WHERE submitted_at >= $2 AND submitted_at < $3) AS submitted_today \
             FROM articles WHERE business_id = $1",
        )
        .bind(business.as_str())
        .bind(today.start)
        .bind(today.end)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(StatusCounts {
            total: row.total as u64,
            pending_review: row.pending_review as u64,
            published: row.published as u64,
            rejected: row.rejected as u64,
            submitted_today: row.submitted_today as u64,
        })
    }

    async fn recent_pending(
        &self,
        business: &BusinessId,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        let sql = format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles \
             WHERE business_id = $1 AND status = 'pending_review' \
             ORDER BY submitted_at DESC NULLS LAST LIMIT $2"
        );
        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(business.as_str())
            .bind(i64::from(limit))
            .fetch_all(&*self.pool)
            .await
            .map_err(map_error)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
