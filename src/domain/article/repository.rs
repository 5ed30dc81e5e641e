use crate::domain::article::entity::{Article, ArticleChangeSet, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, BusinessId, Category};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::ops::Range;

/// Optional list filters, always applied on top of the tenant scope.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub author_id: Option<String>,
    pub category: Option<Category>,
}

/// Per-tenant aggregate counts for the reviewer dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: u64,
    pub pending_review: u64,
    pub published: u64,
    pub rejected: u64,
    pub submitted_today: u64,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies the change set as one atomic row update. Returns `None` when
    /// no row matches the id within the tenant.
    async fn update(
        &self,
        business: &BusinessId,
        change: ArticleChangeSet,
    ) -> DomainResult<Option<Article>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(
        &self,
        business: &BusinessId,
        id: ArticleId,
    ) -> DomainResult<Option<Article>>;

    /// Newest-first page plus the total filtered count.
    async fn list_paginated(
        &self,
        business: &BusinessId,
        filter: &ArticleFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Article>, u64)>;

    /// `today` bounds the submitted_at window counted as today's submissions.
    async fn status_counts(
        &self,
        business: &BusinessId,
        today: Range<DateTime<Utc>>,
    ) -> DomainResult<StatusCounts>;

    /// Most recently submitted pending_review articles, capped at `limit`.
    async fn recent_pending(
        &self,
        business: &BusinessId,
        limit: u32,
    ) -> DomainResult<Vec<Article>>;
}
