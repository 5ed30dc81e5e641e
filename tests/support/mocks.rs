// tests/support/mocks.rs
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use newsdesk::application::ports::notifier::ReviewNotifier;
use newsdesk::application::ports::time::Clock;
use newsdesk::domain::article::{
    Article, ArticleChangeSet, ArticleFilter, ArticleId, ArticleReadRepository, ArticleStatus,
    ArticleWriteRepository, BusinessId, NewArticle, StatusCounts,
};
use newsdesk::domain::errors::DomainResult;

/* -------------------------------- repositories -------------------------------- */

/// Map-backed repository implementing both sides of the article store.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<HashMap<Uuid, Article>>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, articles: impl IntoIterator<Item = Article>) {
        let mut map = self.inner.lock().unwrap();
        for article in articles {
            map.insert(article.id.into(), article);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn get(&self, id: Uuid) -> Option<Article> {
        self.inner.lock().unwrap().get(&id).cloned()
    }
}

fn apply_change(article: &mut Article, change: ArticleChangeSet) {
    if let Some(title) = change.title {
        article.title = title;
    }
    if let Some(subtitle) = change.subtitle {
        article.subtitle = Some(subtitle);
    }
    if let Some(content) = change.content {
        article.content = content;
    }
    if let Some(url) = change.cover_image_url {
        article.cover_image_url = Some(url);
    }
    if let Some(category) = change.category {
        article.category = category;
    }
    if let Some(author_name) = change.author_name {
        article.author_name = author_name;
    }
    if let Some(status) = change.status {
        article.status = status;
    }
    if let Some(at) = change.submitted_at {
        article.submitted_at = Some(at);
    }
    if let Some(reviewer) = change.approved_by {
        article.approved_by = Some(reviewer.id);
        article.approved_by_name = Some(reviewer.name);
    }
    if let Some(reviewer) = change.rejected_by {
        article.rejected_by = Some(reviewer.id);
        article.rejected_by_name = Some(reviewer.name);
    }
    if let Some(reason) = change.rejection_reason {
        article.rejection_reason = Some(reason);
    }
    if let Some(at) = change.published_at {
        article.published_at = Some(at);
    }
    if let Some(at) = change.rejected_at {
        article.rejected_at = Some(at);
    }
    article.updated_at = change.updated_at;
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        let article = Article {
            id: new.id,
            business_id: new.business_id,
            title: new.title,
            subtitle: new.subtitle,
            content: new.content,
            cover_image_url: new.cover_image_url,
            category: new.category,
            author_name: new.author_name,
            author_id: new.author_id,
            status: new.status,
            submitted_at: new.submitted_at,
            approved_by: None,
            approved_by_name: None,
            rejected_by: None,
            rejected_by_name: None,
            rejection_reason: None,
            published_at: new.published_at,
            rejected_at: None,
            created_at: new.created_at,
            updated_at: new.updated_at,
        };
        self.inner
            .lock()
            .unwrap()
            .insert(article.id.into(), article.clone());
        Ok(article)
    }

    async fn update(
        &self,
        business: &BusinessId,
        change: ArticleChangeSet,
    ) -> DomainResult<Option<Article>> {
        let mut map = self.inner.lock().unwrap();
        let Some(article) = map.get_mut(&Uuid::from(change.id)) else {
            return Ok(None);
        };
        if article.business_id != *business {
            return Ok(None);
        }
        apply_change(article, change);
        Ok(Some(article.clone()))
    }
}

fn matches(article: &Article, business: &BusinessId, filter: &ArticleFilter) -> bool {
    article.business_id == *business
        && filter.status.is_none_or(|s| article.status == s)
        && filter
            .author_id
            .as_deref()
            .is_none_or(|a| article.author_id == a)
        && filter.category.is_none_or(|c| article.category == c)
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(
        &self,
        business: &BusinessId,
        id: ArticleId,
    ) -> DomainResult<Option<Article>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .get(&Uuid::from(id))
            .filter(|a| a.business_id == *business)
            .cloned())
    }

    async fn list_paginated(
        &self,
        business: &BusinessId,
        filter: &ArticleFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let map = self.inner.lock().unwrap();
        let mut hits: Vec<Article> = map
            .values()
            .filter(|a| matches(a, business, filter))
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = hits.len() as u64;
        let page = hits
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn status_counts(
        &self,
        business: &BusinessId,
        today: Range<DateTime<Utc>>,
    ) -> DomainResult<StatusCounts> {
        let map = self.inner.lock().unwrap();
        let mut counts = StatusCounts::default();
        for article in map.values().filter(|a| a.business_id == *business) {
            counts.total += 1;
            match article.status {
                ArticleStatus::PendingReview => counts.pending_review += 1,
                ArticleStatus::Published => counts.published += 1,
                ArticleStatus::Rejected => counts.rejected += 1,
                ArticleStatus::Draft => {}
            }
            if article
                .submitted_at
                .is_some_and(|at| today.contains(&at))
            {
                counts.submitted_today += 1;
            }
        }
        Ok(counts)
    }

    async fn recent_pending(
        &self,
        business: &BusinessId,
        limit: u32,
    ) -> DomainResult<Vec<Article>> {
        let map = self.inner.lock().unwrap();
        let mut pending: Vec<Article> = map
            .values()
            .filter(|a| {
                a.business_id == *business && a.status == ArticleStatus::PendingReview
            })
            .cloned()
            .collect();
        pending.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        pending.truncate(limit as usize);
        Ok(pending)
    }
}

/* -------------------------------- clock & notifier -------------------------------- */

#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub submissions: Mutex<Vec<Uuid>>,
    pub decisions: Mutex<Vec<Uuid>>,
}

#[async_trait]
impl ReviewNotifier for RecordingNotifier {
    async fn submitted_for_review(&self, article: &Article) {
        self.submissions.lock().unwrap().push(article.id.into());
    }

    async fn review_decided(&self, article: &Article) {
        self.decisions.lock().unwrap().push(article.id.into());
    }
}
