// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleStatus, ArticleTitle, BusinessId, Category, ReviewerRef,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub business_id: BusinessId,
    pub title: ArticleTitle,
    pub subtitle: Option<String>,
    pub content: ArticleContent,
    pub cover_image_url: Option<String>,
    pub category: Category,
    pub author_name: String,
    pub author_id: String,
    pub status: ArticleStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
    pub approved_by_name: Option<String>,
    pub rejected_by: Option<String>,
    pub rejected_by_name: Option<String>,
    pub rejection_reason: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn submit(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::PendingReview;
        self.submitted_at = Some(now);
        self.updated_at = now;
    }

    pub fn approve(&mut self, reviewer: ReviewerRef, now: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.approved_by = Some(reviewer.id);
        self.approved_by_name = Some(reviewer.name);
        self.published_at = Some(now);
        self.updated_at = now;
    }

    pub fn reject(&mut self, reviewer: ReviewerRef, reason: String, now: DateTime<Utc>) {
        self.status = ArticleStatus::Rejected;
        self.rejected_by = Some(reviewer.id);
        self.rejected_by_name = Some(reviewer.name);
        self.rejection_reason = Some(reason);
        self.rejected_at = Some(now);
        self.updated_at = now;
    }

    /// Applies a caller-requested status, stamping the timestamps the
    /// transition earns. Returns whether the article entered review.
    pub fn change_status(
        &mut self,
        status: ArticleStatus,
        privileged: bool,
        now: DateTime<Utc>,
    ) -> bool {
        let entered_review =
            status == ArticleStatus::PendingReview && self.status != ArticleStatus::PendingReview;
        if entered_review {
            self.submit(now);
        } else {
            self.status = status;
            self.updated_at = now;
        }
        if status == ArticleStatus::Published && privileged {
            self.published_at = Some(now);
        }
        entered_review
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub id: ArticleId,
    pub business_id: BusinessId,
    pub title: ArticleTitle,
    pub subtitle: Option<String>,
    pub content: ArticleContent,
    pub cover_image_url: Option<String>,
    pub category: Category,
    pub author_name: String,
    pub author_id: String,
    pub status: ArticleStatus,
    pub submitted_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied as a single-row write. `None` fields keep their
/// stored value.
#[derive(Debug, Clone)]
pub struct ArticleChangeSet {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub subtitle: Option<String>,
    pub content: Option<ArticleContent>,
    pub cover_image_url: Option<String>,
    pub category: Option<Category>,
    pub author_name: Option<String>,
    pub status: Option<ArticleStatus>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub approved_by: Option<ReviewerRef>,
    pub rejected_by: Option<ReviewerRef>,
    pub rejection_reason: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleChangeSet {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            subtitle: None,
            content: None,
            cover_image_url: None,
            category: None,
            author_name: None,
            status: None,
            submitted_at: None,
            approved_by: None,
            rejected_by: None,
            rejection_reason: None,
            published_at: None,
            rejected_at: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_subtitle(mut self, subtitle: String) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_cover_image_url(mut self, url: String) -> Self {
        self.cover_image_url = Some(url);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_author_name(mut self, author_name: String) -> Self {
        self.author_name = Some(author_name);
        self
    }

    /// Copies the entity's workflow state into the change set. Call after
    /// one of the transition methods has run so the persisted row matches
    /// the mutated entity.
    pub fn with_workflow_state(mut self, article: &Article) -> Self {
        self.status = Some(article.status);
        self.submitted_at = article.submitted_at;
        self.approved_by = reviewer_of(&article.approved_by, &article.approved_by_name);
        self.rejected_by = reviewer_of(&article.rejected_by, &article.rejected_by_name);
        self.rejection_reason = article.rejection_reason.clone();
        self.published_at = article.published_at;
        self.rejected_at = article.rejected_at;
        self.updated_at = article.updated_at;
        self
    }
}

fn reviewer_of(id: &Option<String>, name: &Option<String>) -> Option<ReviewerRef> {
    id.as_ref().map(|id| ReviewerRef {
        id: id.clone(),
        name: name.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{ArticleContent, ArticleTitle, BusinessId};
    use chrono::Utc;

    fn sample_article() -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::generate(),
            business_id: BusinessId::new("acme").unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            subtitle: None,
            content: ArticleContent::new("content").unwrap(),
            cover_image_url: None,
            category: Category::Other,
            author_name: "Writer".into(),
            author_id: "writer-1".into(),
            status: ArticleStatus::Draft,
            submitted_at: None,
            approved_by: None,
            approved_by_name: None,
            rejected_by: None,
            rejected_by_name: None,
            rejection_reason: None,
            published_at: None,
            rejected_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn submit_stamps_submitted_at() {
        let mut article = sample_article();
        let now = Utc::now();
        article.submit(now);
        assert_eq!(article.status, ArticleStatus::PendingReview);
        assert_eq!(article.submitted_at, Some(now));
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn approve_records_reviewer_and_publishes() {
        let mut article = sample_article();
        let now = Utc::now();
        article.approve(ReviewerRef::new("rev-1", "Reviewer").unwrap(), now);
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.approved_by.as_deref(), Some("rev-1"));
        assert_eq!(article.approved_by_name.as_deref(), Some("Reviewer"));
        assert_eq!(article.published_at, Some(now));
    }

    #[test]
    fn change_status_into_review_stamps_submission() {
        let mut article = sample_article();
        let now = Utc::now();
        let entered = article.change_status(ArticleStatus::PendingReview, false, now);
        assert!(entered);
        assert_eq!(article.status, ArticleStatus::PendingReview);
        assert_eq!(article.submitted_at, Some(now));
    }

    #[test]
    fn change_status_to_published_stamps_only_for_privileged() {
        let now = Utc::now();

        let mut article = sample_article();
        assert!(!article.change_status(ArticleStatus::Published, false, now));
        assert_eq!(article.status, ArticleStatus::Published);
        assert_eq!(article.published_at, None);

        let mut article = sample_article();
        article.change_status(ArticleStatus::Published, true, now);
        assert_eq!(article.published_at, Some(now));
    }

    #[test]
    fn approval_projects_into_change_set() {
        let mut article = sample_article();
        let now = Utc::now();
        article.approve(ReviewerRef::new("rev-1", "Reviewer").unwrap(), now);

        let change = ArticleChangeSet::new(article.id, now).with_workflow_state(&article);
        assert_eq!(change.status, Some(ArticleStatus::Published));
        assert_eq!(change.published_at, Some(now));
        assert_eq!(
            change.approved_by.as_ref().map(|r| r.id.as_str()),
            Some("rev-1")
        );
        assert!(change.rejected_by.is_none());
    }

    #[test]
    fn rejection_projects_into_change_set() {
        let mut article = sample_article();
        let now = Utc::now();
        article.reject(
            ReviewerRef::new("rev-1", "Reviewer").unwrap(),
            "needs sources".into(),
            now,
        );

        let change = ArticleChangeSet::new(article.id, now).with_workflow_state(&article);
        assert_eq!(change.status, Some(ArticleStatus::Rejected));
        assert_eq!(change.rejected_at, Some(now));
        assert_eq!(change.rejection_reason.as_deref(), Some("needs sources"));
        assert_eq!(
            change.rejected_by.as_ref().map(|r| r.id.as_str()),
            Some("rev-1")
        );
    }

    #[test]
    fn reject_records_reviewer_and_reason() {
        let mut article = sample_article();
        let now = Utc::now();
        article.reject(
            ReviewerRef::new("rev-1", "Reviewer").unwrap(),
            "needs sources".into(),
            now,
        );
        assert_eq!(article.status, ArticleStatus::Rejected);
        assert_eq!(article.rejected_by.as_deref(), Some("rev-1"));
        assert_eq!(article.rejection_reason.as_deref(), Some("needs sources"));
        assert_eq!(article.rejected_at, Some(now));
    }
}
