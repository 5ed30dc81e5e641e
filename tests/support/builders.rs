// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use newsdesk::application::dto::Principal;
use newsdesk::domain::article::*;

pub fn principal(business: &str, privileged: bool) -> Principal {
    Principal {
        actor_id: if privileged { "staff-1" } else { "writer-1" }.into(),
        actor_name: if privileged { "Staff Member" } else { "Writer" }.into(),
        business_id: BusinessId::new(business).unwrap(),
        privileged,
    }
}

pub struct ArticleBuilder {
    id: Uuid,
    business: String,
    title: String,
    author_id: String,
    category: Category,
    status: ArticleStatus,
    submitted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            business: "acme".into(),
            title: "Test Article".into(),
            author_id: "writer-1".into(),
            category: Category::Other,
            status: ArticleStatus::Draft,
            submitted_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn business(mut self, business: impl Into<String>) -> Self {
        self.business = business.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn submitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.submitted_at = Some(at);
        self
    }

    /// Shifts created_at back so newest-first ordering is deterministic.
    pub fn created_hours_ago(mut self, hours: i64) -> Self {
        self.created_at = Utc::now() - Duration::hours(hours);
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::from(self.id),
            business_id: BusinessId::new(self.business).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            subtitle: None,
            content: ArticleContent::new("Test body").unwrap(),
            cover_image_url: None,
            category: self.category,
            author_name: "Writer".into(),
            author_id: self.author_id,
            status: self.status,
            submitted_at: self.submitted_at,
            approved_by: None,
            approved_by_name: None,
            rejected_by: None,
            rejected_by_name: None,
            rejection_reason: None,
            published_at: None,
            rejected_at: None,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
