// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, Principal},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Category, NewArticle,
    },
};
use chrono::{DateTime, Utc};

pub struct CreateArticleCommand {
    pub title: String,
    pub subtitle: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub category: Option<String>,
    pub author_name: String,
    pub author_id: String,
    pub status: Option<String>,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &Principal,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let category = command
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()?
            .unwrap_or_default();
        let requested_status = command
            .status
            .as_deref()
            .map(str::parse::<ArticleStatus>)
            .transpose()?;

        if command.author_name.trim().is_empty() {
            return Err(ApplicationError::validation("author_name cannot be empty"));
        }
        if command.author_id.trim().is_empty() {
            return Err(ApplicationError::validation("author_id cannot be empty"));
        }

        let now = self.clock.now();
        let (status, submitted_at, published_at) =
            resolve_initial_state(requested_status, actor.privileged, now);

        let new_article = NewArticle {
            id: ArticleId::generate(),
            business_id: actor.business_id.clone(),
            title,
            subtitle: command.subtitle,
            content,
            cover_image_url: command.cover_image_url,
            category,
            author_name: command.author_name,
            author_id: command.author_id,
            status,
            submitted_at,
            published_at,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        if created.status == ArticleStatus::PendingReview && !actor.privileged {
            self.notifier.submitted_for_review(&created).await;
        }
        Ok(created.into())
    }
}

/// Contributor creates without an explicit status land straight in review;
/// a reviewer publishing on create gets the publication stamp. Any
/// explicitly requested status is otherwise stored as-is.
fn resolve_initial_state(
    requested: Option<ArticleStatus>,
    privileged: bool,
    now: DateTime<Utc>,
) -> (ArticleStatus, Option<DateTime<Utc>>, Option<DateTime<Utc>>) {
    let (status, submitted_at) = match requested {
        None if !privileged => (ArticleStatus::PendingReview, Some(now)),
        None => (ArticleStatus::Draft, None),
        Some(status) => (status, None),
    };
    let published_at = (privileged && status == ArticleStatus::Published).then_some(now);
    (status, submitted_at, published_at)
}
