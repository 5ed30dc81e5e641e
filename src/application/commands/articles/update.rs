use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, Principal},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleChangeSet, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Category,
    },
};
use uuid::Uuid;

pub struct UpdateArticleCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub category: Option<String>,
    pub author_name: Option<String>,
    pub status: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &Principal,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(command.id);
        let mut article = self
            .read_repo
            .find_by_id(&actor.business_id, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        let mut change = ArticleChangeSet::new(id, now);

        if let Some(title) = command.title {
            change = change.with_title(ArticleTitle::new(title)?);
        }
        if let Some(subtitle) = command.subtitle {
            change = change.with_subtitle(subtitle);
        }
        if let Some(content) = command.content {
            change = change.with_content(ArticleContent::new(content)?);
        }
        if let Some(url) = command.cover_image_url {
            change = change.with_cover_image_url(url);
        }
        if let Some(category) = command.category {
            change = change.with_category(category.parse::<Category>()?);
        }
        if let Some(author_name) = command.author_name {
            if author_name.trim().is_empty() {
                return Err(ApplicationError::validation("author_name cannot be empty"));
            }
            change = change.with_author_name(author_name);
        }

        let mut entered_review = false;
        if let Some(status) = command.status {
            let new_status = status.parse::<ArticleStatus>()?;
            entered_review = article.change_status(new_status, actor.privileged, now);
            change = change.with_workflow_state(&article);
        }

        let updated = self
            .write_repo
            .update(&actor.business_id, change)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if entered_review {
            self.notifier.submitted_for_review(&updated).await;
        }
        Ok(updated.into())
    }
}
