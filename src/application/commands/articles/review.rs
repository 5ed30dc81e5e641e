// src/application/commands/articles/review.rs
//
// Approve and reject deliberately carry no guard on the prior status: a
// reviewer decision always lands, matching the documented workflow.
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, Principal},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleChangeSet, ArticleId},
};
use uuid::Uuid;

pub struct ApproveArticleCommand {
    pub id: Uuid,
    /// Accepted for API compatibility; the record stores no review notes.
    pub notes: Option<String>,
}

pub struct RejectArticleCommand {
    pub id: Uuid,
    pub reason: String,
}

impl ArticleCommandService {
    pub async fn approve_article(
        &self,
        actor: &Principal,
        command: ApproveArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_reviewer(actor)?;
        let ApproveArticleCommand { id, notes: _ } = command;
        let id = ArticleId::from(id);
        let mut article = self
            .read_repo
            .find_by_id(&actor.business_id, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        article.approve(actor.reviewer_ref()?, now);
        let change = ArticleChangeSet::new(id, now).with_workflow_state(&article);

        let updated = self
            .write_repo
            .update(&actor.business_id, change)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        tracing::info!(
            article_id = %article.id,
            reviewer = %actor.actor_id,
            "article approved"
        );
        self.notifier.review_decided(&updated).await;
        Ok(updated.into())
    }

    pub async fn reject_article(
        &self,
        actor: &Principal,
        command: RejectArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_reviewer(actor)?;
        if command.reason.trim().is_empty() {
            return Err(ApplicationError::validation(
                "rejection_reason cannot be empty",
            ));
        }
        let id = ArticleId::from(command.id);
        let mut article = self
            .read_repo
            .find_by_id(&actor.business_id, id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        article.reject(actor.reviewer_ref()?, command.reason, now);
        let change = ArticleChangeSet::new(id, now).with_workflow_state(&article);

        let updated = self
            .write_repo
            .update(&actor.business_id, change)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        tracing::info!(
            article_id = %article.id,
            reviewer = %actor.actor_id,
            "article rejected"
        );
        self.notifier.review_decided(&updated).await;
        Ok(updated.into())
    }
}

fn ensure_reviewer(actor: &Principal) -> ApplicationResult<()> {
    if actor.privileged {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "review decisions require a privileged principal",
        ))
    }
}
