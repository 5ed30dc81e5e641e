use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Principal},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};
use uuid::Uuid;

pub struct GetArticleQuery {
    pub id: Uuid,
}

impl ArticleQueryService {
    pub async fn get_article(
        &self,
        actor: &Principal,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDto> {
        self.read_repo
            .find_by_id(&actor.business_id, ArticleId::from(query.id))
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
