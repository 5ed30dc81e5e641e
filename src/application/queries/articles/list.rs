use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, Page, Principal},
        error::ApplicationResult,
    },
    domain::article::{ArticleFilter, ArticleStatus, Category},
};

pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub author_id: Option<String>,
    pub category: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 100;

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: &Principal,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleSummaryDto>> {
        let filter = ArticleFilter {
            status: query
                .status
                .as_deref()
                .map(str::parse::<ArticleStatus>)
                .transpose()?,
            author_id: query.author_id,
            category: query
                .category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()?,
        };

        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit.min(MAX_LIMIT)
        };
        let page = query.offset / limit + 1;

        let (records, total) = self
            .read_repo
            .list_paginated(&actor.business_id, &filter, limit, query.offset)
            .await?;

        let data = records.into_iter().map(Into::into).collect();
        Ok(Page::new(data, total, page, limit))
    }
}
