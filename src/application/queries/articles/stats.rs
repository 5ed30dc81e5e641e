use super::ArticleQueryService;
use crate::application::{
    dto::{DashboardStatsDto, Principal},
    error::ApplicationResult,
};
use chrono::{Days, NaiveTime};

const RECENT_LIMIT: u32 = 5;

impl ArticleQueryService {
    /// Aggregate counts plus the most recently submitted articles awaiting
    /// review. "Today" is the current UTC calendar date.
    pub async fn dashboard_stats(&self, actor: &Principal) -> ApplicationResult<DashboardStatsDto> {
        let today_start = self
            .clock
            .now()
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();
        let today_end = today_start
            .checked_add_days(Days::new(1))
            .unwrap_or(today_start);

        let counts = self
            .read_repo
            .status_counts(&actor.business_id, today_start..today_end)
            .await?;
        let recent = self
            .read_repo
            .recent_pending(&actor.business_id, RECENT_LIMIT)
            .await?;

        Ok(DashboardStatsDto {
            total_articles: counts.total,
            pending_review: counts.pending_review,
            published: counts.published,
            rejected: counts.rejected,
            today_submissions: counts.submitted_today,
            recent_articles: recent.into_iter().map(Into::into).collect(),
        })
    }
}
