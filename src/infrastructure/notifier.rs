use crate::application::ports::notifier::ReviewNotifier;
use crate::domain::article::Article;
use async_trait::async_trait;

/// Default notifier: logs the event and delivers nothing.
#[derive(Default, Clone)]
pub struct LogReviewNotifier;

#[async_trait]
impl ReviewNotifier for LogReviewNotifier {
    async fn submitted_for_review(&self, article: &Article) {
        tracing::info!(
            article_id = %article.id,
            title = %article.title,
            author = %article.author_name,
            "article submitted for review"
        );
    }

    async fn review_decided(&self, article: &Article) {
        tracing::info!(
            article_id = %article.id,
            status = %article.status,
            "review decision recorded"
        );
    }
}
