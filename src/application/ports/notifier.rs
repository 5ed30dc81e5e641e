// src/application/ports/notifier.rs
use crate::domain::article::Article;
use async_trait::async_trait;

/// Post-transition notification hook. Delivery is out of scope; failures
/// must never fail the triggering operation, so the methods are infallible.
#[async_trait]
pub trait ReviewNotifier: Send + Sync {
    /// A contributor submission has entered `pending_review`.
    async fn submitted_for_review(&self, article: &Article);
    /// A reviewer approved or rejected the article.
    async fn review_decided(&self, article: &Article);
}
