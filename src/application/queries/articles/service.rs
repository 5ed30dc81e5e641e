// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::time::Clock, domain::article::ArticleReadRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { read_repo, clock }
    }
}
