pub mod postgres_article;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
