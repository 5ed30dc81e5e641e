pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleChangeSet, NewArticle};
pub use repository::{
    ArticleFilter, ArticleReadRepository, ArticleWriteRepository, StatusCounts,
};
pub use value_objects::{
    ArticleContent, ArticleId, ArticleStatus, ArticleTitle, BusinessId, Category, ReviewerRef,
};
