pub mod articles;
pub mod auth;
pub mod pagination;

pub use articles::{ArticleDto, ArticleSummaryDto, DashboardStatsDto};
pub use auth::Principal;
pub use pagination::Page;
