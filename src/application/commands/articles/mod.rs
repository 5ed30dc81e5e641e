pub mod create;
pub mod review;
pub mod service;
pub mod update;

pub use create::CreateArticleCommand;
pub use review::{ApproveArticleCommand, RejectArticleCommand};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
